use neko_core::{ChatDispatcher, Config};
use neko_web::{AppState, app};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let config = Config::from_env()?;
    tracing::info!(
        "Starting neko-rs backend v{} (model: {})",
        env!("CARGO_PKG_VERSION"),
        config.model
    );
    if config.cat_api_key.is_none() {
        tracing::warn!(
            "CAT_API_KEY not set - breed filters and more than 10 images will not work"
        );
    }

    let state = AppState {
        dispatcher: Arc::new(ChatDispatcher::new(&config)),
    };

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {addr}");
    axum::serve(listener, app(state)).await?;

    Ok(())
}
