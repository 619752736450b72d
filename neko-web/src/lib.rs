pub mod routes;

use axum::Router;
use axum::routing::{get, post};
use neko_core::ChatDispatcher;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

/// Shared per-process state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub dispatcher: Arc<ChatDispatcher>,
}

/// Build the application router. CORS is open to all origins, as the API is
/// meant to be called straight from a browser client.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::index))
        .route("/chat", post(routes::chat))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
