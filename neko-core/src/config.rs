use anyhow::{Context, Result};

/// Default chat model used when OPENAI_MODEL env var is not set
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Default OpenAI API base URL
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// Default TheCatAPI base URL
pub const DEFAULT_CAT_API_BASE_URL: &str = "https://api.thecatapi.com/v1";

/// Default listen port
pub const DEFAULT_PORT: u16 = 5000;

/// Application configuration, loaded once at startup and injected into the
/// dispatcher. Keeps credential lookup out of the request path.
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: String,
    pub openai_base_url: String,
    pub model: String,
    /// TheCatAPI key; without one the API still serves unfiltered results
    pub cat_api_key: Option<String>,
    pub cat_api_base_url: String,
    pub host: String,
    pub port: u16,
}

impl Config {
    /// Load configuration from a .env file and the environment
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Not an error if .env is missing

        let openai_api_key =
            std::env::var("OPENAI_API_KEY").context("OPENAI_API_KEY not set")?;

        let openai_base_url = std::env::var("OPENAI_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_OPENAI_BASE_URL.to_string());

        let model =
            std::env::var("OPENAI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let cat_api_key = std::env::var("CAT_API_KEY").ok().filter(|k| !k.is_empty());

        let cat_api_base_url = std::env::var("CAT_API_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_CAT_API_BASE_URL.to_string());

        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let port = std::env::var("PORT")
            .unwrap_or_else(|_| DEFAULT_PORT.to_string())
            .parse()
            .context("Invalid PORT")?;

        Ok(Self {
            openai_api_key,
            openai_base_url,
            model,
            cat_api_key,
            cat_api_base_url,
            host,
            port,
        })
    }
}
