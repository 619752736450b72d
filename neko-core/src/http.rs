//! Shared HTTP client utilities
//!
//! This module provides shared, lazily-initialized HTTP clients for all
//! outbound calls. Using a single client per upstream allows connection
//! pooling and avoids resource duplication.

use reqwest::Client;
use std::sync::OnceLock;
use std::time::Duration;

/// Timeout for TheCatAPI requests in seconds
const CAT_API_TIMEOUT_SECS: u64 = 10;

/// Global HTTP client for chat completion calls (no request timeout)
static COMPLETION_CLIENT: OnceLock<Client> = OnceLock::new();

/// Global HTTP client for TheCatAPI calls (10s timeout)
static CAT_API_CLIENT: OnceLock<Client> = OnceLock::new();

/// Get or create the shared HTTP client for chat completion calls
///
/// Completion calls can run long, so this client carries no request
/// timeout; a hung provider blocks only the request that hit it.
pub fn get_completion_client() -> &'static Client {
    COMPLETION_CLIENT.get_or_init(|| {
        Client::builder()
            .user_agent("neko-rs/1.0")
            .build()
            .expect("Failed to create HTTP client - this should never fail")
    })
}

/// Get or create the shared HTTP client for TheCatAPI calls
///
/// Image searches are small and fast; anything over 10 seconds is treated
/// as a failed lookup.
pub fn get_cat_api_client() -> &'static Client {
    CAT_API_CLIENT.get_or_init(|| {
        Client::builder()
            .user_agent("neko-rs/1.0")
            .timeout(Duration::from_secs(CAT_API_TIMEOUT_SECS))
            .build()
            .expect("Failed to create HTTP client - this should never fail")
    })
}
