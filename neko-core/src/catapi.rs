//! TheCatAPI image search client
//!
//! For breed IDs, see https://api.thecatapi.com/v1/breeds for a list of
//! possible values. More than 10 images or breed filtering requires a valid
//! API key.

use crate::config::Config;
use crate::http::get_cat_api_client;
use serde::Deserialize;
use tracing::warn;

/// A single image record returned by TheCatAPI; extra fields are ignored
#[derive(Debug, Deserialize)]
struct CatImage {
    url: String,
}

/// Fetches cat image URLs from TheCatAPI
#[derive(Debug, Clone)]
pub struct CatImageFetcher {
    base_url: String,
    api_key: Option<String>,
}

impl CatImageFetcher {
    pub fn new(config: &Config) -> Self {
        Self {
            base_url: config.cat_api_base_url.clone(),
            api_key: config.cat_api_key.clone(),
        }
    }

    /// Fetch up to `count` image URLs, optionally filtered by breed ID.
    ///
    /// The count range (1-100) and breed format are TheCatAPI's contract;
    /// values are passed through unvalidated. Any failure (network, non-2xx,
    /// malformed body) is logged and collapses into an empty list, which the
    /// caller cannot distinguish from a legitimately empty result set.
    pub async fn fetch(&self, breed: Option<&str>, count: u32) -> Vec<String> {
        let client = get_cat_api_client();

        let mut request = client
            .get(format!("{}/images/search", self.base_url))
            .query(&query_params(breed, count));
        if let Some(key) = &self.api_key {
            request = request.header("x-api-key", key);
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                warn!("Error calling TheCatAPI: {e}");
                return Vec::new();
            }
        };

        if !response.status().is_success() {
            warn!("TheCatAPI returned status {}", response.status());
            return Vec::new();
        }

        let images: Vec<CatImage> = match response.json().await {
            Ok(images) => images,
            Err(e) => {
                warn!("Failed to parse TheCatAPI response: {e}");
                return Vec::new();
            }
        };

        // Extract just the url fields, preserving the API's order
        images.into_iter().map(|image| image.url).collect()
    }
}

/// Build the query string for an image search. An empty breed is treated
/// the same as no breed at all.
fn query_params(breed: Option<&str>, count: u32) -> Vec<(&'static str, String)> {
    let mut params = vec![("limit", count.to_string())];
    if let Some(breed) = breed.filter(|b| !b.is_empty()) {
        params.push(("breed_ids", breed.to_string()));
    }
    params
}
