//! Tool registry for model-invocable functions
//!
//! The dispatcher advertises every registered tool's descriptor to the model
//! and routes function-call requests back through the registry by name.
//! Today the only tool is `get_cat_images`, but the dispatch stays a name
//! keyed lookup so adding tools needs no structural change.

use crate::catapi::CatImageFetcher;
use crate::config::Config;
use crate::openai::FunctionDef;
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use std::collections::HashMap;
use std::sync::Arc;

/// Result of a tool invocation, folded into the assistant reply
#[derive(Debug)]
pub struct ToolReply {
    /// Human-readable summary line
    pub content: String,
    /// Image URLs produced by the tool, in upstream order
    pub images: Vec<String>,
}

/// A capability the model may request by name
#[async_trait]
pub trait Tool: Send + Sync {
    /// Function name the model uses to request this tool
    fn name(&self) -> &str;

    /// Schema advertised to the model
    fn descriptor(&self) -> FunctionDef;

    /// Run the tool with the raw argument JSON from the provider.
    /// Unparseable arguments are an error, not a soft failure.
    async fn invoke(&self, arguments: &str) -> Result<ToolReply>;
}

/// Name-keyed collection of invocable tools
#[derive(Default)]
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, tool: Arc<dyn Tool>) {
        self.tools.insert(tool.name().to_string(), tool);
    }

    pub fn get(&self, name: &str) -> Option<&Arc<dyn Tool>> {
        self.tools.get(name)
    }

    /// Descriptors for every registered tool, for the completion request
    pub fn descriptors(&self) -> Vec<FunctionDef> {
        self.tools.values().map(|tool| tool.descriptor()).collect()
    }
}

/// The `get_cat_images` tool: fetches cat image URLs from TheCatAPI
pub struct GetCatImages {
    fetcher: CatImageFetcher,
}

impl GetCatImages {
    pub const NAME: &'static str = "get_cat_images";

    pub fn new(config: &Config) -> Self {
        Self {
            fetcher: CatImageFetcher::new(config),
        }
    }
}

/// Arguments the model supplies for `get_cat_images`
#[derive(Debug, Deserialize)]
struct GetCatImagesArgs {
    breed: Option<String>,
    #[serde(default = "default_count")]
    count: u32,
}

fn default_count() -> u32 {
    1
}

#[async_trait]
impl Tool for GetCatImages {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn descriptor(&self) -> FunctionDef {
        FunctionDef {
            name: Self::NAME.to_string(),
            description: "Retrieve cat images from TheCatAPI, optionally filtered by breed and number of images.".to_string(),
            parameters: json!({
                "type": "object",
                "properties": {
                    "breed": {
                        "type": "string",
                        "description": "Breed ID of cat (e.g. 'beng' for Bengal). Leave blank for random cats."
                    },
                    "count": {
                        "type": "integer",
                        "description": "How many cat images to retrieve (1-100). Defaults to 1.",
                        "default": 1
                    }
                },
                "required": []
            }),
        }
    }

    async fn invoke(&self, arguments: &str) -> Result<ToolReply> {
        let args: GetCatImagesArgs =
            serde_json::from_str(arguments).context("Invalid get_cat_images arguments")?;

        let images = self.fetcher.fetch(args.breed.as_deref(), args.count).await;

        Ok(ToolReply {
            content: format!(
                "Here are {} cat images for breed '{}':",
                images.len(),
                args.breed.as_deref().unwrap_or("random")
            ),
            images,
        })
    }
}
