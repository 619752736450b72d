//! Chat dispatcher
//!
//! Forwards a user message to the chat completions API with the tool
//! descriptors attached, and routes any function-call request the model
//! makes through the tool registry. One completion call per request, no
//! history, no retries.

use crate::config::Config;
use crate::models::AssistantReply;
use crate::openai::{ChatRequest, OpenAiClient};
use crate::tools::{GetCatImages, ToolRegistry};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Failure at the dispatcher boundary, mapped to an HTTP status by the web
/// layer.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The completion call itself failed (network, credentials, quota)
    #[error("{0}")]
    Provider(#[source] anyhow::Error),
    /// A requested tool failed, e.g. unparseable arguments
    #[error("{0}")]
    Tool(#[source] anyhow::Error),
}

pub struct ChatDispatcher {
    client: OpenAiClient,
    model: String,
    tools: ToolRegistry,
}

impl ChatDispatcher {
    /// Build a dispatcher from startup configuration, registering the
    /// `get_cat_images` tool.
    pub fn new(config: &Config) -> Self {
        let mut tools = ToolRegistry::new();
        tools.register(Arc::new(GetCatImages::new(config)));

        Self {
            client: OpenAiClient::new(&config.openai_base_url, &config.openai_api_key),
            model: config.model.clone(),
            tools,
        }
    }

    /// Handle one chat message end to end.
    ///
    /// When the model requests a registered function, the tool's reply wins
    /// and any text content in the same response is ignored. An unknown
    /// function name falls through to the text path.
    pub async fn handle(&self, message: &str) -> Result<AssistantReply, DispatchError> {
        info!("User input: {message}");

        let request = ChatRequest::new(&self.model, message)
            .functions(self.tools.descriptors())
            .function_call_auto();

        let response = self
            .client
            .chat_completion(&request)
            .await
            .map_err(DispatchError::Provider)?;
        info!("Model response: {response:?}");

        if let Some(call) = response.function_call() {
            if let Some(tool) = self.tools.get(&call.name) {
                let reply = tool
                    .invoke(&call.arguments)
                    .await
                    .map_err(DispatchError::Tool)?;
                return Ok(AssistantReply::with_images(reply.content, reply.images));
            }
        }

        Ok(AssistantReply::text(response.content().unwrap_or_default()))
    }
}
