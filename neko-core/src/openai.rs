//! OpenAI chat completions client
//!
//! This module provides the wire types and client for the OpenAI chat
//! completions API, including the function-calling protocol used to let the
//! model request local tool invocations.

use crate::http::get_completion_client;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Request payload for the chat completions API
#[derive(Debug, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub functions: Option<Vec<FunctionDef>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function_call: Option<String>,
}

impl ChatRequest {
    /// Create a new chat request with a single user message
    pub fn new(model: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            messages: vec![Message::user(content)],
            functions: None,
            function_call: None,
        }
    }

    /// Advertise callable functions to the model
    pub fn functions(mut self, functions: Vec<FunctionDef>) -> Self {
        self.functions = Some(functions);
        self
    }

    /// Let the model decide whether to call a function
    pub fn function_call_auto(mut self) -> Self {
        self.function_call = Some("auto".to_string());
        self
    }
}

/// A message in the chat conversation
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Message {
    pub role: String,
    pub content: String,
}

impl Message {
    /// Create a user message
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }

    /// Create a system message
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    /// Create an assistant message
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: "assistant".to_string(),
            content: content.into(),
        }
    }
}

/// A function the model may request, advertised in the completion call
#[derive(Debug, Clone, Serialize)]
pub struct FunctionDef {
    pub name: String,
    pub description: String,
    /// JSON schema for the function's arguments
    pub parameters: serde_json::Value,
}

/// Response from the chat completions API
#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    pub choices: Vec<Choice>,
    #[serde(default)]
    pub usage: Option<Usage>,
}

impl ChatResponse {
    /// Get the text content of the first choice, if available
    pub fn content(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|c| c.message.content.as_deref())
    }

    /// Get the function call requested by the first choice, if any
    pub fn function_call(&self) -> Option<&FunctionCallRequest> {
        self.choices
            .first()
            .and_then(|c| c.message.function_call.as_ref())
    }
}

/// A single response choice
#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ResponseMessage,
    #[serde(default)]
    pub index: usize,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// The message content in a response choice
#[derive(Debug, Deserialize)]
pub struct ResponseMessage {
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub function_call: Option<FunctionCallRequest>,
}

/// A function invocation requested by the model
#[derive(Debug, Deserialize)]
pub struct FunctionCallRequest {
    pub name: String,
    /// Arguments as a raw JSON string, exactly as the provider sends them
    pub arguments: String,
}

/// Token usage information
#[derive(Debug, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// Client for the chat completions API
///
/// Holds the base URL and credential explicitly so tests can point it at a
/// local mock server instead of relying on ambient environment lookup.
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    base_url: String,
    api_key: String,
}

impl OpenAiClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Send a chat completion request
    pub async fn chat_completion(&self, request: &ChatRequest) -> Result<ChatResponse> {
        let client = get_completion_client();

        let response = client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .context("Failed to send request to OpenAI API")?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            anyhow::bail!("OpenAI API error {}: {}", status, text);
        }

        response
            .json()
            .await
            .context("Failed to parse OpenAI API response")
    }
}
