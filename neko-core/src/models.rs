use serde::{Deserialize, Serialize};

/// Inbound chat request body
///
/// A missing `message` key is treated as an empty message rather than a
/// validation error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatMessage {
    #[serde(default)]
    pub message: String,
}

/// Outbound assistant reply
///
/// `images` is present only when the model invoked the image tool; it may
/// then be empty (zero results and a failed lookup are indistinguishable).
#[derive(Debug, Clone, Serialize)]
pub struct AssistantReply {
    pub role: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
}

impl AssistantReply {
    /// A plain text reply
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            role: "assistant".to_string(),
            content: content.into(),
            images: None,
        }
    }

    /// A reply carrying tool-fetched image URLs
    pub fn with_images(content: impl Into<String>, images: Vec<String>) -> Self {
        Self {
            role: "assistant".to_string(),
            content: content.into(),
            images: Some(images),
        }
    }
}

/// Outbound error payload
#[derive(Debug, Clone, Serialize)]
pub struct ErrorReply {
    pub error: String,
}
