pub mod catapi;
pub mod config;
pub mod dispatcher;
pub mod http;
pub mod models;
pub mod openai;
pub mod tools;

// Re-export commonly used types
pub use catapi::CatImageFetcher;
pub use config::Config;
pub use dispatcher::{ChatDispatcher, DispatchError};
pub use models::{AssistantReply, ChatMessage, ErrorReply};
pub use tools::{Tool, ToolRegistry};
