//! Chat-completion client types and providers for zanai.
//!
//! This crate defines the provider-agnostic chat types and the [`ChatModel`]
//! trait, plus the concrete remote client the service uses. The service layer
//! holds an `Arc<dyn ChatModel>` and never depends on a specific provider.
//!
//! # Example
//!
//! ```rust,ignore
//! use llm::remote::ZaiClient;
//! use llm::{ChatModel, ChatRequest, Message, RemoteLlmConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = RemoteLlmConfig::from_env(
//!         "ZAI_API_KEY",
//!         "https://api.z.ai/v1",
//!         "glm-4.5-flash",
//!     )?;
//!     let client = ZaiClient::new(config)?;
//!
//!     let request = ChatRequest::new(vec![
//!         Message::system("You are a helpful assistant"),
//!         Message::user("What is Rust?"),
//!     ])
//!     .with_temperature(0.7);
//!
//!     let response = client.chat(request).await?;
//!     println!("{}", response.text());
//!     Ok(())
//! }
//! ```

pub mod chat;
pub mod config;
pub mod error;
pub mod remote;

// Re-export commonly used types
pub use chat::{
    ChatConfig, ChatModel, ChatRequest, ChatResponse, Message, MessageRole, UsageMetadata,
};
pub use config::RemoteLlmConfig;
pub use error::{LlmError, Result};
