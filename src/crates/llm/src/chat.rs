//! Core chat types and the `ChatModel` trait.
//!
//! The service layer talks to completion providers exclusively through
//! [`ChatModel`], so the concrete provider (or a test stub) can be swapped
//! behind an `Arc<dyn ChatModel>`.

use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Role of a chat message sender.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// Instructions and persona context.
    System,
    /// End-user input.
    User,
    /// Model output.
    Assistant,
}

/// A single chat message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Role of the sender.
    pub role: MessageRole,
    /// Text content.
    pub content: String,
}

impl Message {
    /// Create a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }

    /// Create a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }

    /// Create an assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: content.into(),
        }
    }
}

/// Generation parameters for a chat request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Sampling temperature (provider default when unset).
    pub temperature: Option<f32>,
    /// Maximum number of tokens to generate.
    pub max_tokens: Option<usize>,
}

/// A request to a chat model: messages plus generation configuration.
#[derive(Debug, Clone)]
pub struct ChatRequest {
    /// The conversation to send.
    pub messages: Vec<Message>,
    /// Generation parameters.
    pub config: ChatConfig,
}

impl ChatRequest {
    /// Create a request with default configuration.
    pub fn new(messages: Vec<Message>) -> Self {
        Self {
            messages,
            config: ChatConfig::default(),
        }
    }

    /// Set the sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.config.temperature = Some(temperature);
        self
    }

    /// Set the maximum number of tokens to generate.
    pub fn with_max_tokens(mut self, max_tokens: usize) -> Self {
        self.config.max_tokens = Some(max_tokens);
        self
    }
}

/// Token accounting reported by the provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsageMetadata {
    /// Tokens consumed by the prompt.
    pub input_tokens: usize,
    /// Tokens generated in the completion.
    pub output_tokens: usize,
}

impl UsageMetadata {
    /// Create usage metadata from input and output token counts.
    pub fn new(input_tokens: usize, output_tokens: usize) -> Self {
        Self {
            input_tokens,
            output_tokens,
        }
    }

    /// Total tokens for the exchange.
    pub fn total_tokens(&self) -> usize {
        self.input_tokens + self.output_tokens
    }
}

/// A completed chat exchange.
#[derive(Debug, Clone)]
pub struct ChatResponse {
    /// The assistant message produced by the model.
    pub message: Message,
    /// Token usage, when the provider reports it.
    pub usage: Option<UsageMetadata>,
    /// Provider-specific metadata (model name, finish reason, ...).
    pub metadata: HashMap<String, serde_json::Value>,
}

impl ChatResponse {
    /// The text content of the assistant message.
    pub fn text(&self) -> &str {
        &self.message.content
    }
}

/// A chat-completion provider.
#[async_trait]
pub trait ChatModel: Send + Sync {
    /// Send a chat request and wait for the full completion.
    async fn chat(&self, request: ChatRequest) -> Result<ChatResponse>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_constructors() {
        let msg = Message::system("You are helpful");
        assert_eq!(msg.role, MessageRole::System);
        assert_eq!(msg.content, "You are helpful");

        let msg = Message::user("Hello");
        assert_eq!(msg.role, MessageRole::User);

        let msg = Message::assistant("Hi there!");
        assert_eq!(msg.role, MessageRole::Assistant);
    }

    #[test]
    fn test_request_builder() {
        let request = ChatRequest::new(vec![Message::user("Hello")])
            .with_temperature(0.7)
            .with_max_tokens(2000);

        assert_eq!(request.messages.len(), 1);
        assert_eq!(request.config.temperature, Some(0.7));
        assert_eq!(request.config.max_tokens, Some(2000));
    }

    #[test]
    fn test_usage_total() {
        let usage = UsageMetadata::new(10, 20);
        assert_eq!(usage.total_tokens(), 30);
    }

    #[test]
    fn test_response_text() {
        let response = ChatResponse {
            message: Message::assistant("The answer"),
            usage: None,
            metadata: HashMap::new(),
        };
        assert_eq!(response.text(), "The answer");
    }
}
