//! Z.ai client implementation.
//!
//! The Z.ai endpoint speaks the OpenAI-compatible chat-completions wire
//! format, so the client posts to `{base_url}/chat/completions` with a
//! bearer token.
//!
//! # Example
//!
//! ```rust,ignore
//! use llm::remote::ZaiClient;
//! use llm::{ChatModel, ChatRequest, Message, RemoteLlmConfig};
//!
//! let config = RemoteLlmConfig::from_env(
//!     "ZAI_API_KEY",
//!     "https://api.z.ai/v1",
//!     "glm-4.5-flash",
//! )?;
//! let client = ZaiClient::new(config)?;
//!
//! let request = ChatRequest::new(vec![Message::user("Hello!")]);
//! let response = client.chat(request).await?;
//! ```

use crate::chat::{ChatModel, ChatRequest, ChatResponse, Message, MessageRole, UsageMetadata};
use crate::config::RemoteLlmConfig;
use crate::error::{LlmError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Z.ai chat-completions client.
#[derive(Clone)]
pub struct ZaiClient {
    config: RemoteLlmConfig,
    client: Client,
}

impl ZaiClient {
    /// Create a new client with the given configuration.
    pub fn new(config: RemoteLlmConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(LlmError::HttpError)?;

        Ok(Self { config, client })
    }

    /// The configured model identifier.
    pub fn model(&self) -> &str {
        &self.config.model
    }

    fn convert_message(&self, msg: &Message) -> WireMessage {
        WireMessage {
            role: match msg.role {
                MessageRole::System => "system".to_string(),
                MessageRole::User => "user".to_string(),
                MessageRole::Assistant => "assistant".to_string(),
            },
            content: Some(msg.content.clone()),
        }
    }

    fn convert_response(&self, wire: WireResponse) -> Result<ChatResponse> {
        let choice = wire
            .choices
            .first()
            .ok_or_else(|| LlmError::InvalidResponse("response contained no choices".into()))?;

        let content = choice.message.content.clone().unwrap_or_default();

        let usage = wire
            .usage
            .as_ref()
            .map(|u| UsageMetadata::new(u.prompt_tokens, u.completion_tokens));

        let mut metadata = HashMap::new();
        metadata.insert(
            "model".to_string(),
            serde_json::Value::String(wire.model.clone()),
        );
        if let Some(reason) = &choice.finish_reason {
            metadata.insert(
                "finish_reason".to_string(),
                serde_json::Value::String(reason.clone()),
            );
        }

        Ok(ChatResponse {
            message: Message::assistant(content),
            usage,
            metadata,
        })
    }
}

#[async_trait]
impl ChatModel for ZaiClient {
    async fn chat(&self, request: ChatRequest) -> Result<ChatResponse> {
        let url = format!("{}/chat/completions", self.config.base_url);

        let messages: Vec<WireMessage> = request
            .messages
            .iter()
            .map(|m| self.convert_message(m))
            .collect();

        let req_body = WireRequest {
            model: self.config.model.clone(),
            messages,
            temperature: request.config.temperature,
            max_tokens: request.config.max_tokens,
            stream: false,
        };

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .json(&req_body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    LlmError::Timeout(format!("request to {} timed out", url))
                } else {
                    LlmError::HttpError(e)
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();

            return Err(match status.as_u16() {
                401 => LlmError::AuthenticationError(error_text),
                429 => LlmError::RateLimitExceeded(error_text),
                _ => LlmError::ProviderError(format!("Z.ai API error {}: {}", status, error_text)),
            });
        }

        let wire: WireResponse = response
            .json()
            .await
            .map_err(|e| LlmError::InvalidResponse(e.to_string()))?;

        self.convert_response(wire)
    }
}

// Wire types (OpenAI-compatible chat-completions format)

#[derive(Debug, Serialize)]
struct WireRequest {
    model: String,
    messages: Vec<WireMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<usize>,
    stream: bool,
}

#[derive(Debug, Serialize, Deserialize)]
struct WireMessage {
    role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WireResponse {
    model: String,
    choices: Vec<WireChoice>,
    usage: Option<WireUsage>,
}

#[derive(Debug, Deserialize)]
struct WireChoice {
    message: WireMessage,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WireUsage {
    prompt_tokens: usize,
    completion_tokens: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client() -> ZaiClient {
        let config = RemoteLlmConfig::new("test-key", "https://api.z.ai/v1", "glm-4.5-flash");
        ZaiClient::new(config).unwrap()
    }

    #[test]
    fn test_message_conversion() {
        let client = test_client();

        let sys = client.convert_message(&Message::system("You are helpful"));
        assert_eq!(sys.role, "system");
        assert_eq!(sys.content, Some("You are helpful".to_string()));

        let user = client.convert_message(&Message::user("Hello"));
        assert_eq!(user.role, "user");

        let asst = client.convert_message(&Message::assistant("Hi"));
        assert_eq!(asst.role, "assistant");
    }

    #[test]
    fn test_response_conversion() {
        let client = test_client();

        let wire = WireResponse {
            model: "glm-4.5-flash".to_string(),
            choices: vec![WireChoice {
                message: WireMessage {
                    role: "assistant".to_string(),
                    content: Some("Hi there!".to_string()),
                },
                finish_reason: Some("stop".to_string()),
            }],
            usage: Some(WireUsage {
                prompt_tokens: 10,
                completion_tokens: 20,
            }),
        };

        let response = client.convert_response(wire).unwrap();
        assert_eq!(response.text(), "Hi there!");
        assert_eq!(response.usage.as_ref().unwrap().input_tokens, 10);
        assert_eq!(response.usage.as_ref().unwrap().output_tokens, 20);
        assert!(response.metadata.contains_key("model"));
        assert!(response.metadata.contains_key("finish_reason"));
    }

    #[test]
    fn test_response_without_choices() {
        let client = test_client();

        let wire = WireResponse {
            model: "glm-4.5-flash".to_string(),
            choices: vec![],
            usage: None,
        };

        assert!(matches!(
            client.convert_response(wire),
            Err(LlmError::InvalidResponse(_))
        ));
    }

    #[test]
    fn test_response_with_missing_content() {
        let client = test_client();

        let wire = WireResponse {
            model: "glm-4.5-flash".to_string(),
            choices: vec![WireChoice {
                message: WireMessage {
                    role: "assistant".to_string(),
                    content: None,
                },
                finish_reason: None,
            }],
            usage: None,
        };

        // Missing content is tolerated and treated as empty output.
        let response = client.convert_response(wire).unwrap();
        assert_eq!(response.text(), "");
    }
}
