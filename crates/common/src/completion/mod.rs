//! Completion service abstraction
//!
//! Wraps the hosted chat-completion endpoint behind a trait so the
//! pipeline can be tested without network access. One attempt per call,
//! bounded by the client timeout; the chat handler owns the fallback.

use crate::config::CompletionConfig;
use crate::errors::{AppError, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Trait for conversational completion
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Generate a reply from a system prompt and the latest user message
    async fn complete(&self, system_prompt: &str, user_message: &str) -> Result<String>;

    /// Get the model name
    fn model_name(&self) -> &str;
}

/// Fireworks chat-completions client
pub struct FireworksClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
    max_tokens: u32,
    temperature: f32,
    timeout_ms: u64,
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    temperature: f32,
    messages: Vec<WireMessage<'a>>,
}

#[derive(Serialize)]
struct WireMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct CompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

impl FireworksClient {
    /// Create a new client from configuration
    pub fn new(config: &CompletionConfig, api_key: String) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| AppError::Configuration {
                message: format!("Failed to create HTTP client: {}", e),
            })?;

        Ok(Self {
            client,
            api_key,
            base_url: config.api_base.clone(),
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
            timeout_ms: config.timeout_secs * 1000,
        })
    }
}

#[async_trait]
impl CompletionClient for FireworksClient {
    async fn complete(&self, system_prompt: &str, user_message: &str) -> Result<String> {
        let url = format!("{}/chat/completions", self.base_url);

        let request = CompletionRequest {
            model: &self.model,
            max_tokens: self.max_tokens,
            temperature: self.temperature,
            messages: vec![
                WireMessage {
                    role: "system",
                    content: system_prompt,
                },
                WireMessage {
                    role: "user",
                    content: user_message,
                },
            ],
        };

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AppError::CompletionTimeout {
                        timeout_ms: self.timeout_ms,
                    }
                } else {
                    AppError::CompletionError {
                        message: format!("Request failed: {}", e),
                    }
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::CompletionError {
                message: format!("API error {}: {}", status, body),
            });
        }

        let result: CompletionResponse =
            response.json().await.map_err(|e| AppError::CompletionError {
                message: format!("Failed to parse response: {}", e),
            })?;

        let content = result
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| AppError::CompletionError {
                message: "Empty response".to_string(),
            })?;

        Ok(content)
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

/// Mock client for testing
pub struct MockClient {
    reply: String,
    fail: bool,
}

impl MockClient {
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            fail: false,
        }
    }

    /// A mock that always fails, for exercising the fallback path
    pub fn failing() -> Self {
        Self {
            reply: String::new(),
            fail: true,
        }
    }
}

#[async_trait]
impl CompletionClient for MockClient {
    async fn complete(&self, _system_prompt: &str, _user_message: &str) -> Result<String> {
        if self.fail {
            return Err(AppError::CompletionError {
                message: "mock failure".to_string(),
            });
        }
        Ok(self.reply.clone())
    }

    fn model_name(&self) -> &str {
        "mock-completion"
    }
}

/// Create a completion client based on configuration
pub fn create_client(config: &CompletionConfig) -> Result<Arc<dyn CompletionClient>> {
    match config.provider.as_str() {
        "fireworks" => {
            let key = config
                .api_key
                .clone()
                .ok_or_else(|| AppError::Configuration {
                    message: "Fireworks API key required".to_string(),
                })?;
            Ok(Arc::new(FireworksClient::new(config, key)?))
        }
        "mock" => Ok(Arc::new(MockClient::new("mock reply"))),
        other => {
            tracing::warn!(provider = other, "Unknown completion provider, using mock");
            Ok(Arc::new(MockClient::new("mock reply")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_client() {
        let client = MockClient::new("hello");
        let reply = client.complete("system", "user").await.unwrap();
        assert_eq!(reply, "hello");
    }

    #[tokio::test]
    async fn test_failing_mock() {
        let client = MockClient::failing();
        assert!(client.complete("system", "user").await.is_err());
    }

    #[test]
    fn test_factory_requires_key() {
        let config = CompletionConfig {
            provider: "fireworks".to_string(),
            api_key: None,
            api_base: "https://api.fireworks.ai/inference/v1".to_string(),
            model: "accounts/fireworks/models/deepseek-v3p1".to_string(),
            max_tokens: 300,
            temperature: 0.4,
            timeout_secs: 30,
        };
        assert!(create_client(&config).is_err());
    }
}
