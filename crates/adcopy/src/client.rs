//! Clients for the external text-generation service.
//!
//! The dispatcher talks to [`CompletionClient`] trait objects so tests can
//! substitute doubles; [`OpenAiClient`] is the production implementation
//! against an OpenAI-compatible chat-completions endpoint.

use std::time::Duration;

use async_trait::async_trait;
use promo_core::config::GenerationConfig;
use promo_core::error::{PromoError, PromoResult};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::prompt::PromptPair;

/// One blocking completion call per invocation; no retry, no batching.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Send the prompt pair and return the raw message content.
    async fn complete(&self, prompts: &PromptPair) -> PromoResult<String>;
}

// ─── Wire types ─────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    response_format: ResponseFormat,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    format_type: &'static str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

// ─── OpenAI-compatible client ───────────────────────────────────────────────

pub struct OpenAiClient {
    http: reqwest::Client,
    config: GenerationConfig,
}

impl OpenAiClient {
    /// Build a client from generation settings. Fails when no credential is
    /// configured; callers decide demo mode before constructing this.
    pub fn new(config: GenerationConfig) -> PromoResult<Self> {
        if !config.is_configured() {
            return Err(PromoError::Config(
                "generation api_key is empty".to_string(),
            ));
        }
        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .build()
            .map_err(|e| PromoError::Config(format!("failed to build HTTP client: {}", e)))?;
        Ok(Self { http, config })
    }
}

#[async_trait]
impl CompletionClient for OpenAiClient {
    async fn complete(&self, prompts: &PromptPair) -> PromoResult<String> {
        let url = format!(
            "{}/chat/completions",
            self.config.api_base.trim_end_matches('/')
        );
        let body = ChatCompletionRequest {
            model: &self.config.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: &prompts.system,
                },
                ChatMessage {
                    role: "user",
                    content: &prompts.user,
                },
            ],
            response_format: ResponseFormat {
                format_type: "json_object",
            },
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
        };

        debug!(model = %self.config.model, "Sending completion request");

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| PromoError::Generation(format!("completion request failed: {}", e)))?
            .error_for_status()
            .map_err(|e| {
                PromoError::Generation(format!("completion service returned an error: {}", e))
            })?;

        let parsed: ChatCompletionResponse = response.json().await.map_err(|e| {
            PromoError::Generation(format!("malformed completion response: {}", e))
        })?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.is_empty())
            .ok_or_else(|| {
                PromoError::Generation("no response from generation service".to_string())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use promo_core::config::GenerationConfig;

    #[test]
    fn test_client_requires_credential() {
        let config = GenerationConfig::default();
        assert!(matches!(
            OpenAiClient::new(config),
            Err(PromoError::Config(_))
        ));
    }

    #[test]
    fn test_request_body_shape() {
        let body = ChatCompletionRequest {
            model: "gpt-4-turbo-preview",
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: "s",
                },
                ChatMessage {
                    role: "user",
                    content: "u",
                },
            ],
            response_format: ResponseFormat {
                format_type: "json_object",
            },
            max_tokens: 2000,
            temperature: 0.8,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["response_format"]["type"], "json_object");
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["role"], "user");
        assert_eq!(json["max_tokens"], 2000);
    }

    #[test]
    fn test_response_decode_tolerates_missing_content() {
        let parsed: ChatCompletionResponse =
            serde_json::from_str(r#"{"choices": [{"message": {}}]}"#).unwrap();
        assert!(parsed.choices[0].message.content.is_none());

        let empty: ChatCompletionResponse = serde_json::from_str(r#"{}"#).unwrap();
        assert!(empty.choices.is_empty());
    }
}
