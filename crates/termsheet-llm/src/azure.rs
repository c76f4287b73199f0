//! Azure OpenAI Provider Implementation
//!
//! Chat-completions client for an Azure OpenAI deployment. One request per
//! chunk; the pipeline owns retries and timeouts, so this client makes a
//! single attempt and classifies failures for the caller.

use crate::config::ServiceConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use termsheet_domain::{CompletionError, CompletionProvider};
use tracing::debug;

/// Default HTTP client timeout (seconds). The pipeline enforces its own
/// per-call deadline on top of this.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Default completion token budget per request.
pub const DEFAULT_MAX_TOKENS: u32 = 1200;

/// Sampling temperature used for extraction requests.
const TEMPERATURE: f32 = 0.5;

/// Azure OpenAI chat-completions provider.
pub struct AzureOpenAiProvider {
    config: ServiceConfig,
    client: reqwest::Client,
    max_tokens: u32,
}

/// Request body for the chat-completions API
#[derive(Serialize)]
struct ChatRequest<'a> {
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// Response from the chat-completions API. Errors can arrive in-body with a
/// 200 status, so both halves are optional.
#[derive(Deserialize)]
struct ChatResponse {
    choices: Option<Vec<ChatChoice>>,
    error: Option<ApiError>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: String,
}

#[derive(Deserialize)]
struct ApiError {
    message: String,
}

impl AzureOpenAiProvider {
    /// Create a new provider for the given service configuration.
    pub fn new(config: ServiceConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .unwrap();

        Self {
            config,
            client,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }

    /// Set the completion token budget per request.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    fn url(&self) -> String {
        format!(
            "{}/openai/deployments/{}/chat/completions",
            self.config.endpoint.trim_end_matches('/'),
            self.config.deployment
        )
    }

    /// Classify an in-body service error. Token/length-style rejections get
    /// their own variant so the caller can retry at half the input size.
    fn classify_api_error(message: String) -> CompletionError {
        let lowered = message.to_lowercase();
        if lowered.contains("token") || lowered.contains("length") {
            CompletionError::TokenLimit(message)
        } else {
            CompletionError::Service(message)
        }
    }
}

impl CompletionProvider for AzureOpenAiProvider {
    async fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String, CompletionError> {
        let body = ChatRequest {
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: user_prompt,
                },
            ],
            temperature: TEMPERATURE,
            max_tokens: self.max_tokens,
        };

        let response = self
            .client
            .post(self.url())
            .query(&[("api-version", self.config.api_version.as_str())])
            .header("api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| CompletionError::Transport(format!("request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            // Oversize requests are commonly rejected at the HTTP layer too.
            return Err(if error_text.to_lowercase().contains("token") {
                CompletionError::TokenLimit(error_text)
            } else {
                CompletionError::Transport(format!("HTTP {}: {}", status, error_text))
            });
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| CompletionError::InvalidResponse(format!("bad envelope: {}", e)))?;

        if let Some(error) = parsed.error {
            return Err(Self::classify_api_error(error.message));
        }

        let content = parsed
            .choices
            .and_then(|mut choices| {
                if choices.is_empty() {
                    None
                } else {
                    Some(choices.remove(0).message.content)
                }
            })
            .ok_or_else(|| {
                CompletionError::InvalidResponse("response carried no choices".to_string())
            })?;

        debug!("completion reply: {} chars", content.len());
        Ok(content)
    }
}
