/// LLM Client — the single point of entry for all completion-service calls.
///
/// ARCHITECTURAL RULE: No other module may call the completion API directly.
/// Callers depend on `CompletionService` so the HTTP backend can be swapped
/// for a stub in tests.
///
/// Models are fixed per use case (see `CompletionProfile`) to prevent drift.
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::config::Config;

pub mod prompts;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("LLM returned empty content")]
    EmptyContent,
}

/// Model, temperature and output cap for one kind of completion request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompletionProfile {
    pub model: &'static str,
    pub temperature: f32,
    pub max_tokens: Option<u32>,
}

impl CompletionProfile {
    /// Strict structured extraction of resume fields.
    pub const EXTRACTION: CompletionProfile = CompletionProfile {
        model: "gpt-4o-mini",
        temperature: 0.0,
        max_tokens: None,
    };

    /// Creative rewrite of free text (summary improvement).
    pub const REWRITE: CompletionProfile = CompletionProfile {
        model: "openai/gpt-4o",
        temperature: 0.2,
        max_tokens: Some(500),
    };
}

/// A text-completion capability: prompt in, raw model text out.
///
/// Carried in `AppState` as `Arc<dyn CompletionService>`.
#[async_trait]
pub trait CompletionService: Send + Sync {
    async fn complete(&self, prompt: &str, profile: &CompletionProfile)
        -> Result<String, LlmError>;
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
    pub usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
pub struct ChoiceMessage {
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
}

impl ChatResponse {
    /// Extracts the text of the first choice.
    pub fn text(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|c| c.message.content.as_deref())
    }
}

#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// HTTP completion client for an OpenAI-compatible chat-completions endpoint
/// (OpenRouter by default), authenticated with a bearer key.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_url: String,
    api_key: String,
}

impl LlmClient {
    pub fn new(api_url: String, api_key: String, timeout: Duration) -> Result<Self, LlmError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            api_url,
            api_key,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, LlmError> {
        Self::new(
            config.openrouter_api_url.clone(),
            config.openrouter_api_key.clone(),
            Duration::from_secs(config.llm_timeout_secs),
        )
    }

    /// Makes a raw call to the completion API, returning the full response object.
    /// Failures are returned to the caller as-is; there is no retry.
    pub async fn call(
        &self,
        prompt: &str,
        profile: &CompletionProfile,
    ) -> Result<ChatResponse, LlmError> {
        let request_body = ChatRequest {
            model: profile.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: profile.temperature,
            max_tokens: profile.max_tokens,
        };

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // Try to parse error message
            let message = serde_json::from_str::<ApiErrorEnvelope>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        let chat_response: ChatResponse = serde_json::from_str(&body)?;

        if let Some(usage) = &chat_response.usage {
            debug!(
                "LLM call succeeded: model={}, prompt_tokens={}, completion_tokens={}",
                profile.model, usage.prompt_tokens, usage.completion_tokens
            );
        }

        Ok(chat_response)
    }
}

#[async_trait]
impl CompletionService for LlmClient {
    async fn complete(
        &self,
        prompt: &str,
        profile: &CompletionProfile,
    ) -> Result<String, LlmError> {
        let response = self.call(prompt, profile).await?;
        let text = response.text().map(str::trim).unwrap_or_default();
        if text.is_empty() {
            return Err(LlmError::EmptyContent);
        }
        Ok(text.to_string())
    }
}
