//! LLM Client — the single point of entry for all model API calls in TalentScout.
//!
//! ARCHITECTURAL RULE: No other module may call the chat-completions API directly.
//! Everything else depends on the `ChatModel` trait so tests can swap in a scripted model.
//!
//! One attempt per call, no retry or backoff.

use async_trait::async_trait;
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::config::Config;
use crate::models::conversation::Message;

pub mod prompts;
#[cfg(test)]
pub mod testing;

/// Upper bound on generated tokens for every call.
pub const MAX_TOKENS: u32 = 800;
const REQUEST_TIMEOUT_SECS: u64 = 120;

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

    #[error("No API key configured")]
    MissingCredential,
}

/// Request/response contract for a chat-completion capability.
#[async_trait]
pub trait ChatModel: Send + Sync {
    async fn complete(&self, messages: &[Message], temperature: f32) -> Result<String, LlmError>;
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatCompletionMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatCompletionMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct LlmResponse {
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

impl LlmResponse {
    /// Extracts the trimmed text of the first choice.
    pub fn text(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|c| c.message.content.as_deref())
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }
}

#[derive(Debug, Deserialize)]
struct ApiError {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Chat-completions client. Model id, endpoint and credential come from `Config`
/// at construction time and are never re-read from the environment.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
    model: String,
    endpoint: String,
}

impl LlmClient {
    pub fn new(config: &Config) -> Result<Self, LlmError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self {
            client,
            api_key: config.openai_api_key.clone(),
            model: config.llm_model.clone(),
            endpoint: completions_endpoint(&config.llm_base_url),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Makes a single call to the chat-completions API, returning the full response object.
    pub async fn call(
        &self,
        messages: &[Message],
        temperature: f32,
    ) -> Result<LlmResponse, LlmError> {
        if self.api_key.trim().is_empty() {
            return Err(LlmError::MissingCredential);
        }

        let request_body = ChatCompletionRequest {
            model: &self.model,
            messages: messages
                .iter()
                .map(|m| ChatCompletionMessage {
                    role: m.role.as_str(),
                    content: &m.content,
                })
                .collect(),
            temperature,
            max_tokens: MAX_TOKENS,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let llm_response: LlmResponse = response.json().await?;

        if let Some(usage) = &llm_response.usage {
            debug!(
                "LLM call succeeded: prompt_tokens={}, completion_tokens={}",
                usage.prompt_tokens, usage.completion_tokens
            );
        }

        Ok(llm_response)
    }
}

#[async_trait]
impl ChatModel for LlmClient {
    async fn complete(&self, messages: &[Message], temperature: f32) -> Result<String, LlmError> {
        let response = self.call(messages, temperature).await?;
        response
            .text()
            .map(str::to_string)
            .ok_or(LlmError::EmptyContent)
    }
}

/// Parses a model reply as JSON, tolerating markdown code fences.
/// The prompt must instruct the model to return valid JSON.
pub fn parse_json_reply<T: DeserializeOwned>(text: &str) -> Result<T, LlmError> {
    serde_json::from_str(strip_json_fences(text)).map_err(LlmError::Parse)
}

fn completions_endpoint(base_url: &str) -> String {
    format!("{}/chat/completions", base_url.trim_end_matches('/'))
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    let inner = text
        .strip_prefix("```json")
        .or_else(|| text.strip_prefix("```"));
    match inner {
        Some(stripped) => stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start()),
        None => text,
    }
}
