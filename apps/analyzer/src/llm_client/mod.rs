/// LLM Client — the single point of entry for all chat-completion calls.
///
/// ARCHITECTURAL RULE: no other module talks to the model service directly.
/// Extraction and synthesis go through the `CompletionApi` trait so tests
/// (and alternative backends) can swap the transport without touching the
/// pipeline.
///
/// Model: gpt-4o (hardcoded — do not make configurable to prevent drift)
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::DEFAULT_BASE_URL;
use crate::errors::AnalysisError;

pub mod prompts;

/// The model used for all LLM calls.
pub const MODEL: &str = "gpt-4o";
const TEMPERATURE: f32 = 0.7;

/// Abstraction over the model service. `complete` performs exactly ONE
/// request attempt — retry belongs to `RetryPolicy`, never to the transport.
#[async_trait]
pub trait CompletionApi: Send + Sync {
    /// Sends one chat-completion request and returns the assistant text.
    async fn complete(
        &self,
        system: &str,
        user: &str,
        max_tokens: u32,
    ) -> Result<String, AnalysisError>;

    /// Whether credentials are present. Checked by the orchestrator before
    /// any network work; a cache hit never consults this.
    fn is_configured(&self) -> bool {
        true
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

/// HTTP implementation of `CompletionApi` against the chat-completion wire
/// contract: request `{model, messages, temperature, max_tokens}`, success
/// `{choices:[{message:{content}}]}`, failure `{error:{message}}`.
#[derive(Clone)]
pub struct ChatClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl ChatClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(120))
                .build()
                .expect("Failed to build HTTP client"),
            api_key: api_key.into(),
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl CompletionApi for ChatClient {
    async fn complete(
        &self,
        system: &str,
        user: &str,
        max_tokens: u32,
    ) -> Result<String, AnalysisError> {
        let request_body = ChatRequest {
            model: MODEL,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
            temperature: TEMPERATURE,
            max_tokens,
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse::<u64>().ok());

            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorBody>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);

            // Surface rate limiting as a typed variant — the one failure
            // class RetryPolicy is allowed to recover from. The substring
            // check covers relays that translate 429s into error bodies.
            if status.as_u16() == 429 || message.to_lowercase().contains("rate limit") {
                warn!("model service rate limited (retry_after={retry_after:?})");
                return Err(AnalysisError::RateLimited { retry_after });
            }

            return Err(AnalysisError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let chat_response: ChatResponse = response.json().await?;

        let content = chat_response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .filter(|c| !c.is_empty())
            .ok_or(AnalysisError::EmptyCompletion)?;

        debug!("completion call succeeded ({} chars)", content.len());

        Ok(content)
    }

    fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
pub fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}
