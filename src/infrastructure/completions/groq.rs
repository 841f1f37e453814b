use crate::domain::ports::completion_port::{ChatMessage, CompletionEngine, SamplingConfig};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::warn;

const DEFAULT_BASE_URL: &str = "https://api.groq.com";

/// Groq chat-completions client (OpenAI-compatible API). Applies a request
/// timeout and retries transient failures (network errors, 429, 5xx) a
/// bounded number of times with linear backoff before giving up.
pub struct GroqCompletion {
    client: Client,
    api_key: String,
    base_url: String,
    max_attempts: u32,
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    messages: &'a [ChatMessage],
    model: &'a str,
    temperature: f32,
    max_tokens: u32,
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
    content: String,
}

impl GroqCompletion {
    pub fn new(
        api_key: String,
        base_url: Option<String>,
        timeout: Duration,
        max_attempts: u32,
    ) -> Result<Self, String> {
        // A default client has no timeout, so a builder failure must not
        // fall back to one.
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| format!("Failed to build HTTP client: {e}"))?;
        Ok(Self {
            client,
            api_key,
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            max_attempts: max_attempts.max(1),
        })
    }

    fn is_transient(status: StatusCode) -> bool {
        status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error()
    }

    async fn request_once(
        &self,
        messages: &[ChatMessage],
        sampling: &SamplingConfig,
    ) -> Result<String, (String, bool)> {
        let url = format!("{}/openai/v1/chat/completions", self.base_url);
        let resp = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&CompletionRequest {
                messages,
                model: &sampling.model,
                temperature: sampling.temperature,
                max_tokens: sampling.max_tokens,
            })
            .send()
            .await
            .map_err(|e| (format!("Groq API error: {e}"), true))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err((
                format!("Groq API {status}: {body}"),
                Self::is_transient(status),
            ));
        }

        let result: CompletionResponse = resp
            .json()
            .await
            .map_err(|e| (format!("Parse error: {e}"), false))?;
        result
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| ("Groq API returned no choices".to_string(), false))
    }
}

#[async_trait::async_trait]
impl CompletionEngine for GroqCompletion {
    async fn generate(
        &self,
        messages: &[ChatMessage],
        sampling: &SamplingConfig,
    ) -> Result<String, String> {
        let mut last_error = String::new();
        for attempt in 1..=self.max_attempts {
            match self.request_once(messages, sampling).await {
                Ok(text) => return Ok(text),
                Err((msg, transient)) => {
                    if !transient || attempt == self.max_attempts {
                        return Err(msg);
                    }
                    warn!(attempt, error = %msg, "transient completion failure, retrying");
                    last_error = msg;
                    tokio::time::sleep(Duration::from_millis(500 * attempt as u64)).await;
                }
            }
        }
        Err(last_error)
    }
}
