//! OpenAI chat-completion client.
//!
//! Thin adapter over the backend's HTTP API: structured-JSON chat calls plus
//! a lightweight credential check against the model list. Transient
//! transport failures (connect, timeout) are retried once; API errors and
//! malformed replies never are.

use label_common::openai::{ChatMessage, ChatRequest, ChatResponse, ModelList, ResponseFormat};
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("request to OpenAI failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("OpenAI returned error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("{0}")]
    Parse(#[from] serde_json::Error),

    #[error("AI response missing '{0}' field")]
    MissingField(&'static str),
}

impl BackendError {
    /// Parse failures get a parse-specific HTTP message; everything else is
    /// reported as a generic backend failure.
    pub fn is_parse(&self) -> bool {
        matches!(self, BackendError::Parse(_))
    }
}

pub struct OpenAiClient {
    http_client: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl OpenAiClient {
    pub fn new(api_key: &str, model: &str, base_url: &str, timeout: Duration) -> Self {
        Self {
            http_client: reqwest::Client::builder()
                .timeout(timeout)
                .build()
                .unwrap_or_default(),
            api_key: api_key.to_string(),
            model: model.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send a system+user prompt pair in JSON mode and parse the reply as a
    /// JSON value.
    pub async fn complete_structured(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<Value, BackendError> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: system_prompt.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: user_prompt.to_string(),
                },
            ],
            response_format: Some(ResponseFormat::json_object()),
        };

        info!(
            "[>]  LLM call [{}] system {} chars, user {} chars",
            self.model,
            system_prompt.len(),
            user_prompt.len()
        );

        let response = self.post_chat(&request).await?;
        let chat: ChatResponse = response.json().await?;

        let content = chat
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or(BackendError::MissingField("choices"))?;

        info!("[<]  LLM reply {} chars", content.len());

        let value: Value = serde_json::from_str(extract_json(&content))?;
        Ok(value)
    }

    /// Lightweight credential check: list models, return how many are
    /// visible to this key.
    pub async fn validate(&self) -> Result<usize, BackendError> {
        let url = format!("{}/models", self.base_url);

        let response = self
            .http_client
            .get(&url)
            .bearer_auth(&self.api_key)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(BackendError::Api {
                status,
                message: api_error_message(&body),
            });
        }

        let models: ModelList = response.json().await?;
        Ok(models.data.len())
    }

    /// POST the chat request, retrying once on transient transport failure.
    async fn post_chat(&self, request: &ChatRequest) -> Result<reqwest::Response, BackendError> {
        let url = format!("{}/chat/completions", self.base_url);
        let send = || {
            self.http_client
                .post(&url)
                .bearer_auth(&self.api_key)
                .json(request)
                .send()
        };

        let response = match send().await {
            Ok(response) => response,
            Err(e) if e.is_connect() || e.is_timeout() => {
                warn!("[~]  transient OpenAI failure, retrying once: {}", e);
                send().await?
            }
            Err(e) => return Err(e.into()),
        };

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(BackendError::Api {
                status,
                message: api_error_message(&body),
            });
        }

        Ok(response)
    }
}

/// Extract a JSON object from text that may have prose around it.
fn extract_json(text: &str) -> &str {
    if let (Some(start), Some(end)) = (text.find('{'), text.rfind('}')) {
        if start < end {
            return &text[start..=end];
        }
    }
    text
}

/// Pull the human-readable message out of an OpenAI error body, falling back
/// to the raw body.
fn api_error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| {
            v.get("error")
                .and_then(|e| e.get("message"))
                .and_then(|m| m.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| body.trim().to_string())
}
