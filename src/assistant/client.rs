//! HTTP client for the assistant endpoint
//!
//! One non-streaming POST to `{base_url}/api/generate` per question, in the
//! Ollama generate-API shape. No retry, no backoff, and no client-side
//! timeout: the call waits for whatever the transport allows.

use crate::config::TuiConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Marker prefixed to failure text shown where a reply would appear. Callers
/// outside the UI boundary branch on [`AssistantError`], never on this
/// string.
pub const FAILURE_PREFIX: &str = "❌ Error contacting assistant";

/// Typed failure of an assistant call
#[derive(Debug, Error)]
pub enum AssistantError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("endpoint returned HTTP {0}")]
    Status(reqwest::StatusCode),
    #[error("malformed reply: {0}")]
    MalformedReply(String),
}

impl AssistantError {
    /// Presentation-boundary conversion: render the failure as the sentinel
    /// text that takes the place of a reply.
    pub fn to_reply_text(&self) -> String {
        format!("{FAILURE_PREFIX}: {self}")
    }
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<&'a str>,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    response: String,
}

/// Client for the assistant inference endpoint
#[derive(Debug, Clone)]
pub struct OllamaClient {
    http: reqwest::Client,
    base_url: String,
    model: String,
    system_prompt: Option<String>,
}

impl OllamaClient {
    pub fn new(config: &TuiConfig) -> Self {
        Self::with_endpoint(config.assistant_url(), config.model(), config.system_prompt.clone())
    }

    pub fn with_endpoint(base_url: String, model: String, system_prompt: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
            model,
            system_prompt,
        }
    }

    /// Send one prompt and wait for the complete reply. The reply text is
    /// trimmed; everything else is passed through untouched.
    pub async fn generate(&self, prompt: &str) -> Result<String, AssistantError> {
        let url = format!("{}/api/generate", self.base_url.trim_end_matches('/'));
        let body = GenerateRequest {
            model: &self.model,
            prompt,
            stream: false,
            system: self.system_prompt.as_deref(),
        };

        tracing::debug!(url = %url, model = %self.model, "sending assistant request");
        let response = self.http.post(&url).json(&body).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%status, "assistant endpoint returned failure status");
            return Err(AssistantError::Status(status));
        }

        let reply: GenerateResponse = response
            .json()
            .await
            .map_err(|e| AssistantError::MalformedReply(e.to_string()))?;
        Ok(reply.response.trim().to_string())
    }
}
