/// LLM Client — the single point of entry for calls to the local Ollama server.
///
/// No other module talks to the inference server directly; everything goes
/// through the `TextOracle` trait so callers can swap in stubs.
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("LLM returned empty content")]
    EmptyContent,
}

/// Opaque text-generation capability: prompt in, text out.
#[async_trait]
pub trait TextOracle: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError>;
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    response: Option<String>,
    eval_count: Option<u32>,
}

/// Client for Ollama's `/api/generate` endpoint.
/// Single attempt per call, no timeout.
#[derive(Clone)]
pub struct OllamaClient {
    client: Client,
    base_url: String,
    model: String,
}

impl OllamaClient {
    pub fn new(base_url: &str, model: &str) -> Result<Self, LlmError> {
        Ok(Self {
            client: Client::builder().build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Calls the model and classifies its output as JSON or raw text.
    pub async fn generate_output(&self, prompt: &str) -> Result<LlmOutput, LlmError> {
        let text = self.generate(prompt).await?;
        Ok(LlmOutput::from_text(&text))
    }
}

#[async_trait]
impl TextOracle for OllamaClient {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        let request_body = GenerateRequest {
            model: &self.model,
            prompt,
            stream: false,
        };

        let response = self
            .client
            .post(format!("{}/api/generate", self.base_url))
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(LlmError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        // Ollama may answer with a bare body instead of the usual envelope.
        let text = match serde_json::from_str::<GenerateResponse>(&body) {
            Ok(GenerateResponse {
                response: Some(text),
                eval_count,
            }) => {
                debug!(
                    "Ollama call succeeded: model={}, eval_count={:?}",
                    self.model, eval_count
                );
                text
            }
            _ => body,
        };

        if text.trim().is_empty() {
            return Err(LlmError::EmptyContent);
        }

        Ok(text)
    }
}

/// Model output after a best-effort JSON parse.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum LlmOutput {
    Parsed(Value),
    Unparsed(String),
}

impl LlmOutput {
    pub fn from_text(text: &str) -> Self {
        match serde_json::from_str::<Value>(strip_json_fences(text)) {
            Ok(value) => LlmOutput::Parsed(value),
            Err(_) => LlmOutput::Unparsed(text.to_string()),
        }
    }
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
fn strip_json_fences(text: &str) -> &str {
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
