//! Generation Client
//!
//! Default `GenerationClient` backed by an OpenAI-compatible chat
//! completions endpoint, so the binary has a working collaborator. The
//! pipeline itself only ever sees the trait.

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde_json::Value;

use crate::types::GenerationClient;

/// Environment variable holding the inference base URL.
pub const INFERENCE_URL_ENV: &str = "LUCY_INFERENCE_URL";

/// Environment variable holding the inference API key.
pub const INFERENCE_KEY_ENV: &str = "LUCY_INFERENCE_KEY";

/// Environment variable overriding the model identifier.
pub const INFERENCE_MODEL_ENV: &str = "LUCY_INFERENCE_MODEL";

const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// OpenAI-compatible chat completions client.
pub struct GenerationClientImpl {
    api_url: String,
    api_key: String,
    model: String,
    http: reqwest::Client,
}

impl GenerationClientImpl {
    pub fn new(api_url: String, api_key: String, model: String) -> Self {
        Self {
            api_url,
            api_key,
            model,
            http: reqwest::Client::new(),
        }
    }

    /// Build a client from the environment. Returns `None` when no
    /// inference URL is set; the key may legitimately be empty for local
    /// endpoints.
    pub fn from_env() -> Option<Self> {
        let api_url = std::env::var(INFERENCE_URL_ENV)
            .ok()
            .filter(|v| !v.is_empty())?;
        let api_key = std::env::var(INFERENCE_KEY_ENV).unwrap_or_default();
        let model = std::env::var(INFERENCE_MODEL_ENV)
            .ok()
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());
        Some(Self::new(api_url, api_key, model))
    }
}

#[async_trait]
impl GenerationClient for GenerationClientImpl {
    async fn generate(&self, context: &str) -> Result<String> {
        let body = serde_json::json!({
            "model": self.model,
            "messages": [{ "role": "user", "content": context }],
            "stream": false,
        });

        let url = format!("{}/v1/chat/completions", self.api_url.trim_end_matches('/'));
        let response = self
            .http
            .post(&url)
            .header("Content-Type", "application/json")
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&body)
            .send()
            .await
            .context("generation request failed")?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            anyhow::bail!("generation error: {}: {}", status.as_u16(), text);
        }

        let data: Value = response
            .json()
            .await
            .context("failed to parse generation response")?;

        let content = data["choices"]
            .get(0)
            .and_then(|choice| choice["message"]["content"].as_str())
            .ok_or_else(|| anyhow::anyhow!("no completion choice returned"))?;

        Ok(content.to_string())
    }
}
