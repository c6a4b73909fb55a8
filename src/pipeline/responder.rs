use anyhow::{anyhow, Context, Result};
use serde_json::json;
use tracing::debug;

/// External collaborator converting a single text prompt to generated text.
#[async_trait::async_trait]
pub trait Responder: Send + Sync {
    async fn respond(&self, prompt: &str) -> Result<String>;

    /// Collaborator name for logging
    fn name(&self) -> &str;
}

/// Generates replies via a generateContent-style HTTP endpoint
/// (`{base}/models/{model}:generateContent`, key passed as a query param).
pub struct HttpResponder {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl HttpResponder {
    pub fn new(base_url: &str, api_key: &str, model: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            model: model.to_string(),
        }
    }
}

#[async_trait::async_trait]
impl Responder for HttpResponder {
    async fn respond(&self, prompt: &str) -> Result<String> {
        let url = format!(
            "{}/models/{}:generateContent",
            self.base_url, self.model
        );

        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }]
        });

        let response = self
            .http
            .post(url)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await
            .context("Generation request failed")?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("Generation endpoint returned {status}");
        }

        let body: serde_json::Value = response
            .json()
            .await
            .context("Generation response was not valid JSON")?;
        let text = body["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .ok_or_else(|| anyhow!("Generation response missing candidate text"))?
            .trim()
            .to_string();

        debug!("Generated reply: {} chars", text.len());
        Ok(text)
    }

    fn name(&self) -> &str {
        "generate-content-http"
    }
}
