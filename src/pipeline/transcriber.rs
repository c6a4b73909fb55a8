use anyhow::{anyhow, Context, Result};
use tracing::debug;

use crate::audio::AudioArtifact;

/// Fixed decoding configuration passed with every transcription call.
#[derive(Debug, Clone)]
pub struct TranscriptionOptions {
    /// Language hint (ISO 639-1)
    pub language: String,
    /// Sampling temperature; 0.0 = deterministic decoding
    pub temperature: f32,
    /// Response format requested from the service
    pub response_format: String,
    /// Free-form transcription prompt (context/spelling hints)
    pub prompt: String,
}

impl Default for TranscriptionOptions {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            temperature: 0.0,
            response_format: "json".to_string(),
            prompt: "Specify context or spelling".to_string(),
        }
    }
}

/// External collaborator converting audio to text.
#[async_trait::async_trait]
pub trait Transcriber: Send + Sync {
    async fn transcribe(
        &self,
        audio: &AudioArtifact,
        options: &TranscriptionOptions,
    ) -> Result<String>;

    /// Collaborator name for logging
    fn name(&self) -> &str;
}

/// Transcribes audio via a whisper-compatible HTTP transcription endpoint
/// (multipart POST to `{base}/audio/transcriptions`, bearer auth).
pub struct HttpTranscriber {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl HttpTranscriber {
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
impl Transcriber for HttpTranscriber {
    async fn transcribe(
        &self,
        audio: &AudioArtifact,
        options: &TranscriptionOptions,
    ) -> Result<String> {
        let part = reqwest::multipart::Part::bytes(audio.bytes().to_vec())
            .file_name("audio.webm")
            .mime_str(audio.content_type())
            .context("Invalid artifact content type")?;

        let form = reqwest::multipart::Form::new()
            .part("file", part)
            .text("model", self.model.clone())
            .text("language", options.language.clone())
            .text("prompt", options.prompt.clone())
            .text("response_format", options.response_format.clone())
            .text("temperature", options.temperature.to_string());

        let response = self
            .http
            .post(format!("{}/audio/transcriptions", self.base_url))
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()
            .await
            .context("Transcription request failed")?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("Transcription endpoint returned {status}");
        }

        let body: serde_json::Value = response
            .json()
            .await
            .context("Transcription response was not valid JSON")?;
        let text = body["text"]
            .as_str()
            .ok_or_else(|| anyhow!("Transcription response missing `text` field"))?
            .trim()
            .to_string();

        debug!("Transcription: {text:?}");
        Ok(text)
    }

    fn name(&self) -> &str {
        "whisper-http"
    }
}
