use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::audio::AudioArtifact;

#[derive(Debug, Error)]
pub enum TransferError {
    /// Zero-byte artifact, rejected locally before any network call.
    #[error("refusing to upload an empty recording")]
    EmptyInput,

    /// Connectivity failure (or a response body the server contract does
    /// not allow).
    #[error("transport failure during upload")]
    Network(#[source] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("upload rejected upstream with status {0}")]
    Upstream(u16),
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    message: String,
}

/// Client for the pipeline upload endpoint.
///
/// One request per `send`, no retries. Callers must not issue a new `send`
/// for a capture session before the previous one resolves; that protocol is
/// a precondition, not enforced here.
pub struct TransferClient {
    http: reqwest::Client,
    base_url: String,
}

impl TransferClient {
    /// `base_url` is the API root supplied at build/run time,
    /// e.g. `http://localhost:3000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Upload one finalized artifact and return the generated reply text.
    pub async fn send(&self, artifact: &AudioArtifact) -> Result<String, TransferError> {
        if artifact.is_empty() {
            warn!("Rejecting empty artifact before upload");
            return Err(TransferError::EmptyInput);
        }

        let part = reqwest::multipart::Part::bytes(artifact.bytes().to_vec())
            .file_name("recording.webm")
            .mime_str(artifact.content_type())
            .map_err(TransferError::Network)?;
        let form = reqwest::multipart::Form::new().part("audio", part);

        debug!(
            "Uploading {} bytes to {}/api/upload",
            artifact.len(),
            self.base_url
        );

        let response = self
            .http
            .post(format!("{}/api/upload", self.base_url))
            .multipart(form)
            .send()
            .await
            .map_err(TransferError::Network)?;

        let status = response.status();
        if !status.is_success() {
            warn!("Upload rejected with status {status}");
            return Err(TransferError::Upstream(status.as_u16()));
        }

        let body: UploadResponse = response.json().await.map_err(TransferError::Network)?;
        debug!("Upload accepted: {} chars of generated text", body.message.len());
        Ok(body.message)
    }
}
