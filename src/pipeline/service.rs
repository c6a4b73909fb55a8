use std::sync::Arc;

use thiserror::Error;
use tracing::{error, info};

use super::responder::Responder;
use super::transcriber::{Transcriber, TranscriptionOptions};
use crate::audio::AudioArtifact;

/// One transcribe-then-generate request. Carries no identity beyond its
/// lifetime; the service holds no cross-request state.
#[derive(Debug)]
pub struct PipelineRequest {
    pub audio: AudioArtifact,
}

/// Failure kinds crossing the service boundary.
///
/// Display strings are deliberately generic: upstream detail is logged
/// server-side and never leaks past the boundary.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PipelineError {
    #[error("no audio payload present")]
    BadRequest,

    #[error("transcription service failed")]
    Transcription,

    #[error("generation service failed")]
    Generation,
}

/// Sequences the two upstream calls for one request: transcribe, then
/// generate. Each step gates the next; no partial results are returned and
/// the transcript text never leaves this service.
pub struct PipelineService {
    transcriber: Arc<dyn Transcriber>,
    responder: Arc<dyn Responder>,
    options: TranscriptionOptions,
}

impl PipelineService {
    pub fn new(transcriber: Arc<dyn Transcriber>, responder: Arc<dyn Responder>) -> Self {
        Self {
            transcriber,
            responder,
            options: TranscriptionOptions::default(),
        }
    }

    pub fn with_options(mut self, options: TranscriptionOptions) -> Self {
        self.options = options;
        self
    }

    pub async fn handle(&self, request: PipelineRequest) -> Result<String, PipelineError> {
        if request.audio.is_empty() {
            return Err(PipelineError::BadRequest);
        }

        let transcript = self
            .transcriber
            .transcribe(&request.audio, &self.options)
            .await
            .map_err(|e| {
                error!("Transcriber `{}` failed: {e:#}", self.transcriber.name());
                PipelineError::Transcription
            })?;

        info!(
            "Transcribed {} bytes into {} chars",
            request.audio.len(),
            transcript.len()
        );

        let generated = self.responder.respond(&transcript).await.map_err(|e| {
            error!("Responder `{}` failed: {e:#}", self.responder.name());
            PipelineError::Generation
        })?;

        info!("Generated reply: {} chars", generated.len());
        Ok(generated)
    }
}
