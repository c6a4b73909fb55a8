use chrono::{DateTime, Utc};
use tracing::debug;
use uuid::Uuid;

use crate::audio::{AudioArtifact, AudioChunk};

/// Lifecycle state of a capture attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureState {
    Idle,
    Requesting,
    Recording,
    Finalizing,
    Error,
}

/// One capture attempt.
///
/// Chunks are append-only and accepted only while Recording. Finalization
/// consumes the session by value, so each session yields its artifact at
/// most once.
#[derive(Debug)]
pub struct RecordingSession {
    id: Uuid,
    state: CaptureState,
    chunks: Vec<AudioChunk>,
    started_at: DateTime<Utc>,
}

impl RecordingSession {
    /// Create a session in Requesting: sessions exist only once microphone
    /// acquisition is underway.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            state: CaptureState::Requesting,
            chunks: Vec::new(),
            started_at: Utc::now(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn state(&self) -> CaptureState {
        self.state
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Requesting → Recording, once the microphone is held.
    pub(crate) fn begin_recording(&mut self) {
        debug_assert_eq!(self.state, CaptureState::Requesting);
        self.state = CaptureState::Recording;
    }

    /// Mark the session failed (microphone denied or capture broke down).
    pub(crate) fn fail(&mut self) {
        self.state = CaptureState::Error;
    }

    /// Append a chunk. Returns false (and appends nothing) outside Recording.
    pub(crate) fn push_chunk(&mut self, chunk: AudioChunk) -> bool {
        if self.state != CaptureState::Recording {
            return false;
        }
        self.chunks.push(chunk);
        true
    }

    /// Recording → Finalizing: concatenate the buffered chunks into the
    /// session's one artifact. Consumes the session.
    pub(crate) fn finalize(mut self, content_type: &str) -> AudioArtifact {
        debug_assert_eq!(self.state, CaptureState::Recording);
        self.state = CaptureState::Finalizing;
        debug!(
            "Finalizing session {}: {} chunks buffered",
            self.id,
            self.chunks.len()
        );
        AudioArtifact::from_chunks(std::mem::take(&mut self.chunks), content_type)
    }
}

impl Default for RecordingSession {
    fn default() -> Self {
        Self::new()
    }
}
