use thiserror::Error;
use tokio::sync::mpsc;
use tracing::{error, info, warn};

use super::session::{CaptureState, RecordingSession};
use crate::audio::{AudioArtifact, AudioChunk, AudioInput};

/// Content type tag applied to finalized artifacts.
const ARTIFACT_CONTENT_TYPE: &str = "audio/webm";

#[derive(Debug, Error)]
pub enum CaptureError {
    /// Microphone access was denied or the device could not be opened.
    #[error("microphone access denied: {0}")]
    Permission(String),

    /// An operation arrived while the state machine could not accept it.
    #[error("{op} is not valid while {state:?}")]
    InvalidState {
        op: &'static str,
        state: CaptureState,
    },
}

/// Owner of the microphone resource and the recording state machine.
///
/// All operations are guarded by the session state, so overlapping
/// start/stop calls degrade to typed errors or no-ops instead of leaving
/// the device half-open.
pub struct CaptureController {
    input: Box<dyn AudioInput>,
    session: Option<RecordingSession>,
    chunk_rx: Option<mpsc::Receiver<AudioChunk>>,
    defect_chunks: usize,
}

impl CaptureController {
    pub fn new(input: Box<dyn AudioInput>) -> Self {
        Self {
            input,
            session: None,
            chunk_rx: None,
            defect_chunks: 0,
        }
    }

    /// Current state: the active session's state, or Idle when none exists.
    pub fn state(&self) -> CaptureState {
        self.session
            .as_ref()
            .map(RecordingSession::state)
            .unwrap_or(CaptureState::Idle)
    }

    pub fn session_id(&self) -> Option<uuid::Uuid> {
        self.session.as_ref().map(RecordingSession::id)
    }

    /// Chunks that arrived outside Recording. Nonzero means a caller is
    /// feeding the controller out of protocol.
    pub fn defect_chunks(&self) -> usize {
        self.defect_chunks
    }

    /// Begin a new capture attempt. Valid only from Idle.
    ///
    /// Suspends on the microphone permission request; a denial leaves the
    /// session in Error (recover with [`reset`](Self::reset)) and releases
    /// anything half-acquired.
    pub async fn start(&mut self) -> Result<(), CaptureError> {
        let state = self.state();
        if state != CaptureState::Idle {
            return Err(CaptureError::InvalidState { op: "start", state });
        }

        let mut session = RecordingSession::new();
        info!(
            "Requesting {} for capture session {}",
            self.input.name(),
            session.id()
        );

        match self.input.start().await {
            Ok(rx) => {
                session.begin_recording();
                info!("Recording started: session {}", session.id());
                self.chunk_rx = Some(rx);
                self.session = Some(session);
                Ok(())
            }
            Err(e) => {
                // Nothing may stay held on the failure path.
                if self.input.is_capturing() {
                    if let Err(stop_err) = self.input.stop().await {
                        error!("Failed to release microphone after denial: {stop_err:#}");
                    }
                }
                session.fail();
                warn!("Microphone acquisition failed: {e:#}");
                let detail = e.to_string();
                self.session = Some(session);
                Err(CaptureError::Permission(detail))
            }
        }
    }

    /// Append a chunk to the active session.
    ///
    /// Outside Recording this is a no-op, logged and counted as a defect
    /// signal: it means the caller kept feeding audio past the lifecycle.
    pub fn on_chunk(&mut self, chunk: AudioChunk) {
        let appended = self
            .session
            .as_mut()
            .map(|s| s.push_chunk(chunk))
            .unwrap_or(false);

        if !appended {
            self.defect_chunks += 1;
            warn!(
                "Dropped audio chunk received while {:?} (defect signal #{})",
                self.state(),
                self.defect_chunks
            );
        }
    }

    /// Await the next chunk from the input stream and route it through
    /// [`on_chunk`](Self::on_chunk). Returns false once the stream ends or
    /// no capture is active.
    pub async fn pump_one(&mut self) -> bool {
        let Some(rx) = self.chunk_rx.as_mut() else {
            return false;
        };
        match rx.recv().await {
            Some(chunk) => {
                self.on_chunk(chunk);
                true
            }
            None => false,
        }
    }

    /// Stop recording: release the microphone unconditionally, finalize the
    /// buffered chunks into one artifact, and return to Idle.
    ///
    /// A no-op returning `None` unless currently Recording. Release failures
    /// are logged; they never mask the artifact.
    pub async fn stop(&mut self) -> Option<AudioArtifact> {
        if self.state() != CaptureState::Recording {
            return None;
        }

        if let Err(e) = self.input.stop().await {
            error!("Failed to release microphone: {e:#}");
        }
        self.chunk_rx = None;

        let session = self.session.take()?;
        let id = session.id();
        let artifact = session.finalize(ARTIFACT_CONTENT_TYPE);
        info!(
            "Capture session {} finalized: {} bytes ({})",
            id,
            artifact.len(),
            artifact.content_type()
        );
        Some(artifact)
    }

    /// Drop any session (including one stuck in Error) and return to Idle,
    /// releasing the microphone if it is still held.
    pub async fn reset(&mut self) {
        if self.input.is_capturing() {
            if let Err(e) = self.input.stop().await {
                error!("Failed to release microphone during reset: {e:#}");
            }
        }
        self.chunk_rx = None;
        self.session = None;
    }
}
