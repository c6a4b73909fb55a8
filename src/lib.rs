pub mod audio;
pub mod capture;
pub mod config;
pub mod http;
pub mod pipeline;
pub mod playback;
pub mod roundtrip;
pub mod storage;
pub mod transfer;

pub use audio::{AudioArtifact, AudioChunk, AudioInput};
pub use capture::{CaptureController, CaptureError, CaptureState, RecordingSession};
pub use config::Config;
pub use http::{create_router, AppState};
pub use pipeline::{
    HttpResponder, HttpTranscriber, PipelineError, PipelineRequest, PipelineService, Responder,
    Transcriber, TranscriptionOptions,
};
pub use playback::{
    PlaybackController, PlaybackError, SpeechSynthesizer, UtteranceSession, UtteranceState,
};
pub use roundtrip::{RoundTrip, RoundTripError};
pub use storage::ArtifactStore;
pub use transfer::{TransferClient, TransferError};
