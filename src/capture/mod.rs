//! Capture lifecycle
//!
//! This module owns the recording side of the round trip:
//! - `RecordingSession`: one capture attempt with an explicit state machine
//!   (Idle → Requesting → Recording → Finalizing → Idle, Error on denial)
//! - `CaptureController`: exclusive owner of the microphone input, with
//!   guarded transitions and guaranteed release on every exit path

mod controller;
mod session;

pub use controller::{CaptureController, CaptureError};
pub use session::{CaptureState, RecordingSession};
