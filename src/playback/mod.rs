//! Playback lifecycle
//!
//! This module owns the speaking side of the round trip:
//! - `UtteranceSession`: one unit of text with an explicit state machine
//!   (Idle → Speaking ⇄ Paused, Speaking|Paused → Stopped)
//! - `SpeechSynthesizer`: narrow trait over the synthesis engine
//! - `PlaybackController`: exclusive holder of the engine, serialized
//!   through the state machine

mod controller;
mod session;
mod synth;

pub use controller::{PlaybackController, PlaybackError};
pub use session::{UtteranceSession, UtteranceState};
pub use synth::SpeechSynthesizer;
