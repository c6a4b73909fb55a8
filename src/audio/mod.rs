//! Audio payload types and the microphone input abstraction

pub mod artifact;
pub mod input;

pub use artifact::{AudioArtifact, AudioChunk};
pub use input::AudioInput;
