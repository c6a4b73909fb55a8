use anyhow::Result;
use tokio::sync::mpsc;

use super::artifact::AudioChunk;

/// Microphone input abstraction
///
/// The microphone is a singular OS-level resource: at most one capture
/// session holds it, and whoever started it must stop it on every exit
/// path. Implementations:
/// - Browser/WebView bridge: MediaRecorder behind a channel
/// - Test double: scripted chunk sequence
#[async_trait::async_trait]
pub trait AudioInput: Send {
    /// Request access to the microphone and start capturing.
    ///
    /// This is the permission-request suspension point; an error here means
    /// access was denied or the device could not be opened. Returns a channel
    /// receiver that will receive encoded audio chunks until the input stops.
    async fn start(&mut self) -> Result<mpsc::Receiver<AudioChunk>>;

    /// Stop capturing and release the device.
    async fn stop(&mut self) -> Result<()>;

    /// Check if the input is currently capturing
    fn is_capturing(&self) -> bool;

    /// Input name for logging
    fn name(&self) -> &str;
}
