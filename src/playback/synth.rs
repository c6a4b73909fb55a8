use anyhow::Result;

/// Speech synthesis engine abstraction
///
/// The engine is a singular OS-level resource; at most one utterance holds
/// it at a time. The controller is responsible for releasing it (via
/// `cancel`) on every exit path.
#[async_trait::async_trait]
pub trait SpeechSynthesizer: Send {
    /// Acquire the engine and begin speaking `text` from the start.
    async fn speak(&mut self, text: &str) -> Result<()>;

    /// Pause mid-utterance; the playback position is retained.
    async fn pause(&mut self) -> Result<()>;

    /// Resume from the pause point without re-acquiring the engine.
    async fn resume(&mut self) -> Result<()>;

    /// Cancel and release the engine, discarding any unspoken text.
    async fn cancel(&mut self) -> Result<()>;
}
