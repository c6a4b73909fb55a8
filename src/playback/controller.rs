use thiserror::Error;
use tracing::{error, info};
use uuid::Uuid;

use super::session::{UtteranceSession, UtteranceState};
use super::synth::SpeechSynthesizer;

#[derive(Debug, Error)]
pub enum PlaybackError {
    /// The synthesis engine rejected a control call.
    #[error("speech synthesis failed: {0}")]
    Synthesis(String),
}

/// Owner of the speech-synthesis resource and the utterance state machine.
///
/// At most one utterance session is Speaking or Paused at any time; `load`
/// during active speech is the only implicit cancellation path.
///
/// Resume semantics: pause/resume continues from the pause point with the
/// same session identity. `stop` discards the remaining text entirely, so
/// speaking again requires a new `load`.
pub struct PlaybackController {
    synth: Box<dyn SpeechSynthesizer>,
    session: Option<UtteranceSession>,
}

impl PlaybackController {
    pub fn new(synth: Box<dyn SpeechSynthesizer>) -> Self {
        Self {
            synth,
            session: None,
        }
    }

    /// Current state: the active session's state, or Idle when none exists.
    pub fn state(&self) -> UtteranceState {
        self.session
            .as_ref()
            .map(UtteranceSession::state)
            .unwrap_or(UtteranceState::Idle)
    }

    pub fn session_id(&self) -> Option<Uuid> {
        self.session.as_ref().map(UtteranceSession::id)
    }

    /// Cancel any active utterance, then install a fresh Idle session
    /// holding `text`. The prior session moves to Stopped exactly once
    /// before the new session exists.
    pub async fn load(&mut self, text: impl Into<String>) {
        if let Some(session) = self.session.as_mut() {
            if matches!(
                session.state(),
                UtteranceState::Speaking | UtteranceState::Paused
            ) {
                if let Err(e) = self.synth.cancel().await {
                    error!("Failed to cancel active utterance: {e:#}");
                }
                session.mark_stopped();
                info!("Utterance {} cancelled by new text", session.id());
            }
        }
        self.session = Some(UtteranceSession::new(text));
    }

    /// From Idle: acquire the engine and begin speaking. From Paused:
    /// resume without re-acquiring. No-op in any other state.
    pub async fn play(&mut self) -> Result<(), PlaybackError> {
        let Some(session) = self.session.as_mut() else {
            return Ok(());
        };

        match session.state() {
            UtteranceState::Idle => match self.synth.speak(session.text()).await {
                Ok(()) => {
                    session.mark_speaking();
                    info!("Utterance {} speaking", session.id());
                    Ok(())
                }
                Err(e) => {
                    // The engine must not stay half-acquired.
                    if let Err(cancel_err) = self.synth.cancel().await {
                        error!("Failed to release engine after speak error: {cancel_err:#}");
                    }
                    Err(PlaybackError::Synthesis(e.to_string()))
                }
            },
            UtteranceState::Paused => {
                self.synth
                    .resume()
                    .await
                    .map_err(|e| PlaybackError::Synthesis(e.to_string()))?;
                session.mark_speaking();
                Ok(())
            }
            _ => Ok(()),
        }
    }

    /// Speaking → Paused. No-op otherwise.
    pub async fn pause(&mut self) -> Result<(), PlaybackError> {
        let Some(session) = self.session.as_mut() else {
            return Ok(());
        };
        if session.state() == UtteranceState::Speaking {
            self.synth
                .pause()
                .await
                .map_err(|e| PlaybackError::Synthesis(e.to_string()))?;
            session.mark_paused();
        }
        Ok(())
    }

    /// Release the engine and discard the remaining text. The session moves
    /// to Stopped and the controller returns to Idle. No-op unless Speaking
    /// or Paused.
    pub async fn stop(&mut self) -> Result<(), PlaybackError> {
        let Some(session) = self.session.as_mut() else {
            return Ok(());
        };
        if matches!(
            session.state(),
            UtteranceState::Speaking | UtteranceState::Paused
        ) {
            self.synth
                .cancel()
                .await
                .map_err(|e| PlaybackError::Synthesis(e.to_string()))?;
            session.mark_stopped();
            info!("Utterance {} stopped", session.id());
            self.session = None;
        }
        Ok(())
    }

    /// Notification that the engine finished the utterance naturally
    /// (end-of-speech event). Releases the session without an engine call.
    pub fn on_finished(&mut self) {
        if let Some(session) = self.session.as_mut() {
            if session.state() == UtteranceState::Speaking {
                session.mark_stopped();
                self.session = None;
            }
        }
    }
}
