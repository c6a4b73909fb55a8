use uuid::Uuid;

/// Lifecycle state of an utterance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UtteranceState {
    Idle,
    Speaking,
    Paused,
    Stopped,
}

/// One unit of text submitted to the synthesis engine for playback.
///
/// Identity is stable across pause/resume; a stopped session is never
/// revived, a new `load` creates a fresh one.
#[derive(Debug)]
pub struct UtteranceSession {
    id: Uuid,
    text: String,
    state: UtteranceState,
}

impl UtteranceSession {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            state: UtteranceState::Idle,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn state(&self) -> UtteranceState {
        self.state
    }

    pub(crate) fn mark_speaking(&mut self) {
        debug_assert!(matches!(
            self.state,
            UtteranceState::Idle | UtteranceState::Paused
        ));
        self.state = UtteranceState::Speaking;
    }

    pub(crate) fn mark_paused(&mut self) {
        debug_assert_eq!(self.state, UtteranceState::Speaking);
        self.state = UtteranceState::Paused;
    }

    pub(crate) fn mark_stopped(&mut self) {
        self.state = UtteranceState::Stopped;
    }
}
