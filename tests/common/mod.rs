// Shared test doubles for the integration tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::mpsc;
use voiceloop::audio::{AudioArtifact, AudioChunk};
use voiceloop::{AudioInput, Responder, SpeechSynthesizer, Transcriber, TranscriptionOptions};

// ============================================================================
// Microphone double
// ============================================================================

/// Microphone double that yields a fixed script of chunks, then closes the
/// stream.
pub struct ScriptedInput {
    chunks: Vec<Vec<u8>>,
    deny: bool,
    hold_open: bool,
    capturing: bool,
    held_tx: Option<mpsc::Sender<AudioChunk>>,
}

impl ScriptedInput {
    pub fn new(chunks: Vec<Vec<u8>>) -> Self {
        Self {
            chunks,
            deny: false,
            hold_open: false,
            capturing: false,
            held_tx: None,
        }
    }

    /// An input whose chunk stream stays open after the script, like a live
    /// microphone; only `stop` ends it.
    pub fn held(chunks: Vec<Vec<u8>>) -> Self {
        Self {
            hold_open: true,
            ..Self::new(chunks)
        }
    }

    /// An input whose permission request always fails.
    pub fn denied() -> Self {
        Self {
            deny: true,
            ..Self::new(Vec::new())
        }
    }
}

#[async_trait]
impl AudioInput for ScriptedInput {
    async fn start(&mut self) -> anyhow::Result<mpsc::Receiver<AudioChunk>> {
        if self.deny {
            anyhow::bail!("permission denied by user");
        }
        let (tx, rx) = mpsc::channel(self.chunks.len().max(1));
        for bytes in self.chunks.drain(..) {
            tx.send(AudioChunk::new(bytes)).await?;
        }
        if self.hold_open {
            self.held_tx = Some(tx);
        }
        // Otherwise tx drops here and the receiver sees end-of-stream after
        // the script.
        self.capturing = true;
        Ok(rx)
    }

    async fn stop(&mut self) -> anyhow::Result<()> {
        self.held_tx = None;
        self.capturing = false;
        Ok(())
    }

    fn is_capturing(&self) -> bool {
        self.capturing
    }

    fn name(&self) -> &str {
        "scripted"
    }
}

// ============================================================================
// Pipeline collaborator doubles
// ============================================================================

/// Transcriber double: counts calls, returns a canned transcript or fails.
pub struct StubTranscriber {
    pub reply: Option<String>,
    pub calls: Arc<AtomicUsize>,
}

impl StubTranscriber {
    pub fn ok(reply: &str) -> (Self, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        (
            Self {
                reply: Some(reply.to_string()),
                calls: Arc::clone(&calls),
            },
            calls,
        )
    }

    pub fn failing() -> (Self, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        (
            Self {
                reply: None,
                calls: Arc::clone(&calls),
            },
            calls,
        )
    }
}

#[async_trait]
impl Transcriber for StubTranscriber {
    async fn transcribe(
        &self,
        _audio: &AudioArtifact,
        _options: &TranscriptionOptions,
    ) -> anyhow::Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.reply
            .clone()
            .ok_or_else(|| anyhow::anyhow!("stub transcriber exploded: secret-upstream-detail"))
    }

    fn name(&self) -> &str {
        "stub-transcriber"
    }
}

/// Responder double: counts calls, returns a canned reply or fails.
pub struct StubResponder {
    pub reply: Option<String>,
    pub calls: Arc<AtomicUsize>,
}

impl StubResponder {
    pub fn ok(reply: &str) -> (Self, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        (
            Self {
                reply: Some(reply.to_string()),
                calls: Arc::clone(&calls),
            },
            calls,
        )
    }

    pub fn failing() -> (Self, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        (
            Self {
                reply: None,
                calls: Arc::clone(&calls),
            },
            calls,
        )
    }
}

#[async_trait]
impl Responder for StubResponder {
    async fn respond(&self, _prompt: &str) -> anyhow::Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.reply
            .clone()
            .ok_or_else(|| anyhow::anyhow!("stub responder exploded: secret-upstream-detail"))
    }

    fn name(&self) -> &str {
        "stub-responder"
    }
}

// ============================================================================
// Synthesizer double
// ============================================================================

#[derive(Default)]
pub struct SynthCalls {
    pub speak: AtomicUsize,
    pub pause: AtomicUsize,
    pub resume: AtomicUsize,
    pub cancel: AtomicUsize,
}

/// Synthesizer double that records control calls.
pub struct RecordingSynth {
    pub calls: Arc<SynthCalls>,
    pub fail_speak: bool,
}

impl RecordingSynth {
    pub fn new() -> (Self, Arc<SynthCalls>) {
        let calls = Arc::new(SynthCalls::default());
        (
            Self {
                calls: Arc::clone(&calls),
                fail_speak: false,
            },
            calls,
        )
    }

    pub fn failing() -> (Self, Arc<SynthCalls>) {
        let calls = Arc::new(SynthCalls::default());
        (
            Self {
                calls: Arc::clone(&calls),
                fail_speak: true,
            },
            calls,
        )
    }
}

#[async_trait]
impl SpeechSynthesizer for RecordingSynth {
    async fn speak(&mut self, _text: &str) -> anyhow::Result<()> {
        self.calls.speak.fetch_add(1, Ordering::SeqCst);
        if self.fail_speak {
            anyhow::bail!("engine unavailable");
        }
        Ok(())
    }

    async fn pause(&mut self) -> anyhow::Result<()> {
        self.calls.pause.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn resume(&mut self) -> anyhow::Result<()> {
        self.calls.resume.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn cancel(&mut self) -> anyhow::Result<()> {
        self.calls.cancel.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
