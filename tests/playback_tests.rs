// Integration tests for the playback lifecycle.
//
// These tests verify the utterance state machine: single holder of the
// synthesis engine, load-cancels-active, stable identity across
// pause/resume, and stop discarding the remaining text.

mod common;

use std::sync::atomic::Ordering;

use common::RecordingSynth;
use voiceloop::{PlaybackController, UtteranceState};

#[tokio::test]
async fn test_load_while_speaking_stops_prior_session_exactly_once() {
    let (synth, calls) = RecordingSynth::new();
    let mut controller = PlaybackController::new(Box::new(synth));

    controller.load("first reply").await;
    controller.play().await.unwrap();
    assert_eq!(controller.state(), UtteranceState::Speaking);
    let first_id = controller.session_id().unwrap();

    controller.load("second reply").await;
    assert_eq!(calls.cancel.load(Ordering::SeqCst), 1);
    assert_eq!(controller.state(), UtteranceState::Idle);
    assert_ne!(controller.session_id().unwrap(), first_id);

    // Loading again from Idle cancels nothing further.
    controller.load("third reply").await;
    assert_eq!(calls.cancel.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_pause_resume_keeps_session_identity() {
    let (synth, calls) = RecordingSynth::new();
    let mut controller = PlaybackController::new(Box::new(synth));

    controller.load("a long reply").await;
    controller.play().await.unwrap();
    let id = controller.session_id().unwrap();

    controller.pause().await.unwrap();
    assert_eq!(controller.state(), UtteranceState::Paused);

    controller.play().await.unwrap();
    assert_eq!(controller.state(), UtteranceState::Speaking);
    assert_eq!(controller.session_id().unwrap(), id);

    // Resume does not re-acquire: one speak, one resume.
    assert_eq!(calls.speak.load(Ordering::SeqCst), 1);
    assert_eq!(calls.resume.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_stop_discards_text_and_returns_to_idle() {
    let (synth, calls) = RecordingSynth::new();
    let mut controller = PlaybackController::new(Box::new(synth));

    controller.load("discard me").await;
    controller.play().await.unwrap();
    controller.stop().await.unwrap();

    assert_eq!(calls.cancel.load(Ordering::SeqCst), 1);
    assert_eq!(controller.state(), UtteranceState::Idle);
    assert!(controller.session_id().is_none());

    // No text remains, so play is a no-op until the next load.
    controller.play().await.unwrap();
    assert_eq!(calls.speak.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_pause_and_stop_are_noops_when_idle() {
    let (synth, calls) = RecordingSynth::new();
    let mut controller = PlaybackController::new(Box::new(synth));

    controller.pause().await.unwrap();
    controller.stop().await.unwrap();
    controller.play().await.unwrap();

    assert_eq!(calls.speak.load(Ordering::SeqCst), 0);
    assert_eq!(calls.pause.load(Ordering::SeqCst), 0);
    assert_eq!(calls.cancel.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_speak_failure_releases_engine_and_stays_idle() {
    let (synth, calls) = RecordingSynth::failing();
    let mut controller = PlaybackController::new(Box::new(synth));

    controller.load("never spoken").await;
    assert!(controller.play().await.is_err());

    assert_eq!(controller.state(), UtteranceState::Idle);
    assert_eq!(calls.cancel.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_engine_finish_event_releases_session() {
    let (synth, _) = RecordingSynth::new();
    let mut controller = PlaybackController::new(Box::new(synth));

    controller.load("short").await;
    controller.play().await.unwrap();
    controller.on_finished();

    assert_eq!(controller.state(), UtteranceState::Idle);
    assert!(controller.session_id().is_none());
}
