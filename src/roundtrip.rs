//! Client-side orchestrator
//!
//! Wires the round trip as one sequential task per exchange:
//! capture until signalled → upload → speak the generated reply.
//! Ordering and cancellation are explicit suspension points rather than
//! callback timing.

use thiserror::Error;
use tokio::sync::oneshot;
use tracing::info;

use crate::capture::{CaptureController, CaptureError};
use crate::playback::{PlaybackController, PlaybackError};
use crate::transfer::{TransferClient, TransferError};

#[derive(Debug, Error)]
pub enum RoundTripError {
    #[error(transparent)]
    Capture(#[from] CaptureError),

    #[error(transparent)]
    Transfer(#[from] TransferError),

    #[error(transparent)]
    Playback(#[from] PlaybackError),
}

/// One user-facing voice exchange: record, transfer, play back.
///
/// Every failure is scoped to the exchange; nothing here is fatal to the
/// process.
pub struct RoundTrip {
    pub capture: CaptureController,
    pub transfer: TransferClient,
    pub playback: PlaybackController,
}

impl RoundTrip {
    pub fn new(
        capture: CaptureController,
        transfer: TransferClient,
        playback: PlaybackController,
    ) -> Self {
        Self {
            capture,
            transfer,
            playback,
        }
    }

    /// Run a single exchange.
    ///
    /// Records until `stop` fires or the input stream ends, finalizes the
    /// artifact, uploads it, then loads and speaks the reply. Returns the
    /// reply text, or `None` when the capture produced nothing to send.
    pub async fn run_exchange(
        &mut self,
        mut stop: oneshot::Receiver<()>,
    ) -> Result<Option<String>, RoundTripError> {
        self.capture.start().await?;

        loop {
            tokio::select! {
                _ = &mut stop => break,
                more = self.capture.pump_one() => {
                    if !more {
                        break;
                    }
                }
            }
        }

        let Some(artifact) = self.capture.stop().await else {
            return Ok(None);
        };

        let reply = self.transfer.send(&artifact).await?;
        info!("Round trip received {} chars of generated text", reply.len());

        self.playback.load(reply.clone()).await;
        self.playback.play().await?;

        Ok(Some(reply))
    }
}
