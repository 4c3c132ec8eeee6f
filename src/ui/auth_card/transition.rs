//! Fade transition timers
//!
//! Each phase of the mode-switch fade is a tokio task that sleeps and then
//! posts a [`FadePhase`] back to the owning card. The card applies phases on
//! the UI loop, so timers never touch state directly. All tasks share one
//! cancellation token which is cancelled when the timer is dropped.

use super::state::Mode;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Durations of the two fade phases.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FadeTimings {
    pub fade_out: Duration,
    pub fade_in: Duration,
}

impl FadeTimings {
    pub fn from_millis(fade_out_ms: u64, fade_in_ms: u64) -> Self {
        Self {
            fade_out: Duration::from_millis(fade_out_ms),
            fade_in: Duration::from_millis(fade_in_ms),
        }
    }
}

impl Default for FadeTimings {
    fn default() -> Self {
        use crate::consts::cli_consts::fade::{FADE_IN_MS, FADE_OUT_MS};
        Self::from_millis(FADE_OUT_MS, FADE_IN_MS)
    }
}

/// A fade phase that has run its course.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FadePhase {
    /// Content is hidden; the mode may now flip to the carried target.
    FadedOut(Mode),
    /// Content is visible again; the transition is over.
    FadedIn,
}

#[derive(Debug)]
pub struct FadeTimer {
    timings: FadeTimings,
    cancel: CancellationToken,
    sender: mpsc::UnboundedSender<FadePhase>,
    receiver: mpsc::UnboundedReceiver<FadePhase>,
}

impl FadeTimer {
    pub fn new(timings: FadeTimings) -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        Self {
            timings,
            cancel: CancellationToken::new(),
            sender,
            receiver,
        }
    }

    /// Starts the fade-out phase toward `target`.
    pub fn start_fade_out(&self, target: Mode) -> JoinHandle<()> {
        self.schedule(self.timings.fade_out, FadePhase::FadedOut(target))
    }

    /// Starts the fade-in phase. Called once the fade-out has been applied.
    pub fn start_fade_in(&self) -> JoinHandle<()> {
        self.schedule(self.timings.fade_in, FadePhase::FadedIn)
    }

    fn schedule(&self, delay: Duration, phase: FadePhase) -> JoinHandle<()> {
        let token = self.cancel.child_token();
        let sender = self.sender.clone();
        tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {}
                _ = tokio::time::sleep(delay) => {
                    // The receiver lives as long as the timer; a failed send
                    // means the owner is gone.
                    let _ = sender.send(phase);
                }
            }
        })
    }

    /// Returns a phase that has already elapsed, if any.
    pub fn try_next(&mut self) -> Option<FadePhase> {
        self.receiver.try_recv().ok()
    }

    /// Waits for the next phase to elapse.
    pub async fn next(&mut self) -> Option<FadePhase> {
        self.receiver.recv().await
    }

}

impl Drop for FadeTimer {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
