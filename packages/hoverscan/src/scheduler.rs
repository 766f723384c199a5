//! Trailing-edge throttle for recognition requests.
//!
//! The first pointer event after a quiet period opens a window. Events inside the
//! window only replace the pending position; when the window closes the latest
//! position is released. Superseded positions are dropped, never replayed.
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{sleep_until, Instant};

use crate::geometry::PointerPosition;

/// Handle for feeding pointer positions into the throttle task.
pub struct RecognitionScheduler {
    tx: mpsc::UnboundedSender<PointerPosition>,
}

impl RecognitionScheduler {
    /// Starts the throttle task. Released positions arrive on the returned receiver.
    pub fn spawn(
        interval: Duration,
    ) -> (Self, mpsc::UnboundedReceiver<PointerPosition>, JoinHandle<()>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let (fired_tx, fired_rx) = mpsc::unbounded_channel();
        let handle = tokio::spawn(throttle_loop(rx, interval, fired_tx));
        (Self { tx }, fired_rx, handle)
    }

    /// Called on every pointer move; never blocks.
    pub fn schedule(&self, pointer: PointerPosition) {
        if self.tx.send(pointer).is_err() {
            log::debug!("recognition scheduler stopped, dropping pointer event");
        }
    }
}

async fn throttle_loop(
    mut rx: mpsc::UnboundedReceiver<PointerPosition>,
    interval: Duration,
    fired: mpsc::UnboundedSender<PointerPosition>,
) {
    while let Some(first) = rx.recv().await {
        let deadline = Instant::now() + interval;
        let mut latest = first;
        let mut closed = false;

        loop {
            tokio::select! {
                _ = sleep_until(deadline) => break,
                next = rx.recv(), if !closed => match next {
                    Some(pointer) => latest = pointer,
                    None => closed = true,
                },
            }
        }

        if fired.send(latest).is_err() || closed {
            return;
        }
    }
}
