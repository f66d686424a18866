//! Timing of a spin: shuffle frames followed by the reveal.
//!
//! Frame `i` fires at `i × FRAME_INTERVAL`, the settle event at
//! `FRAME_COUNT × FRAME_INTERVAL`. One task sends them all, so they arrive
//! strictly in that order.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::Instant;

/// Number of shuffle frames before the reveal
pub const FRAME_COUNT: usize = 20;

/// Gap between shuffle frames
pub const FRAME_INTERVAL: Duration = Duration::from_millis(50);

/// Events emitted by a running spin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinEvent {
    /// Show shuffle frame `n`
    Frame(usize),
    /// Draw the final result
    Settle,
}

/// The full spin schedule as offsets from the start of the spin.
pub fn schedule() -> Vec<(Duration, SpinEvent)> {
    let frames = (0..FRAME_COUNT).map(|i| (FRAME_INTERVAL * i as u32, SpinEvent::Frame(i)));
    let settle = std::iter::once((spin_duration(), SpinEvent::Settle));
    frames.chain(settle).collect()
}

/// Total time from pick to reveal
pub fn spin_duration() -> Duration {
    FRAME_INTERVAL * FRAME_COUNT as u32
}

/// Spawn the task that delivers the spin events to the event loop.
///
/// Deadlines are absolute from the spawn instant so a slow receiver does not
/// stretch the spin. The task stops early if the receiver is gone.
pub fn spawn(tx: mpsc::Sender<SpinEvent>) -> JoinHandle<()> {
    tokio::spawn(async move {
        let start = Instant::now();
        for (offset, event) in schedule() {
            tokio::time::sleep_until(start + offset).await;
            if tx.send(event).await.is_err() {
                return;
            }
        }
    })
}
