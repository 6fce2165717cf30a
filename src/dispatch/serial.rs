//! Serial dispatcher backed by a single drain task.

use super::{Dispatch, Job};
use tokio::sync::mpsc;

/// Production dispatcher that serializes jobs on one task.
///
/// Jobs are queued on an unbounded channel and drained by a single spawned
/// task, so they run one at a time in FIFO submission order. Completion
/// callbacks submitted from concurrent fetches therefore never run
/// concurrently with each other, which lets callers mutate shared state
/// from within a callback without additional synchronization.
///
/// Cloning yields another handle to the same context; all clones feed the
/// same drain task.
///
/// # Example
///
/// ```
/// use json_fetch::dispatch::{Dispatch, SerialDispatcher};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let dispatcher = SerialDispatcher::spawn();
/// dispatcher.dispatch(Box::new(|| println!("ran on the serial context")));
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct SerialDispatcher {
    sender: mpsc::UnboundedSender<Job>,
}

impl SerialDispatcher {
    /// Creates a dispatcher and spawns its drain task on the current runtime.
    ///
    /// The drain task runs until every handle to the dispatcher has been
    /// dropped, then exits.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime context, as task spawning
    /// requires a running runtime.
    #[must_use]
    pub fn spawn() -> Self {
        let (sender, mut receiver) = mpsc::unbounded_channel::<Job>();

        tokio::spawn(async move {
            while let Some(job) = receiver.recv().await {
                job();
            }
        });

        Self { sender }
    }
}

impl Dispatch for SerialDispatcher {
    fn dispatch(&self, job: Job) {
        // Send fails only after the drain task is gone (runtime shutdown);
        // the job is dropped rather than run on the wrong context.
        if self.sender.send(job).is_err() {
            tracing::warn!("serial dispatcher context is gone; dropping job");
        }
    }
}
