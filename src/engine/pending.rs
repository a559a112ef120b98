//! Cancellable handles for in-flight search requests.

use futures::FutureExt;
use tokio::task::{JoinError, JoinHandle};

/// Outcome of a best-effort cancellation.
#[derive(Debug)]
pub enum CancelOutcome {
    /// Still in flight; the task has been aborted.
    Cancelled,
    /// Settled before cancellation reached it.
    AlreadyComplete,
    /// The task died on its own (e.g. panicked) before cancellation.
    Failed(JoinError),
}

/// An outstanding search request: the query that created it, the
/// dispatch generation it belongs to, and the task driving it.
pub struct PendingSearch {
    query: String,
    generation: u64,
    handle: JoinHandle<()>,
}

impl PendingSearch {
    pub fn new(query: String, generation: u64, handle: JoinHandle<()>) -> Self {
        Self {
            query,
            generation,
            handle,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Cancel the request. Settled tasks are left alone; a task that
    /// already failed is reported rather than silently swallowed.
    pub fn cancel(mut self) -> CancelOutcome {
        if self.handle.is_finished() {
            match (&mut self.handle).now_or_never() {
                Some(Err(err)) if !err.is_cancelled() => CancelOutcome::Failed(err),
                _ => CancelOutcome::AlreadyComplete,
            }
        } else {
            self.handle.abort();
            CancelOutcome::Cancelled
        }
    }
}
