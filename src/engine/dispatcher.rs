//! Query dispatch: length gate, cache consult, cancel-then-issue.

use std::sync::{Arc, Mutex};

use tracing::{debug, warn};

use super::client::SearchBackend;
use super::pending::{CancelOutcome, PendingSearch};
use crate::cache::ResponseCache;
use crate::render::{self, RenderedFragment};
use crate::surface::Surface;

pub struct QueryDispatcher {
    backend: Arc<dyn SearchBackend>,
    cache: ResponseCache,
    surface: Arc<dyn Surface>,
    min_query_len: usize,
    state: Arc<Mutex<DispatchState>>,
}

/// The outstanding-request set and the generation counter that decides
/// which completion is still authoritative.
#[derive(Default)]
struct DispatchState {
    pending: Vec<PendingSearch>,
    generation: u64,
}

impl QueryDispatcher {
    pub fn new(
        backend: Arc<dyn SearchBackend>,
        cache: ResponseCache,
        surface: Arc<dyn Surface>,
        min_query_len: usize,
    ) -> Self {
        Self {
            backend,
            cache,
            surface,
            min_query_len,
            state: Arc::new(Mutex::new(DispatchState::default())),
        }
    }

    /// Handle one keystroke's worth of input. Must be called from
    /// within a tokio runtime; the network request runs as a spawned
    /// task.
    pub fn submit(&self, query: &str) {
        // The enrichment panel resets on every submit, valid query or
        // not.
        self.surface.set_divider(false);
        self.surface.show_enrichment(&RenderedFragment::empty());

        if query.chars().count() < self.min_query_len {
            return;
        }

        if let Some(fragment) = self.cache.get(query) {
            // An older in-flight response must not overwrite the hit.
            self.cancel_pending();
            debug!(%query, "serving cached fragment");
            self.surface.show_results(&fragment);
            return;
        }

        let generation = self.cancel_pending();
        self.dispatch(query.to_owned(), generation);
    }

    /// Cancel and clear every outstanding request, then advance the
    /// generation so late completions lose authority. Cancellation
    /// outcomes are logged, never propagated.
    fn cancel_pending(&self) -> u64 {
        let mut state = self.state.lock().unwrap();
        for pending in state.pending.drain(..) {
            let stale = pending.query().to_owned();
            match pending.cancel() {
                CancelOutcome::Cancelled => debug!(query = %stale, "aborted stale request"),
                CancelOutcome::AlreadyComplete => {
                    debug!(query = %stale, "stale request had already settled")
                }
                CancelOutcome::Failed(err) => {
                    warn!(query = %stale, error = %err, "stale request task had failed")
                }
            }
        }
        state.generation += 1;
        state.generation
    }

    fn dispatch(&self, query: String, generation: u64) {
        let backend = Arc::clone(&self.backend);
        let cache = self.cache.clone();
        let surface = Arc::clone(&self.surface);
        let state = Arc::clone(&self.state);
        let task_query = query.clone();

        // Hold the state lock across spawn + registration so the task
        // cannot observe the pending set before its own entry exists.
        let mut registry = self.state.lock().unwrap();
        let handle = tokio::spawn(async move {
            let outcome = backend.search(&task_query).await;
            let mut state = state.lock().unwrap();
            state.pending.retain(|p| p.generation() != generation);
            match outcome {
                Ok(records) => {
                    if state.generation == generation {
                        let fragment = render::render_results(&records);
                        cache.store(&task_query, fragment.clone());
                        surface.show_results(&fragment);
                    } else {
                        debug!(query = %task_query, "dropping response for superseded query");
                    }
                }
                Err(err) => {
                    warn!(
                        query = %task_query,
                        backend = backend.name(),
                        "search request failed: {err:#}"
                    );
                }
            }
        });
        registry
            .pending
            .push(PendingSearch::new(query, generation, handle));
    }
}
