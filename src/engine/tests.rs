//! Dispatcher behavior against stub backends and a recording surface.

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    use async_trait::async_trait;

    use crate::cache::ResponseCache;
    use crate::engine::client::SearchBackend;
    use crate::engine::dispatcher::QueryDispatcher;
    use crate::engine::pending::{CancelOutcome, PendingSearch};
    use crate::engine::types::PlaceRecord;
    use crate::render::RenderedFragment;
    use crate::surface::Surface;

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .try_init();
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Event {
        Results(String),
        Enrichment(String),
        Divider(bool),
    }

    #[derive(Default)]
    struct RecordingSurface {
        events: Mutex<Vec<Event>>,
    }

    impl RecordingSurface {
        fn events(&self) -> Vec<Event> {
            self.events.lock().unwrap().clone()
        }

        fn results(&self) -> Vec<String> {
            self.events()
                .into_iter()
                .filter_map(|event| match event {
                    Event::Results(markup) => Some(markup),
                    _ => None,
                })
                .collect()
        }
    }

    impl Surface for RecordingSurface {
        fn show_results(&self, fragment: &RenderedFragment) {
            self.events
                .lock()
                .unwrap()
                .push(Event::Results(fragment.as_str().to_owned()));
        }

        fn show_enrichment(&self, fragment: &RenderedFragment) {
            self.events
                .lock()
                .unwrap()
                .push(Event::Enrichment(fragment.as_str().to_owned()));
        }

        fn set_divider(&self, visible: bool) {
            self.events.lock().unwrap().push(Event::Divider(visible));
        }
    }

    /// Answers every query with "<query> Town"; queries starting with
    /// "slow" linger long enough to be superseded.
    struct StubBackend {
        calls: AtomicUsize,
    }

    impl StubBackend {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl SearchBackend for StubBackend {
        fn name(&self) -> &'static str {
            "stub"
        }

        async fn search(&self, query: &str) -> anyhow::Result<Vec<PlaceRecord>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let delay = if query.starts_with("slow") {
                Duration::from_millis(150)
            } else {
                Duration::from_millis(5)
            };
            tokio::time::sleep(delay).await;
            Ok(vec![PlaceRecord {
                city: format!("{query} Town"),
            }])
        }
    }

    fn dispatcher(backend: Arc<StubBackend>, surface: Arc<RecordingSurface>) -> QueryDispatcher {
        QueryDispatcher::new(backend, ResponseCache::new(), surface, 1)
    }

    async fn settle() {
        tokio::time::sleep(Duration::from_millis(50)).await;
    }

    #[tokio::test]
    async fn empty_query_only_resets_the_panel() {
        init_tracing();
        let backend = StubBackend::new();
        let surface = Arc::new(RecordingSurface::default());
        let engine = dispatcher(Arc::clone(&backend), Arc::clone(&surface));

        engine.submit("");
        settle().await;

        assert_eq!(backend.calls(), 0);
        assert_eq!(
            surface.events(),
            vec![Event::Divider(false), Event::Enrichment(String::new())]
        );
    }

    #[tokio::test]
    async fn renders_decoded_results() {
        let backend = StubBackend::new();
        let surface = Arc::new(RecordingSurface::default());
        let engine = dispatcher(Arc::clone(&backend), Arc::clone(&surface));

        engine.submit("bergen");
        settle().await;

        let results = surface.results();
        assert_eq!(results.len(), 1);
        assert!(results[0].contains("bergen Town"));
        assert_eq!(backend.calls(), 1);
    }

    #[tokio::test]
    async fn cache_hit_issues_no_network_call_and_is_byte_identical() {
        let backend = StubBackend::new();
        let surface = Arc::new(RecordingSurface::default());
        let engine = dispatcher(Arc::clone(&backend), Arc::clone(&surface));

        engine.submit("oslo");
        settle().await;
        engine.submit("oslo");
        settle().await;

        assert_eq!(backend.calls(), 1);
        let results = surface.results();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0], results[1]);
    }

    #[tokio::test]
    async fn newer_query_supersedes_older() {
        init_tracing();
        let backend = StubBackend::new();
        let surface = Arc::new(RecordingSurface::default());
        let engine = dispatcher(Arc::clone(&backend), Arc::clone(&surface));

        engine.submit("slow ville");
        tokio::time::sleep(Duration::from_millis(20)).await;
        engine.submit("fast");
        tokio::time::sleep(Duration::from_millis(300)).await;

        let results = surface.results();
        assert_eq!(results.len(), 1);
        assert!(results[0].contains("fast Town"));
        assert!(!results.iter().any(|markup| markup.contains("slow ville")));
    }

    #[tokio::test]
    async fn cache_hit_cancels_the_outstanding_request() {
        let backend = StubBackend::new();
        let surface = Arc::new(RecordingSurface::default());
        let engine = dispatcher(Arc::clone(&backend), Arc::clone(&surface));

        engine.submit("fast");
        settle().await;
        engine.submit("slow ville");
        tokio::time::sleep(Duration::from_millis(20)).await;
        engine.submit("fast");
        tokio::time::sleep(Duration::from_millis(300)).await;

        let results = surface.results();
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|markup| markup.contains("fast Town")));
    }

    #[tokio::test]
    async fn min_length_gate_is_configurable() {
        let backend = StubBackend::new();
        let surface = Arc::new(RecordingSurface::default());
        let engine = QueryDispatcher::new(
            Arc::clone(&backend) as Arc<dyn SearchBackend>,
            ResponseCache::new(),
            Arc::clone(&surface) as Arc<dyn Surface>,
            3,
        );

        engine.submit("ab");
        settle().await;
        assert_eq!(backend.calls(), 0);

        engine.submit("abc");
        settle().await;
        assert_eq!(backend.calls(), 1);
    }

    #[tokio::test]
    async fn cancel_classifies_pending_and_settled_tasks() {
        let settled_handle = tokio::spawn(async {});
        tokio::time::sleep(Duration::from_millis(20)).await;
        let settled = PendingSearch::new("a".into(), 1, settled_handle);
        assert!(matches!(settled.cancel(), CancelOutcome::AlreadyComplete));

        let pending_handle = tokio::spawn(async {
            tokio::time::sleep(Duration::from_secs(5)).await;
        });
        let pending = PendingSearch::new("b".into(), 2, pending_handle);
        assert!(matches!(pending.cancel(), CancelOutcome::Cancelled));
    }

    #[tokio::test]
    async fn cancel_reports_a_task_that_died() {
        let handle = tokio::spawn(async {
            panic!("boom");
        });
        tokio::time::sleep(Duration::from_millis(20)).await;
        let pending = PendingSearch::new("c".into(), 3, handle);
        match pending.cancel() {
            CancelOutcome::Failed(err) => assert!(err.is_panic()),
            other => panic!("expected Failed, got {other:?}"),
        }
    }
}
