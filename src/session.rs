//! Embedding-facing facade: binds the two user events to the engine.

use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use crate::cache::ResponseCache;
use crate::config::Config;
use crate::engine::client::{HttpSearchClient, SearchBackend};
use crate::engine::QueryDispatcher;
use crate::enrich::wiki::WikiBackend;
use crate::enrich::EnrichmentFetcher;
use crate::surface::Surface;

/// One live search UI: a dispatcher for the query input and an
/// enrichment fetcher for result clicks, sharing the host surface.
pub struct SearchSession {
    dispatcher: QueryDispatcher,
    enrichment: EnrichmentFetcher,
}

impl SearchSession {
    /// Build a session against live HTTP collaborators. Must be called
    /// from within a tokio runtime; requests run as spawned tasks.
    pub fn new(config: Config, surface: Arc<dyn Surface>) -> Result<Self> {
        let cache = match &config.cache_file {
            Some(path) => ResponseCache::with_persistence(path)?,
            None => ResponseCache::new(),
        };
        let backend: Arc<dyn SearchBackend> = Arc::new(HttpSearchClient::new(&config.search_url)?);
        let encyclopedia = Arc::new(WikiBackend::new(&config.encyclopedia_url)?);

        info!(
            search = %config.search_url,
            encyclopedia = %config.encyclopedia_url,
            "session ready"
        );

        Ok(Self {
            dispatcher: QueryDispatcher::new(
                backend,
                cache,
                Arc::clone(&surface),
                config.min_query_len,
            ),
            enrichment: EnrichmentFetcher::new(encyclopedia, surface),
        })
    }

    /// The user edited the query input.
    pub fn query_input(&self, text: &str) {
        self.dispatcher.submit(text);
    }

    /// The user clicked a rendered result item; `display_text` is the
    /// item's text content.
    pub fn result_click(&self, display_text: &str) {
        self.enrichment.lookup(display_text);
    }
}
