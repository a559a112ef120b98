//! Secondary lookup: a short encyclopedia summary for a selected
//! place.

pub mod wiki;


use std::sync::Arc;

use tracing::warn;

use crate::render;
use crate::surface::Surface;
use wiki::Encyclopedia;

/// Longest extract rendered before clipping.
pub const EXTRACT_LIMIT: usize = 600;
const TRUNCATION_MARKER: &str = "[...]";

/// A found encyclopedia page: canonical title + intro extract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub title: String,
    pub extract: String,
}

pub struct EnrichmentFetcher {
    encyclopedia: Arc<dyn Encyclopedia>,
    surface: Arc<dyn Surface>,
}

impl EnrichmentFetcher {
    pub fn new(encyclopedia: Arc<dyn Encyclopedia>, surface: Arc<dyn Surface>) -> Self {
        Self {
            encyclopedia,
            surface,
        }
    }

    /// Look up the place behind a clicked result item and fill the
    /// enrichment panel.
    ///
    /// Fire-and-forget: successive clicks race and the newest
    /// completion wins the panel. Anything that goes wrong degrades to
    /// the not-found fallback.
    pub fn lookup(&self, display_text: &str) {
        let title = city_token(display_text).to_owned();
        let encyclopedia = Arc::clone(&self.encyclopedia);
        let surface = Arc::clone(&self.surface);
        tokio::spawn(async move {
            let fragment = match encyclopedia.summary_of(&title).await {
                Ok(Some(summary)) => render::render_summary(&clip(summary)),
                Ok(None) => render::render_not_found(),
                Err(err) => {
                    warn!(%title, "enrichment lookup failed: {err:#}");
                    render::render_not_found()
                }
            };
            surface.show_enrichment(&fragment);
            surface.set_divider(true);
        });
    }
}

/// Places come formatted "City, Region"; only the city token names the
/// page.
pub fn city_token(display_text: &str) -> &str {
    display_text.split(',').next().unwrap_or(display_text)
}

/// Clip an over-long extract to [`EXTRACT_LIMIT`] characters plus the
/// truncation marker.
fn clip(mut summary: Summary) -> Summary {
    if summary.extract.chars().count() > EXTRACT_LIMIT {
        let mut clipped: String = summary.extract.chars().take(EXTRACT_LIMIT).collect();
        clipped.push_str(TRUNCATION_MARKER);
        summary.extract = clipped;
    }
    summary
}
