//! Boundary to the embedding UI.

use crate::render::RenderedFragment;

/// What the host page exposes to the engine: a result-list container,
/// an enrichment panel with a text slot, and the divider above it.
///
/// Implementations should be cheap and must not call back into the
/// session from inside these methods.
pub trait Surface: Send + Sync {
    /// Replace the result list wholesale with `fragment`.
    fn show_results(&self, fragment: &RenderedFragment);

    /// Replace the enrichment panel's text slot with `fragment`.
    fn show_enrichment(&self, fragment: &RenderedFragment);

    /// Toggle the divider that marks the enrichment panel as populated.
    fn set_divider(&self, visible: bool);
}
