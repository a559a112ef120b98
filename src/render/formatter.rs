//! Turns decoded records into display fragments.

use super::fragment::{FragmentBuilder, RenderedFragment};
use super::templates;
use crate::engine::types::PlaceRecord;
use crate::enrich::Summary;

/// Most items ever rendered; anything past this is dropped.
pub const MAX_RESULTS: usize = 10;

/// Render a candidate list, server order preserved, truncated to
/// [`MAX_RESULTS`]. The escaped city text is each item's entire text
/// content, so the host can hand it straight back on click.
pub fn render_results(records: &[PlaceRecord]) -> RenderedFragment {
    let mut builder = FragmentBuilder::new();
    for record in records.iter().take(MAX_RESULTS) {
        builder = builder
            .raw(templates::RESULT_ITEM_OPEN)
            .text(&record.city)
            .raw(templates::RESULT_ITEM_CLOSE);
    }
    builder.finish()
}

/// Render a found summary: the quoted extract, then the attribution
/// link targeting the page's canonical title.
pub fn render_summary(summary: &Summary) -> RenderedFragment {
    FragmentBuilder::new()
        .raw("\"")
        .text(&summary.extract)
        .raw("\"")
        .raw(templates::ATTRIBUTION_OPEN)
        .text(&summary.title)
        .raw(templates::ATTRIBUTION_CLOSE)
        .finish()
}

/// Render the lookup-produced-nothing fallback.
pub fn render_not_found() -> RenderedFragment {
    FragmentBuilder::new().raw(templates::NOT_FOUND).finish()
}
