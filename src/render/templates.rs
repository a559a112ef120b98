//! Markup skeletons the formatters stitch around escaped text.

/// One candidate match; the `resultItem` class is the hook the host
/// page wires its click handling to.
pub const RESULT_ITEM_OPEN: &str = r#"<p class="resultItem" title="Click for more info.">"#;
pub const RESULT_ITEM_CLOSE: &str = "</p>";

/// Terminal state for a lookup that produced nothing to show.
pub const NOT_FOUND: &str = "No further information found.";

pub const ATTRIBUTION_OPEN: &str = r#"<br>&emsp;— <a href="//en.wikipedia.org/wiki/"#;
pub const ATTRIBUTION_CLOSE: &str = r#"">Wikipedia</a>"#;
