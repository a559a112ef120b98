//! Display-ready markup and the builder that produces it.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::escape::escape_into;

/// Sanitized markup for a result list or the enrichment panel.
/// Immutable once built; the inner string is only reachable read-only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RenderedFragment(String);

impl RenderedFragment {
    pub fn empty() -> Self {
        Self(String::new())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for RenderedFragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Two-channel fragment builder: `text` always escapes, `raw` is
/// reserved for crate-internal template markup. Untrusted input has no
/// path into a fragment except through `text`.
#[derive(Debug, Default)]
pub struct FragmentBuilder {
    buf: String,
}

impl FragmentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append trusted template markup verbatim.
    pub fn raw(mut self, markup: &str) -> Self {
        self.buf.push_str(markup);
        self
    }

    /// Append untrusted text, escaped.
    pub fn text(mut self, text: &str) -> Self {
        escape_into(&mut self.buf, text);
        self
    }

    pub fn finish(self) -> RenderedFragment {
        RenderedFragment(self.buf)
    }
}
