//! Sanitized markup construction for the result list and the
//! enrichment panel. All untrusted text passes through the escaping
//! channel of [`FragmentBuilder`]; raw markup enters only from
//! [`templates`].

pub mod escape;
pub mod formatter;
pub mod fragment;
pub mod templates;


pub use escape::escape;
pub use formatter::{render_not_found, render_results, render_summary, MAX_RESULTS};
pub use fragment::{FragmentBuilder, RenderedFragment};
