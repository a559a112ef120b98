//! Incremental place-name search client engine.
//!
//! As the user types, [`SearchSession::query_input`] dispatches the
//! fragment against a local search service — consulting a
//! process-lifetime response cache and cancelling superseded in-flight
//! requests — and hands up to ten sanitized result items to the host
//! [`Surface`]. Clicking a rendered result feeds
//! [`SearchSession::result_click`], which looks the place up on an
//! external encyclopedia service and fills the enrichment panel with a
//! short summary.
//!
//! Page layout, the search index, and the encyclopedia itself are
//! collaborators reached through trait seams; this crate owns the
//! dispatch/cancellation/caching logic and the markup it emits.

pub mod cache;
pub mod config;
pub mod engine;
pub mod enrich;
pub mod render;
pub mod session;
pub mod surface;

pub use config::Config;
pub use render::RenderedFragment;
pub use session::SearchSession;
pub use surface::Surface;
