//! Wire types for the search-service boundary.

use serde::Deserialize;

/// One candidate match. The service sends more fields; only the
/// display text is consumed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PlaceRecord {
    pub city: String,
}

/// Body of a search response: `{ "results": [ … ] }`, server order
/// meaningful.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<PlaceRecord>,
}
