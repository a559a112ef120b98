//! HTTP transport for the local search service.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;
use url::Url;

use super::types::{PlaceRecord, SearchResponse};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(8);

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid search endpoint: {0}")]
    Endpoint(#[from] url::ParseError),
    #[error("search request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// Seam to whatever answers place queries. The dispatcher only ever
/// talks to this trait.
#[async_trait]
pub trait SearchBackend: Send + Sync {
    /// Human-readable name for logging.
    fn name(&self) -> &'static str;

    /// Fetch candidate places for `query`, server order preserved.
    async fn search(&self, query: &str) -> anyhow::Result<Vec<PlaceRecord>>;
}

pub struct HttpSearchClient {
    http: Client,
    endpoint: Url,
}

impl HttpSearchClient {
    pub fn new(endpoint: &str) -> Result<Self, ClientError> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            endpoint: Url::parse(endpoint)?,
        })
    }

    fn query_url(&self, query: &str) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut().clear().append_pair("q", query);
        url
    }
}

#[async_trait]
impl SearchBackend for HttpSearchClient {
    fn name(&self) -> &'static str {
        "search-http"
    }

    async fn search(&self, query: &str) -> anyhow::Result<Vec<PlaceRecord>> {
        let response: SearchResponse = self
            .http
            .get(self.query_url(query))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(response.results)
    }
}
