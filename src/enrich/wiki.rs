//! MediaWiki extracts-endpoint client.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

use super::Summary;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(8);

/// Page-set key the service uses for "no such page".
pub const MISSING_PAGE_KEY: &str = "-1";

#[derive(Debug, Error)]
pub enum EnrichError {
    #[error("encyclopedia request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("malformed encyclopedia response: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Seam to the encyclopedia collaborator.
#[async_trait]
pub trait Encyclopedia: Send + Sync {
    /// Intro summary for the page titled `title`, if one exists with a
    /// non-empty extract.
    async fn summary_of(&self, title: &str) -> anyhow::Result<Option<Summary>>;
}

pub struct WikiBackend {
    http: Client,
    endpoint: String,
}

impl WikiBackend {
    pub fn new(endpoint: &str) -> Result<Self, EnrichError> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            endpoint: endpoint.to_string(),
        })
    }

    fn page_url(&self, title: &str) -> String {
        format!(
            "{}?format=json&action=query&prop=extracts&exintro=&explaintext=&origin=*&titles={}",
            self.endpoint,
            urlencoding::encode(title)
        )
    }
}

#[async_trait]
impl Encyclopedia for WikiBackend {
    async fn summary_of(&self, title: &str) -> anyhow::Result<Option<Summary>> {
        let body = self
            .http
            .get(self.page_url(title))
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        Ok(parse_summary(&body)?)
    }
}

#[derive(Debug, Default, Deserialize)]
struct WikiResponse {
    #[serde(default)]
    query: WikiQuery,
}

#[derive(Debug, Default, Deserialize)]
struct WikiQuery {
    #[serde(default)]
    pages: HashMap<String, WikiPage>,
}

#[derive(Debug, Default, Deserialize)]
struct WikiPage {
    #[serde(default)]
    title: String,
    #[serde(default)]
    extract: String,
}

/// Interpret a page-set body. `None` means there is nothing to show:
/// the sentinel key, or a page with an empty extract.
pub fn parse_summary(body: &str) -> Result<Option<Summary>, EnrichError> {
    let response: WikiResponse = serde_json::from_str(body)?;
    let found = response
        .query
        .pages
        .into_iter()
        .find(|(key, _)| key.as_str() != MISSING_PAGE_KEY);

    Ok(found.and_then(|(_, page)| {
        if page.extract.is_empty() {
            None
        } else {
            Some(Summary {
                title: page.title,
                extract: page.extract,
            })
        }
    }))
}
