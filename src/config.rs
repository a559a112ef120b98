//! Endpoint and tuning configuration.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_SEARCH_URL: &str = "http://localhost:8080/";
pub const DEFAULT_ENCYCLOPEDIA_URL: &str = "https://en.wikipedia.org/w/api.php";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed config file: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the local search service (`GET {search_url}?q=…`).
    pub search_url: String,
    /// MediaWiki-style extracts endpoint used for enrichment lookups.
    pub encyclopedia_url: String,
    /// Shortest query (in characters) that triggers a dispatch.
    pub min_query_len: usize,
    /// When set, cached fragments are appended to this file and loaded
    /// back on the next start.
    pub cache_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            search_url: DEFAULT_SEARCH_URL.to_string(),
            encyclopedia_url: DEFAULT_ENCYCLOPEDIA_URL.to_string(),
            min_query_len: 1,
            cache_file: None,
        }
    }
}

impl Config {
    /// Load from a TOML file; unset keys fall back to defaults, then
    /// `GAZETTEER_*` environment variables override the endpoints.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        let mut config: Config = toml::from_str(&raw)?;
        config.apply_env();
        Ok(config)
    }

    /// Defaults plus environment overrides.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env();
        config
    }

    fn apply_env(&mut self) {
        if let Ok(url) = std::env::var("GAZETTEER_SEARCH_URL") {
            self.search_url = url;
        }
        if let Ok(url) = std::env::var("GAZETTEER_ENCYCLOPEDIA_URL") {
            self.encyclopedia_url = url;
        }
    }
}
