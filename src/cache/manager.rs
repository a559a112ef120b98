//! High-level cache logic: lookup, first-write-wins store.

use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, Mutex};

use tracing::warn;

use super::flusher::{self, CacheRecord, FlusherHandle};
use crate::render::RenderedFragment;

/// Public handle to the cache. Cloning shares the underlying store.
#[derive(Clone)]
pub struct ResponseCache {
    inner: Arc<Mutex<CacheInner>>,
}

struct CacheInner {
    entries: HashMap<String, RenderedFragment>,
    flusher: Option<FlusherHandle>,
}

impl ResponseCache {
    /// In-memory only.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(CacheInner {
                entries: HashMap::new(),
                flusher: None,
            })),
        }
    }

    /// Backed by a JSON-lines file: existing entries are loaded now,
    /// new ones appended as they are stored. Must be called from
    /// within a tokio runtime (the flusher is a spawned task).
    pub fn with_persistence(path: &Path) -> anyhow::Result<Self> {
        let entries = load_entries(path)?;
        let flusher = flusher::spawn(path.to_path_buf());
        Ok(Self {
            inner: Arc::new(Mutex::new(CacheInner {
                entries,
                flusher: Some(flusher),
            })),
        })
    }

    pub fn get(&self, query: &str) -> Option<RenderedFragment> {
        self.inner.lock().unwrap().entries.get(query).cloned()
    }

    /// Store a fragment under the raw query text. An existing entry is
    /// left untouched; the first write wins.
    pub fn store(&self, query: &str, fragment: RenderedFragment) {
        let mut inner = self.inner.lock().unwrap();
        if inner.entries.contains_key(query) {
            return;
        }
        inner.entries.insert(query.to_owned(), fragment.clone());
        if let Some(flusher) = &inner.flusher {
            flusher.send(CacheRecord {
                query: query.to_owned(),
                fragment,
            });
        }
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for ResponseCache {
    fn default() -> Self {
        Self::new()
    }
}

fn load_entries(path: &Path) -> anyhow::Result<HashMap<String, RenderedFragment>> {
    let mut entries = HashMap::new();
    if !path.exists() {
        return Ok(entries);
    }
    let data = std::fs::read_to_string(path)?;
    for line in data.lines() {
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str::<CacheRecord>(line) {
            Ok(record) => {
                entries.entry(record.query).or_insert(record.fragment);
            }
            Err(err) => warn!("skipping corrupt cache line: {err}"),
        }
    }
    Ok(entries)
}
