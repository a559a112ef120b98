//! Background persistence: appends newly stored entries to the cache
//! file, one JSON record per line. Best-effort; failures are logged
//! and never reach the dispatch path.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tokio::io::AsyncWriteExt;
use tokio::sync::mpsc::{unbounded_channel, UnboundedSender};
use tracing::warn;

use crate::render::RenderedFragment;

/// One persisted cache entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheRecord {
    pub query: String,
    pub fragment: RenderedFragment,
}

#[derive(Clone)]
pub struct FlusherHandle(UnboundedSender<CacheRecord>);

impl FlusherHandle {
    pub fn send(&self, record: CacheRecord) {
        let _ = self.0.send(record);
    }
}

/// Spawn the writer task; it drains the channel until every handle is
/// dropped.
pub fn spawn(path: PathBuf) -> FlusherHandle {
    let (tx, mut rx) = unbounded_channel::<CacheRecord>();
    tokio::spawn(async move {
        while let Some(record) = rx.recv().await {
            if let Err(err) = append_record(&path, &record).await {
                warn!("cache flush failed: {err:#}");
            }
        }
    });
    FlusherHandle(tx)
}

async fn append_record(path: &Path, record: &CacheRecord) -> anyhow::Result<()> {
    let mut line = serde_json::to_string(record)?;
    line.push('\n');

    let mut file = tokio::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .await?;
    file.write_all(line.as_bytes()).await?;
    file.flush().await?;
    Ok(())
}
