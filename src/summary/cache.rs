//! Link → summary cache with an optional JSON snapshot on disk.
//!
//! The cache is not synchronized. Callers sharing it across tasks must
//! serialize access themselves.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::core::models::SummaryItem;
use crate::errors::RelayError;

#[derive(Debug, Default, Serialize, Deserialize)]
struct Snapshot {
    #[serde(alias = "Summaries", default)]
    summaries: HashMap<String, SummaryItem>,
}

#[derive(Debug, Default)]
pub struct SummaryCache {
    summaries: HashMap<String, SummaryItem>,
    snapshot_path: Option<PathBuf>,
}

impl SummaryCache {
    /// Cache that lives only for the process lifetime.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Cache backed by `path`. Existing entries are loaded from it; an
    /// unreadable or corrupt file is logged and the cache starts empty.
    #[must_use]
    pub fn with_snapshot(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let summaries = match load_snapshot(&path) {
            Ok(snapshot) => snapshot.summaries,
            Err(e) => {
                warn!("Can't load summary cache from {}: {}", path.display(), e);
                HashMap::new()
            }
        };
        debug!("Summary cache loaded with {} entries", summaries.len());

        Self {
            summaries,
            snapshot_path: Some(path),
        }
    }

    #[must_use]
    pub fn get(&self, link: &str) -> Option<&SummaryItem> {
        self.summaries.get(link)
    }

    /// Stores `item` under the exact `link` string, replacing any previous entry.
    pub fn insert(&mut self, link: &str, item: SummaryItem) {
        self.summaries.insert(link.to_string(), item);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.summaries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.summaries.is_empty()
    }

    #[must_use]
    pub fn is_persistent(&self) -> bool {
        self.snapshot_path.is_some()
    }

    /// Rewrites the snapshot file with the whole cache. No-op for in-memory caches.
    pub fn persist(&self) -> Result<(), RelayError> {
        let Some(path) = self.snapshot_path.as_ref() else {
            return Ok(());
        };

        let snapshot = Snapshot {
            summaries: self.summaries.clone(),
        };
        let data = serde_json::to_vec(&snapshot)
            .map_err(|e| RelayError::CacheError(format!("encode: {e}")))?;
        fs::write(path, data)
            .map_err(|e| RelayError::CacheError(format!("{}: {e}", path.display())))
    }
}

fn load_snapshot(path: &Path) -> Result<Snapshot, RelayError> {
    let data = fs::read(path)
        .map_err(|e| RelayError::CacheError(format!("{}: {e}", path.display())))?;
    serde_json::from_slice(&data).map_err(|e| RelayError::CacheError(format!("decode: {e}")))
}
