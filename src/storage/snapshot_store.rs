//! Snapshot persistence
//!
//! The whole workspace persists as one JSON file. Reads fall back to the
//! seed workspace when the file is absent or unparsable; writes go through
//! a temp file and rename so a crash mid-write never corrupts the
//! snapshot.

use crate::config::SNAPSHOT_FILE_NAME;
use crate::defaults::seed_snapshot;
use crate::error::Result;
use crate::model::WorkspaceSnapshot;
use std::fs;
use std::path::{Path, PathBuf};

/// JSON-file snapshot storage.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    /// Store the snapshot under the given data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            path: data_dir.into().join(SNAPSHOT_FILE_NAME),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted snapshot, or the seed workspace when nothing
    /// usable is on disk. Never fails: a broken snapshot degrades to the
    /// default and the error is logged.
    pub fn load(&self) -> WorkspaceSnapshot {
        match self.try_load() {
            Ok(Some(snapshot)) => {
                tracing::info!("Loaded workspace snapshot from {:?}", self.path);
                snapshot
            }
            Ok(None) => {
                tracing::info!("No snapshot at {:?}, starting from seed workspace", self.path);
                seed_snapshot()
            }
            Err(e) => {
                tracing::warn!("Failed to load snapshot ({}), starting from seed workspace", e);
                seed_snapshot()
            }
        }
    }

    fn try_load(&self) -> Result<Option<WorkspaceSnapshot>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path)?;
        Ok(Some(serde_json::from_str(&content)?))
    }

    /// Persist the snapshot atomically (temp file + rename).
    pub fn save(&self, snapshot: &WorkspaceSnapshot) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(snapshot)?;
        let temp_path = self.path.with_extension("json.tmp");
        fs::write(&temp_path, content)?;
        fs::rename(&temp_path, &self.path)?;

        tracing::debug!("Snapshot saved to {:?}", self.path);
        Ok(())
    }
}
