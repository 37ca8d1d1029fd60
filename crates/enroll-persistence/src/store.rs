//! Snapshot stores.

use std::path::{Path, PathBuf};

use enroll_model::Snapshot;
use tracing::warn;

use crate::error::Result;
use crate::io::{load_snapshot, save_snapshot};

/// Somewhere a snapshot can be saved and loaded.
pub trait SnapshotStore {
    /// Load the stored snapshot, or `None` if nothing has been saved.
    fn load(&self) -> Result<Option<Snapshot>>;

    /// Replace the stored snapshot.
    fn save(&mut self, snapshot: &Snapshot) -> Result<()>;
}

/// Load from a store, degrading to the empty snapshot on any failure.
///
/// A corrupt or unreadable snapshot is logged and otherwise ignored.
pub fn load_or_default(store: &dyn SnapshotStore) -> Snapshot {
    match store.load() {
        Ok(Some(snapshot)) => snapshot,
        Ok(None) => Snapshot::default(),
        Err(error) => {
            warn!(%error, "ignoring unreadable selection snapshot");
            Snapshot::default()
        }
    }
}

/// Snapshot stored as a JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotStore for JsonFileStore {
    fn load(&self) -> Result<Option<Snapshot>> {
        load_snapshot(&self.path)
    }

    fn save(&mut self, snapshot: &Snapshot) -> Result<()> {
        save_snapshot(snapshot, &self.path)
    }
}

/// In-memory store; keeps the latest snapshot and counts saves.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    snapshot: Option<Snapshot>,
    saves: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds a snapshot.
    pub fn with_snapshot(snapshot: Snapshot) -> Self {
        Self {
            snapshot: Some(snapshot),
            saves: 0,
        }
    }

    pub fn snapshot(&self) -> Option<&Snapshot> {
        self.snapshot.as_ref()
    }

    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl SnapshotStore for MemoryStore {
    fn load(&self) -> Result<Option<Snapshot>> {
        Ok(self.snapshot.clone())
    }

    fn save(&mut self, snapshot: &Snapshot) -> Result<()> {
        self.snapshot = Some(snapshot.clone());
        self.saves += 1;
        Ok(())
    }
}
