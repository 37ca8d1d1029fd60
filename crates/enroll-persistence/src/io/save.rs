//! Snapshot saving.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use enroll_model::Snapshot;

use crate::error::{PersistenceError, Result};

/// Save a snapshot as JSON.
///
/// Writes a sibling temp file, syncs it, then renames it over `path`.
pub fn save_snapshot(snapshot: &Snapshot, path: &Path) -> Result<()> {
    let bytes = serde_json::to_vec_pretty(snapshot)
        .map_err(|source| PersistenceError::Serialization { source })?;

    let temp_path = path.with_extension("json.tmp");

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| PersistenceError::Io {
            operation: "create directory",
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    let mut file = File::create(&temp_path).map_err(|e| PersistenceError::Io {
        operation: "create",
        path: temp_path.clone(),
        source: e,
    })?;

    file.write_all(&bytes).map_err(|e| PersistenceError::Io {
        operation: "write",
        path: temp_path.clone(),
        source: e,
    })?;

    file.sync_all().map_err(|e| PersistenceError::Io {
        operation: "sync",
        path: temp_path.clone(),
        source: e,
    })?;

    fs::rename(&temp_path, path).map_err(|e| PersistenceError::AtomicWriteFailed {
        temp_path: temp_path.clone(),
        target_path: path.to_path_buf(),
        source: e,
    })?;

    tracing::info!(
        selected = snapshot.selected_course_ids.len(),
        "Saved selection to {}",
        path.display()
    );
    Ok(())
}
