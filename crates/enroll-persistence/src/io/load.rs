//! Snapshot loading.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use enroll_model::Snapshot;

use crate::error::{PersistenceError, Result};

/// Load a snapshot file.
///
/// Returns `Ok(None)` when the file does not exist.
pub fn load_snapshot(path: &Path) -> Result<Option<Snapshot>> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(PersistenceError::Io {
                operation: "read",
                path: path.to_path_buf(),
                source: e,
            });
        }
    };

    let snapshot: Snapshot =
        serde_json::from_str(&text).map_err(|source| PersistenceError::Deserialization {
            path: path.to_path_buf(),
            source,
        })?;

    tracing::info!("Loaded selection from {}", path.display());
    Ok(Some(snapshot))
}
