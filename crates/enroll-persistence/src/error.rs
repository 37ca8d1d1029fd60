//! Persistence error types.

use std::path::PathBuf;
use thiserror::Error;

/// Snapshot storage error.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// File I/O error.
    #[error("Failed to {operation} file: {path}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The snapshot could not be encoded.
    #[error("Failed to serialize selection snapshot")]
    Serialization {
        #[source]
        source: serde_json::Error,
    },

    /// The stored snapshot is not valid JSON of the expected shape.
    #[error("Corrupt selection snapshot: {path}")]
    Deserialization {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Atomic write failed (temp file couldn't be renamed).
    #[error("Failed to complete save operation")]
    AtomicWriteFailed {
        temp_path: PathBuf,
        target_path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PersistenceError {
    /// Get a user-friendly message for this error.
    pub fn user_message(&self) -> String {
        match self {
            Self::Io {
                operation, path, ..
            } => format!("Could not {} the file at {}", operation, path.display()),
            Self::Serialization { .. } => {
                "An error occurred while saving the course selection.".to_string()
            }
            Self::Deserialization { path, .. } => format!(
                "The saved selection at {} could not be read. Starting with an empty selection.",
                path.display()
            ),
            Self::AtomicWriteFailed { target_path, .. } => format!(
                "Could not save the selection to {}. Please check disk space and permissions.",
                target_path.display()
            ),
        }
    }

    /// Get a suggestion for how to resolve this error.
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::Io { operation, .. } => {
                if *operation == "read" {
                    Some("Check that the file exists and you have permission to read it.".into())
                } else {
                    Some("Check that you have permission to write to this location.".into())
                }
            }
            Self::Serialization { .. } => None,
            Self::Deserialization { .. } => {
                Some("Delete the snapshot file or run `enroll reset` to start over.".into())
            }
            Self::AtomicWriteFailed { .. } => {
                Some("Free up disk space or choose a different --state path.".into())
            }
        }
    }
}

/// Result type alias for persistence operations.
pub type Result<T> = std::result::Result<T, PersistenceError>;
