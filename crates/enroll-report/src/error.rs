//! Export error types.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to {operation} file: {path}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing to the export sink failed.
    #[error("Failed to write export: {source}")]
    Write {
        #[from]
        source: std::io::Error,
    },

    #[error("Failed to write submission CSV: {source}")]
    Csv {
        #[source]
        source: csv::Error,
    },

    #[error("Failed to encode JSON export: {source}")]
    Json {
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, ExportError>;
