//! Error types for catalog loading.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that prevent a catalog from being loaded at all.
///
/// Individual malformed rows are not errors; they surface as
/// [`CatalogWarning`](crate::CatalogWarning)s and are skipped.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Catalog file could not be read.
    #[error("failed to read catalog {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Catalog JSON is not well-formed.
    #[error("failed to parse catalog JSON: {source}")]
    Json {
        #[source]
        source: serde_json::Error,
    },

    /// Catalog JSON parsed, but the top level is not an array of courses.
    #[error("catalog JSON must be an array of course objects")]
    NotAnArray,

    /// Catalog CSV could not be read (bad header row, I/O failure).
    #[error("failed to read catalog CSV: {source}")]
    Csv {
        #[source]
        source: csv::Error,
    },

    /// File extension is neither `.json` nor `.csv`.
    #[error("unsupported catalog format: {path} (expected .json or .csv)")]
    UnsupportedFormat { path: PathBuf },
}

/// Result type for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CatalogError::UnsupportedFormat {
            path: PathBuf::from("/data/courses.xlsx"),
        };
        assert_eq!(
            err.to_string(),
            "unsupported catalog format: /data/courses.xlsx (expected .json or .csv)"
        );
    }
}
