//! Catalog loading from JSON or CSV.
//!
//! Rows are validated one by one; a bad row is skipped with a warning and
//! never aborts the load.

use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::io::Read;
use std::path::Path;

use enroll_model::Course;
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{CatalogError, Result};

/// A non-fatal problem found while loading or indexing the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogWarning {
    /// Zero-based row index in the source, if the warning is tied to a row.
    pub row: Option<usize>,
    /// Course id, if one could be read.
    pub course_id: Option<String>,
    pub reason: String,
}

impl fmt::Display for CatalogWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.row, &self.course_id) {
            (Some(row), Some(id)) => write!(f, "row {row} ({id}): {}", self.reason),
            (Some(row), None) => write!(f, "row {row}: {}", self.reason),
            (None, Some(id)) => write!(f, "{id}: {}", self.reason),
            (None, None) => write!(f, "{}", self.reason),
        }
    }
}

/// Courses accepted from a catalog source plus the rows that were skipped.
#[derive(Debug, Clone, Default)]
pub struct LoadedCatalog {
    pub courses: Vec<Course>,
    pub warnings: Vec<CatalogWarning>,
}

impl LoadedCatalog {
    fn accept(&mut self, row: usize, course: Course, seen: &mut HashSet<String>) {
        if let Some(reason) = row_problem(&course) {
            self.skip(row, Some(course.id), reason);
            return;
        }
        if !seen.insert(course.id.clone()) {
            self.skip(row, Some(course.id), "duplicate course id".to_string());
            return;
        }
        self.courses.push(course);
    }

    fn skip(&mut self, row: usize, course_id: Option<String>, reason: String) {
        let warning = CatalogWarning {
            row: Some(row),
            course_id,
            reason,
        };
        warn!(%warning, "skipping catalog row");
        self.warnings.push(warning);
    }
}

/// Load a catalog file, choosing the parser by extension.
pub fn load_catalog(path: &Path) -> Result<LoadedCatalog> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    let loaded = match extension.as_deref() {
        Some("json") => {
            let text = fs::read_to_string(path).map_err(|source| CatalogError::FileRead {
                path: path.to_path_buf(),
                source,
            })?;
            parse_catalog_json(&text)?
        }
        Some("csv") => {
            let file = fs::File::open(path).map_err(|source| CatalogError::FileRead {
                path: path.to_path_buf(),
                source,
            })?;
            parse_catalog_csv(file)?
        }
        _ => {
            return Err(CatalogError::UnsupportedFormat {
                path: path.to_path_buf(),
            });
        }
    };
    debug!(
        path = %path.display(),
        courses = loaded.courses.len(),
        skipped = loaded.warnings.len(),
        "loaded catalog"
    );
    Ok(loaded)
}

/// Parse a JSON array of course objects.
pub fn parse_catalog_json(text: &str) -> Result<LoadedCatalog> {
    let value: Value = serde_json::from_str(text).map_err(|source| CatalogError::Json { source })?;
    let Value::Array(rows) = value else {
        return Err(CatalogError::NotAnArray);
    };

    let mut loaded = LoadedCatalog::default();
    let mut seen = HashSet::new();
    for (row, raw) in rows.into_iter().enumerate() {
        let course_id = raw
            .get("id")
            .and_then(Value::as_str)
            .map(ToString::to_string);
        match serde_json::from_value::<Course>(raw) {
            Ok(course) => loaded.accept(row, course, &mut seen),
            Err(error) => loaded.skip(row, course_id, error.to_string()),
        }
    }
    Ok(loaded)
}

/// Parse a CSV catalog whose header row uses the JSON field names.
pub fn parse_catalog_csv<R: Read>(reader: R) -> Result<LoadedCatalog> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);
    // Fail fast on an unreadable header row; row errors are handled below.
    reader
        .headers()
        .map_err(|source| CatalogError::Csv { source })?;

    let mut loaded = LoadedCatalog::default();
    let mut seen = HashSet::new();
    for (row, record) in reader.deserialize::<Course>().enumerate() {
        match record {
            Ok(course) => loaded.accept(row, course, &mut seen),
            Err(error) => loaded.skip(row, None, error.to_string()),
        }
    }
    Ok(loaded)
}

fn row_problem(course: &Course) -> Option<String> {
    if course.id.trim().is_empty() {
        return Some("course id is empty".to_string());
    }
    if course.name.trim().is_empty() {
        return Some("course name is empty".to_string());
    }
    if course.group.trim().is_empty() {
        return Some("group label is empty".to_string());
    }
    if course.hours == 0 {
        return Some("hours must be positive".to_string());
    }
    None
}
