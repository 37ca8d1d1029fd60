//! Exporters for the registration summary.

mod json;
mod submission;
mod text;

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use enroll_catalog::CatalogIndex;
use enroll_model::{SelectionStore, ValidationReport};
use serde::{Deserialize, Serialize};

use crate::document::StudentIdentity;
use crate::error::{ExportError, Result};
use crate::naming::export_file_name;

pub use json::JsonExporter;
pub use submission::{SUBMISSION_HEADER, SubmissionCsvExporter};
pub use text::TextExporter;

/// Export file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Printable summary document.
    #[default]
    Text,
    /// One submission row per selected course.
    Csv,
    /// Summary document plus the validation report.
    Json,
}

impl ExportFormat {
    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Text => "Summary document",
            Self::Csv => "Submission CSV",
            Self::Json => "JSON",
        }
    }

    /// Get file extension.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }
}

/// Everything an exporter reads.
#[derive(Debug, Clone, Copy)]
pub struct ExportInput<'a> {
    pub index: &'a CatalogIndex,
    pub selection: &'a SelectionStore,
    pub report: &'a ValidationReport,
}

impl ExportInput<'_> {
    pub fn identity(&self) -> StudentIdentity {
        StudentIdentity::from_selection(self.selection)
    }
}

/// Writes one export format.
pub trait Exporter {
    fn format(&self) -> ExportFormat;

    fn write(&self, input: &ExportInput<'_>, out: &mut dyn Write) -> Result<()>;
}

/// Default exporter for a format.
pub fn exporter_for(format: ExportFormat) -> Box<dyn Exporter> {
    match format {
        ExportFormat::Text => Box::new(TextExporter::new()),
        ExportFormat::Csv => Box::new(SubmissionCsvExporter::now()),
        ExportFormat::Json => Box::new(JsonExporter),
    }
}

/// Write an export into `output_dir` and return the file path.
///
/// The file name comes from [`export_file_name`]; an existing file with the
/// same name is replaced.
pub fn write_export(
    exporter: &dyn Exporter,
    input: &ExportInput<'_>,
    output_dir: &Path,
) -> Result<PathBuf> {
    fs::create_dir_all(output_dir).map_err(|source| ExportError::Io {
        operation: "create directory",
        path: output_dir.to_path_buf(),
        source,
    })?;
    let format = exporter.format();
    let path = output_dir.join(export_file_name(&input.identity(), format.extension()));

    let file = File::create(&path).map_err(|source| ExportError::Io {
        operation: "create",
        path: path.clone(),
        source,
    })?;
    let mut writer = BufWriter::new(file);
    exporter.write(input, &mut writer)?;
    writer.flush().map_err(|source| ExportError::Io {
        operation: "write",
        path: path.clone(),
        source,
    })?;

    tracing::info!(format = format.label(), "Exported summary to {}", path.display());
    Ok(path)
}
