use std::io::Write;

use enroll_model::ValidationReport;
use serde::Serialize;

use super::{ExportFormat, ExportInput, Exporter};
use crate::document::SummaryDocument;
use crate::error::{ExportError, Result};

/// Summary document and validation report as one JSON object.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonExporter;

#[derive(Serialize)]
struct JsonExport<'a> {
    document: SummaryDocument,
    report: &'a ValidationReport,
}

impl Exporter for JsonExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Json
    }

    fn write(&self, input: &ExportInput<'_>, out: &mut dyn Write) -> Result<()> {
        let payload = JsonExport {
            document: SummaryDocument::build(input.index, input.selection),
            report: input.report,
        };
        serde_json::to_writer_pretty(&mut *out, &payload)
            .map_err(|source| ExportError::Json { source })?;
        writeln!(out)?;
        Ok(())
    }
}
