use std::io::Write;

use chrono::{DateTime, Local};

use super::{ExportFormat, ExportInput, Exporter};
use crate::error::{ExportError, Result};
use crate::selected::selected_by_term;

pub const SUBMISSION_HEADER: [&str; 8] = [
    "Timestamp",
    "Student Name",
    "Student ID",
    "Course ID",
    "Course Name",
    "Year",
    "Semester",
    "Hours",
];

/// One spreadsheet row per selected course, stamped with a single timestamp.
#[derive(Debug, Clone)]
pub struct SubmissionCsvExporter {
    timestamp: DateTime<Local>,
}

impl SubmissionCsvExporter {
    pub fn at(timestamp: DateTime<Local>) -> Self {
        Self { timestamp }
    }

    pub fn now() -> Self {
        Self::at(Local::now())
    }
}

impl Exporter for SubmissionCsvExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Csv
    }

    fn write(&self, input: &ExportInput<'_>, out: &mut dyn Write) -> Result<()> {
        let timestamp = self.timestamp.format("%Y-%m-%d %H:%M:%S").to_string();
        let name = input.selection.student_name();
        let id_number = input.selection.student_id_number();

        let mut writer = csv::Writer::from_writer(out);
        writer
            .write_record(SUBMISSION_HEADER)
            .map_err(|source| ExportError::Csv { source })?;
        for term in selected_by_term(input.index, input.selection) {
            for course in term.courses {
                let year = course.year.to_string();
                let semester = course.semester.to_string();
                let hours = course.hours.to_string();
                writer
                    .write_record([
                        timestamp.as_str(),
                        name,
                        id_number,
                        course.id.as_str(),
                        course.name.as_str(),
                        year.as_str(),
                        semester.as_str(),
                        hours.as_str(),
                    ])
                    .map_err(|source| ExportError::Csv { source })?;
            }
        }
        writer.flush()?;
        Ok(())
    }
}
