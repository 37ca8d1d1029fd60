//! Registration summary output.
//!
//! - [`selected_by_term`] lists selected courses per term in display order.
//! - [`SummaryDocument`] is the page/section model of the registration
//!   summary (`수강신청 내역서`).
//! - [`Exporter`] implementations write the summary as plain text, as
//!   submission CSV rows, or as JSON.

mod document;
mod error;
mod export;
mod naming;
mod selected;

pub use document::{
    Closing, NOT_ENTERED, Page, Section, SectionRow, SIGN_OFF_LINE, StudentIdentity,
    SummaryDocument, TITLE,
};
pub use error::{ExportError, Result};
pub use export::{
    ExportFormat, ExportInput, Exporter, JsonExporter, SUBMISSION_HEADER, SubmissionCsvExporter,
    TextExporter, exporter_for, write_export,
};
pub use naming::export_file_name;
pub use selected::{TermSelection, selected_by_term};
