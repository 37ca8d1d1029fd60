use std::fs;
use std::io::Write;
use std::path::PathBuf;

use comfy_table::presets::ASCII_FULL_CONDENSED;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};
use tracing::warn;

use super::{ExportFormat, ExportInput, Exporter};
use crate::document::{SIGN_OFF_LINE, Section, SummaryDocument};
use crate::error::Result;

/// Page separator between year 2 and year 3.
const PAGE_BREAK: &str = "\u{c}";

/// Plain-text rendering of the summary document.
#[derive(Debug, Clone, Default)]
pub struct TextExporter {
    letterhead: Option<PathBuf>,
}

impl TextExporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the title with the contents of a letterhead file.
    ///
    /// An unreadable or empty file falls back to the default title.
    #[must_use]
    pub fn with_letterhead(mut self, path: impl Into<PathBuf>) -> Self {
        self.letterhead = Some(path.into());
        self
    }

    fn title(&self, document: &SummaryDocument) -> String {
        let Some(path) = &self.letterhead else {
            return document.title.clone();
        };
        match fs::read_to_string(path) {
            Ok(text) if !text.trim().is_empty() => text.trim_end().to_string(),
            Ok(_) => {
                warn!(path = %path.display(), "letterhead is empty; using default title");
                document.title.clone()
            }
            Err(error) => {
                warn!(path = %path.display(), %error, "letterhead unavailable; using default title");
                document.title.clone()
            }
        }
    }

    /// Render the document to a string.
    pub fn render(&self, document: &SummaryDocument) -> String {
        let mut lines = vec![
            self.title(document),
            String::new(),
            document.student.line(),
            SIGN_OFF_LINE.to_string(),
        ];
        for (page_no, page) in document.pages.iter().enumerate() {
            if page_no > 0 {
                lines.push(PAGE_BREAK.to_string());
            }
            for section in &page.sections {
                lines.push(String::new());
                lines.push(section.heading());
                lines.push(section_table(section).to_string());
                lines.push(format!("{} {}", section.total_label(), section.total_hours));
            }
        }
        lines.push(String::new());
        lines.push(document.closing.text());
        let mut text = lines.join("\n");
        text.push('\n');
        text
    }
}

fn section_table(section: &Section) -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL_CONDENSED)
        .force_no_tty()
        .set_content_arrangement(ContentArrangement::Disabled)
        .set_header(vec!["과목명", "학점"]);
    for row in &section.rows {
        table.add_row(vec![Cell::new(&row.name), Cell::new(row.hours)]);
    }
    if let Some(column) = table.column_mut(1) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    table
}

impl Exporter for TextExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Text
    }

    fn write(&self, input: &ExportInput<'_>, out: &mut dyn Write) -> Result<()> {
        let document = SummaryDocument::build(input.index, input.selection);
        out.write_all(self.render(&document).as_bytes())?;
        Ok(())
    }
}
