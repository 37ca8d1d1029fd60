//! Commands accepted by a session and their outcomes.

use enroll_model::ValidationReport;

/// Toggle one course in or out of the selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionChange {
    Select(String),
    Deselect(String),
}

impl SelectionChange {
    pub fn course_id(&self) -> &str {
        match self {
            Self::Select(id) | Self::Deselect(id) => id,
        }
    }
}

/// Edit one of the student identity fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentityChange {
    StudentName(String),
    StudentIdNumber(String),
}

/// What a command did to the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeStatus {
    /// The selection or identity changed and was persisted.
    Applied,
    /// The command matched the current state; nothing changed.
    Unchanged,
    /// The course id is not offered in any term of the catalog.
    UnknownCourse,
    /// Mandatory courses cannot be deselected.
    MandatoryLocked,
}

impl ChangeStatus {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// Result of applying a command: its status plus the re-evaluated report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionUpdate {
    pub status: ChangeStatus,
    pub report: ValidationReport,
}
