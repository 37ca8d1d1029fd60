//! Shared types for course registration: catalog records, year/semester
//! buckets, the mutable selection and the validation report.

pub mod course;
pub mod error;
pub mod report;
pub mod selection;
pub mod term;

pub use course::Course;
pub use error::{ModelError, Result};
pub use report::{CategoryOutcome, Message, Severity, TermReport, ValidationReport};
pub use selection::{SelectionStore, Snapshot};
pub use term::Term;

/// Group label whose member courses are forced-selected and exempt from quotas.
pub const MANDATORY_GROUP_NAME: &str = "학교지정";
