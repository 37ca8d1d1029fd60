//! Validation report types.
//!
//! A report is produced fresh on every evaluation. Rule failures are ordinary
//! entries here, never errors.

use serde::{Deserialize, Serialize};

use crate::term::Term;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Success,
    Info,
}

impl Severity {
    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Error => "Error",
            Self::Success => "Success",
            Self::Info => "Info",
        }
    }
}

/// One user-visible line of a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub text: String,
    pub severity: Severity,
}

impl Message {
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            severity: Severity::Error,
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            severity: Severity::Success,
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            severity: Severity::Info,
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

/// Quota and hour checks for a single bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermReport {
    pub term: Term,
    pub is_valid: bool,
    /// Leading summary line first, then one line per group, then hours.
    pub messages: Vec<Message>,
    pub total_hours: u32,
    pub required_hours: u32,
}

impl TermReport {
    pub fn error_count(&self) -> usize {
        self.messages.iter().filter(|m| m.is_error()).count()
    }
}

/// Outcome of one of the special-category count rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryOutcome {
    pub ok: bool,
    /// Number of selected ids that fall in the category.
    pub selected: usize,
    /// `None` only when the rule emits nothing (max rule, empty selection).
    pub message: Option<Message>,
}

/// Full result of evaluating a selection against the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// One entry per bucket, in [`Term::ALL`] order.
    pub terms: Vec<TermReport>,
    pub duplicate_error: Option<String>,
    pub exact_category: CategoryOutcome,
    pub max_category: CategoryOutcome,
    /// All buckets valid and no duplicate-name conflict.
    pub overall_valid: bool,
    pub overall_message: Option<Message>,
    /// Whether the export action is allowed under the configured gate policy.
    pub export_enabled: bool,
}

impl ValidationReport {
    pub fn term(&self, term: Term) -> Option<&TermReport> {
        self.terms.iter().find(|report| report.term == term)
    }

    /// Buckets whose quota/hour checks fail, in display order.
    pub fn failing_terms(&self) -> Vec<Term> {
        self.terms
            .iter()
            .filter(|report| !report.is_valid)
            .map(|report| report.term)
            .collect()
    }

    /// Cross-bucket messages in display order: duplicate conflict, exact
    /// category, max category, overall verdict.
    pub fn global_messages(&self) -> Vec<Message> {
        let mut messages = Vec::new();
        if let Some(text) = &self.duplicate_error {
            messages.push(Message::error(text.clone()));
        }
        messages.extend(self.exact_category.message.clone());
        messages.extend(self.max_category.message.clone());
        messages.extend(self.overall_message.clone());
        messages
    }

    /// True when export is allowed although a category rule reports an error.
    pub fn category_gate_gap(&self) -> bool {
        self.export_enabled && !(self.exact_category.ok && self.max_category.ok)
    }

    pub fn error_count(&self) -> usize {
        let term_errors: usize = self.terms.iter().map(TermReport::error_count).sum();
        let global_errors = self
            .global_messages()
            .iter()
            .filter(|m| m.is_error())
            .count();
        term_errors + global_errors
    }
}
