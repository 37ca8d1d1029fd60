//! Export gating.

use enroll_model::ValidationReport;

use crate::rules::RuleSet;

/// Whether export may proceed, and which rules block it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportGate {
    pub enabled: bool,
    /// Human-readable names of the blocking rules, in report order.
    pub blocking: Vec<String>,
}

/// Decide whether a report allows export under the rule set's gate policy.
pub fn gate_export(rules: &RuleSet, report: &ValidationReport) -> ExportGate {
    let mut blocking: Vec<String> = report
        .failing_terms()
        .into_iter()
        .map(|term| term.label())
        .collect();
    if report.duplicate_error.is_some() {
        blocking.push("중복 과목".to_string());
    }
    if rules.gate.includes_category_rules() {
        if !report.exact_category.ok {
            blocking.push(rules.exact_category.label.clone());
        }
        if !report.max_category.ok {
            blocking.push(rules.max_category.label.clone());
        }
    }
    ExportGate {
        enabled: blocking.is_empty(),
        blocking,
    }
}
