//! Full evaluation of a selection against the catalog.
//!
//! Every call recomputes the whole report from its inputs; nothing is cached
//! between calls.

use enroll_catalog::CatalogIndex;
use enroll_model::{Message, SelectionStore, Term, ValidationReport};
use tracing::{debug, warn};

use crate::checks::{category, duplicate, term};
use crate::gate::gate_export;
use crate::rules::RuleSet;

const OVERALL_SUCCESS: &str =
    "모든 학년/학기의 수강신청 조건이 충족되었습니다. PDF 다운로드가 가능합니다.";

/// Evaluate every rule and build the report.
pub fn evaluate(index: &CatalogIndex, selection: &SelectionStore, rules: &RuleSet) -> ValidationReport {
    let terms: Vec<_> = Term::ALL
        .into_iter()
        .map(|t| term::check(index.term(t), selection, rules.required_hours_for(t)))
        .collect();
    for report in &terms {
        debug!(
            term = %report.term,
            valid = report.is_valid,
            hours = report.total_hours,
            required = report.required_hours,
            "evaluated term"
        );
    }

    let duplicate_error = duplicate::check(index, selection);
    let exact_category = category::check_exact(&rules.exact_category, index, selection);
    let max_category = category::check_max(&rules.max_category, index, selection);

    let all_terms_valid = terms.iter().all(|report| report.is_valid);
    let overall_valid = all_terms_valid && duplicate_error.is_none();
    let overall_message = if overall_valid {
        Some(Message::success(OVERALL_SUCCESS))
    } else if duplicate_error.is_none() {
        let failing = terms
            .iter()
            .filter(|report| !report.is_valid)
            .map(|report| report.term.label())
            .collect::<Vec<_>>()
            .join(", ");
        Some(Message::error(format!(
            "{failing} 수강신청 조건이 충족되지 않았습니다. 각 학년/학기별 선택 내용을 확인해주세요."
        )))
    } else {
        None
    };

    let mut report = ValidationReport {
        terms,
        duplicate_error,
        exact_category,
        max_category,
        overall_valid,
        overall_message,
        export_enabled: false,
    };
    report.export_enabled = gate_export(rules, &report).enabled;

    if report.category_gate_gap() {
        warn!(
            exact_ok = report.exact_category.ok,
            max_ok = report.max_category.ok,
            "export enabled while a category rule fails"
        );
    }
    debug!(
        overall_valid = report.overall_valid,
        export_enabled = report.export_enabled,
        "evaluated selection"
    );
    report
}
