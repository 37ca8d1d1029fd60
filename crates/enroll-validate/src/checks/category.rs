//! Special-category count rules spanning all terms.

use enroll_catalog::CatalogIndex;
use enroll_model::{CategoryOutcome, Message, SelectionStore};

use crate::rules::CategoryRule;

/// Count of selected ids that belong to the category.
pub fn selected_in(rule: &CategoryRule, selection: &SelectionStore) -> usize {
    selection.iter().filter(|id| rule.contains(id)).count()
}

/// Category members rendered for messages: course names, or the raw id when
/// the course is missing from the catalog.
fn member_names(rule: &CategoryRule, index: &CatalogIndex) -> String {
    rule.course_ids
        .iter()
        .map(|id| index.display_name(id))
        .collect::<Vec<_>>()
        .join(", ")
}

/// The selected count must equal `rule.limit`.
pub fn check_exact(
    rule: &CategoryRule,
    index: &CatalogIndex,
    selection: &SelectionStore,
) -> CategoryOutcome {
    let selected = selected_in(rule, selection);
    let ok = selected == rule.limit;
    let message = if ok {
        Message::success(format!(
            "{} 선택 조건 충족! (정확히 {}개 선택됨)",
            rule.label, rule.limit
        ))
    } else {
        Message::error(format!(
            "{}({}) 중 정확히 {}개를 선택해야 합니다. (현재 {}개 선택)",
            rule.label,
            member_names(rule, index),
            rule.limit,
            selected
        ))
    };
    CategoryOutcome {
        ok,
        selected,
        message: Some(message),
    }
}

/// The selected count must not exceed `rule.limit`.
///
/// The success line is only emitted once at least one course (of any kind)
/// is selected.
pub fn check_max(
    rule: &CategoryRule,
    index: &CatalogIndex,
    selection: &SelectionStore,
) -> CategoryOutcome {
    let selected = selected_in(rule, selection);
    let ok = selected <= rule.limit;
    let message = if !ok {
        Some(Message::error(format!(
            "지정된 {}({}) 중 {}개 이하로 선택해야 합니다. (현재 {}개 선택)",
            rule.label,
            member_names(rule, index),
            rule.limit,
            selected
        )))
    } else if !selection.is_empty() {
        Some(Message::success(format!(
            "지정 {} 선택 조건 충족! (최대 {}개, 현재 {}개)",
            rule.label, rule.limit, selected
        )))
    } else {
        None
    };
    CategoryOutcome {
        ok,
        selected,
        message,
    }
}
