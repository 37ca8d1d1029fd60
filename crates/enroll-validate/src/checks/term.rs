//! Per-term checks: group quotas and total hours.

use enroll_catalog::TermCatalog;
use enroll_model::{Message, SelectionStore, TermReport};

/// Evaluate quota and hour rules for one term.
///
/// A term without catalog courses is vacuously valid and only carries an
/// informational message.
pub fn check(bucket: &TermCatalog, selection: &SelectionStore, required_hours: u32) -> TermReport {
    let label = bucket.term.label();
    if bucket.is_empty() {
        return TermReport {
            term: bucket.term,
            is_valid: true,
            messages: vec![Message::info(format!("{label} 과목 정보가 없습니다."))],
            total_hours: 0,
            required_hours,
        };
    }

    let mut messages = Vec::new();
    let mut is_valid = true;

    for group in bucket.groups.iter().filter(|group| !group.is_mandatory) {
        let selected = group.selected_count(selection);
        if selected == group.quota {
            messages.push(Message::success(format!(
                "\"{}\" 그룹 선택 완료! ({}/{}개)",
                group.label, selected, group.quota
            )));
        } else {
            is_valid = false;
            messages.push(Message::error(format!(
                "\"{}\" 그룹에서 {}개의 과목을 선택해야 합니다. (현재 {}개 선택)",
                group.label, group.quota, selected
            )));
        }
    }

    let total_hours = bucket.selected_hours(selection);
    if total_hours == required_hours {
        messages.push(Message::success(format!(
            "{label} 총 학점 조건 충족! ({total_hours}/{required_hours}학점)"
        )));
    } else {
        is_valid = false;
        messages.push(Message::error(format!(
            "{label} 총 학점은 정확히 {required_hours}학점이어야 합니다. (현재 {total_hours}학점)"
        )));
    }

    let summary = if is_valid {
        Message::success(format!("{label} 선택 조건이 모두 충족되었습니다."))
    } else {
        Message::error(format!("{label} 일부 조건이 충족되지 않았습니다."))
    };
    messages.insert(0, summary);

    TermReport {
        term: bucket.term,
        is_valid,
        messages,
        total_hours,
        required_hours,
    }
}
