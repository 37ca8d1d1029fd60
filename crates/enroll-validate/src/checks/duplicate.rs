//! Cross-term duplicate-name rule.
//!
//! The same course name may not be selected in both a first-semester and a
//! second-semester offering. Year is ignored: `2학년 1학기` and `3학년 1학기`
//! do not conflict, `2학년 1학기` and `3학년 2학기` do.

use std::collections::{BTreeSet, HashMap};

use enroll_catalog::CatalogIndex;
use enroll_model::{Course, SelectionStore};

/// Return the message for the first conflicting course name, if any.
///
/// Names are visited in the order they are first reached while walking the
/// selection; only that first conflict is reported. Selected ids that are not
/// in the catalog are ignored.
pub fn check(index: &CatalogIndex, selection: &SelectionStore) -> Option<String> {
    let selected: Vec<&Course> = selection.iter().filter_map(|id| index.course(id)).collect();

    let mut name_order: Vec<&str> = Vec::new();
    let mut semesters: HashMap<&str, BTreeSet<u8>> = HashMap::new();
    for course in &selected {
        let entry = semesters.entry(course.name.as_str()).or_insert_with(|| {
            name_order.push(course.name.as_str());
            BTreeSet::new()
        });
        entry.insert(course.semester);
    }

    let conflict = name_order
        .into_iter()
        .find(|name| semesters.get(name).is_some_and(|set| set.len() > 1))?;

    let offerings = selected
        .iter()
        .filter(|course| course.name == conflict)
        .map(|course| course.offering_label())
        .collect::<Vec<_>>()
        .join(", ");
    Some(format!(
        "과목 \"{conflict}\"은(는) 여러 학기에 중복하여 선택할 수 없습니다. (선택된 시점: {offerings})"
    ))
}
