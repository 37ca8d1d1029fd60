//! Selected courses per term, in display order.

use std::cmp::Ordering;

use enroll_catalog::{CatalogIndex, TermCatalog, natural_cmp};
use enroll_model::{Course, SelectionStore, Term};

/// The selected courses of one term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermSelection<'a> {
    pub term: Term,
    pub courses: Vec<&'a Course>,
    pub total_hours: u32,
}

impl TermSelection<'_> {
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}

/// Selected courses for every term, in [`Term::ALL`] order.
///
/// Within a term: mandatory group first, then group label in natural order,
/// then course name.
pub fn selected_by_term<'a>(
    index: &'a CatalogIndex,
    selection: &SelectionStore,
) -> Vec<TermSelection<'a>> {
    Term::ALL
        .into_iter()
        .map(|term| {
            let bucket = index.term(term);
            let mut courses: Vec<&Course> = bucket
                .courses
                .iter()
                .filter(|course| selection.contains(&course.id))
                .collect();
            courses.sort_by(|a, b| display_order(bucket, a, b));
            let total_hours = courses
                .iter()
                .map(|course| course.hours)
                .fold(0, u32::saturating_add);
            TermSelection {
                term,
                courses,
                total_hours,
            }
        })
        .collect()
}

fn display_order(bucket: &TermCatalog, a: &Course, b: &Course) -> Ordering {
    let mandatory = |course: &Course| {
        bucket
            .group(&course.group)
            .is_some_and(|group| group.is_mandatory)
    };
    mandatory(b)
        .cmp(&mandatory(a))
        .then_with(|| natural_cmp(&a.group, &b.group))
        .then_with(|| a.name.cmp(&b.name))
}
