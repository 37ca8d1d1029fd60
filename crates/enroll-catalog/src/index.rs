//! Catalog index: courses partitioned by term, then by group.

use std::collections::{BTreeMap, HashMap};

use enroll_model::{Course, MANDATORY_GROUP_NAME, SelectionStore, Term};
use tracing::{debug, warn};

use crate::loader::CatalogWarning;
use crate::order::natural_cmp;

/// Courses of one term sharing a group label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseGroup {
    pub label: String,
    pub is_mandatory: bool,
    /// Required selection count; always 0 for the mandatory group.
    pub quota: u32,
    /// Members in catalog order.
    pub courses: Vec<Course>,
}

impl CourseGroup {
    /// Fieldset legend, e.g. `선택A ( 2개 선택 )`.
    pub fn legend(&self) -> String {
        if !self.is_mandatory && self.quota > 0 {
            format!("{} ( {}개 선택 )", self.label, self.quota)
        } else {
            self.label.clone()
        }
    }

    /// Members ordered by name for display.
    pub fn sorted_courses(&self) -> Vec<&Course> {
        let mut courses: Vec<&Course> = self.courses.iter().collect();
        courses.sort_by(|a, b| a.name.cmp(&b.name));
        courses
    }

    /// Number of members present in the selection.
    pub fn selected_count(&self, selection: &SelectionStore) -> u32 {
        self.courses
            .iter()
            .filter(|course| selection.contains(&course.id))
            .count() as u32
    }
}

/// All courses of one term and their groups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermCatalog {
    pub term: Term,
    /// Members in catalog order.
    pub courses: Vec<Course>,
    /// Groups in order of first appearance in the catalog.
    pub groups: Vec<CourseGroup>,
}

impl TermCatalog {
    fn new(term: Term) -> Self {
        Self {
            term,
            courses: Vec::new(),
            groups: Vec::new(),
        }
    }

    fn push(&mut self, course: Course, mandatory_group: &str) {
        match self.groups.iter_mut().find(|g| g.label == course.group) {
            Some(group) => group.courses.push(course.clone()),
            None => {
                let is_mandatory = course.group == mandatory_group;
                self.groups.push(CourseGroup {
                    label: course.group.clone(),
                    is_mandatory,
                    quota: if is_mandatory {
                        0
                    } else {
                        course.group_quota.unwrap_or_default()
                    },
                    courses: vec![course.clone()],
                });
            }
        }
        self.courses.push(course);
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    pub fn group(&self, label: &str) -> Option<&CourseGroup> {
        self.groups.iter().find(|group| group.label == label)
    }

    /// Groups for display: mandatory first, then natural label order.
    pub fn sorted_groups(&self) -> Vec<&CourseGroup> {
        let mut groups: Vec<&CourseGroup> = self.groups.iter().collect();
        groups.sort_by(|a, b| {
            b.is_mandatory
                .cmp(&a.is_mandatory)
                .then_with(|| natural_cmp(&a.label, &b.label))
        });
        groups
    }

    /// Sum of hours over the selected members of this term.
    pub fn selected_hours(&self, selection: &SelectionStore) -> u32 {
        self.courses
            .iter()
            .filter(|course| selection.contains(&course.id))
            .map(|course| course.hours)
            .fold(0, u32::saturating_add)
    }
}

/// Read-only lookup structure built once from the flat course list.
#[derive(Debug, Clone)]
pub struct CatalogIndex {
    courses: Vec<Course>,
    by_id: HashMap<String, usize>,
    terms: BTreeMap<Term, TermCatalog>,
    mandatory_group: String,
    warnings: Vec<CatalogWarning>,
}

impl CatalogIndex {
    /// Build the index using the standard mandatory group label.
    pub fn build(courses: Vec<Course>) -> Self {
        Self::build_with_mandatory_group(courses, MANDATORY_GROUP_NAME)
    }

    /// Build the index with a custom mandatory group label.
    ///
    /// Courses outside the four terms are kept for id/name lookup but
    /// excluded from every bucket; each one is recorded as a warning.
    /// Courses of a non-mandatory group without a `groupQuota` are dropped
    /// entirely, also with a warning.
    pub fn build_with_mandatory_group(courses: Vec<Course>, mandatory_group: &str) -> Self {
        let mut terms: BTreeMap<Term, TermCatalog> = Term::ALL
            .into_iter()
            .map(|term| (term, TermCatalog::new(term)))
            .collect();
        let mut by_id = HashMap::new();
        let mut kept = Vec::with_capacity(courses.len());
        let mut warnings = Vec::new();

        for course in courses {
            if by_id.contains_key(&course.id) {
                warn!(course_id = %course.id, "duplicate course id ignored");
                warnings.push(CatalogWarning {
                    row: None,
                    course_id: Some(course.id.clone()),
                    reason: "duplicate course id".to_string(),
                });
                continue;
            }
            if course.group != mandatory_group && course.group_quota.is_none() {
                warn!(course_id = %course.id, group = %course.group, "course has no group quota");
                warnings.push(CatalogWarning {
                    row: None,
                    course_id: Some(course.id.clone()),
                    reason: format!("group quota missing for group {}", course.group),
                });
                continue;
            }
            match course.term().and_then(|term| terms.get_mut(&term)) {
                Some(bucket) => bucket.push(course.clone(), mandatory_group),
                None => {
                    warn!(
                        course_id = %course.id,
                        year = course.year,
                        semester = course.semester,
                        "course has invalid year/semester"
                    );
                    warnings.push(CatalogWarning {
                        row: None,
                        course_id: Some(course.id.clone()),
                        reason: format!(
                            "invalid year/semester: Y{}S{}",
                            course.year, course.semester
                        ),
                    });
                }
            }
            by_id.insert(course.id.clone(), kept.len());
            kept.push(course);
        }

        for bucket in terms.values() {
            debug!(
                term = %bucket.term,
                courses = bucket.courses.len(),
                groups = bucket.groups.len(),
                "indexed term"
            );
        }

        Self {
            courses: kept,
            by_id,
            terms,
            mandatory_group: mandatory_group.to_string(),
            warnings,
        }
    }

    /// Every catalog course, including ones outside the four terms.
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn course(&self, id: &str) -> Option<&Course> {
        self.by_id.get(id).map(|&idx| &self.courses[idx])
    }

    /// Display name for a course id, falling back to the id itself.
    pub fn display_name<'a>(&'a self, id: &'a str) -> &'a str {
        self.course(id).map_or(id, |course| course.name.as_str())
    }

    pub fn term(&self, term: Term) -> &TermCatalog {
        // Every term is inserted in `build_with_mandatory_group`.
        &self.terms[&term]
    }

    pub fn terms(&self) -> impl Iterator<Item = &TermCatalog> {
        self.terms.values()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    pub fn mandatory_group(&self) -> &str {
        &self.mandatory_group
    }

    /// Problems found while indexing (out-of-range terms, duplicate ids).
    pub fn warnings(&self) -> &[CatalogWarning] {
        &self.warnings
    }

    /// Ids of bucketed courses flagged `mandatory`, in term then catalog order.
    pub fn mandatory_course_ids(&self) -> Vec<&str> {
        self.terms
            .values()
            .flat_map(|bucket| bucket.courses.iter())
            .filter(|course| course.mandatory)
            .map(|course| course.id.as_str())
            .collect()
    }

    /// Ids to auto-select when a session starts.
    ///
    /// Mandatory courses only seed a brand-new session: when a prior
    /// persisted selection exists and is non-empty, nothing is returned.
    pub fn auto_select_seed(&self, has_prior_selection: bool) -> Vec<&str> {
        if has_prior_selection {
            return Vec::new();
        }
        self.mandatory_course_ids()
    }

    /// Apply [`CatalogIndex::auto_select_seed`] to a selection and return
    /// how many ids were newly added.
    pub fn seed_selection(&self, selection: &mut SelectionStore, has_prior_selection: bool) -> usize {
        self.auto_select_seed(has_prior_selection)
            .into_iter()
            .filter(|id| selection.add(id))
            .count()
    }
}
