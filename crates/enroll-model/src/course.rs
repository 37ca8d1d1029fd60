use serde::{Deserialize, Serialize};

use crate::term::Term;

/// A single catalog offering.
///
/// Identity is `id`; the same course `name` may be offered in several terms
/// under different ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: String,
    pub name: String,
    /// Raw year from the catalog. Values outside 2..=3 are kept so they can be
    /// reported, but such courses never belong to a bucket.
    pub year: u8,
    pub semester: u8,
    pub group: String,
    /// Number of courses to pick from `group`. Required for every group
    /// except the mandatory one, where it is ignored.
    #[serde(default)]
    pub group_quota: Option<u32>,
    pub hours: u32,
    #[serde(default)]
    pub mandatory: bool,
}

impl Course {
    /// The bucket this course belongs to, if its year/semester is in range.
    pub fn term(&self) -> Option<Term> {
        Term::new(self.year, self.semester)
    }

    /// Label shown next to a selectable course, e.g. `문학 (4학점)`.
    pub fn display_label(&self) -> String {
        format!("{} ({}학점)", self.name, self.hours)
    }

    /// Offering label used in duplicate-name messages, e.g. `2학년 1학기`.
    pub fn offering_label(&self) -> String {
        format!("{}학년 {}학기", self.year, self.semester)
    }
}
