//! Summary document model.
//!
//! The document is laid out as pages of sections. Year 2 terms go on the
//! first page under the header block; year 3 always starts a new page.

use enroll_catalog::CatalogIndex;
use enroll_model::{SelectionStore, Term};
use serde::Serialize;

use crate::selected::selected_by_term;

pub const TITLE: &str = "수강신청 내역서";
pub const SIGN_OFF_LINE: &str = "담임교사 확인: _______________";
/// Placeholder for a blank identity field.
pub const NOT_ENTERED: &str = "미입력";

/// Student name and id number as entered; blank values count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StudentIdentity {
    name: String,
    id_number: String,
}

impl StudentIdentity {
    pub fn new(name: &str, id_number: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            id_number: id_number.trim().to_string(),
        }
    }

    pub fn from_selection(selection: &SelectionStore) -> Self {
        Self::new(selection.student_name(), selection.student_id_number())
    }

    pub fn name(&self) -> Option<&str> {
        Some(self.name.as_str()).filter(|name| !name.is_empty())
    }

    pub fn id_number(&self) -> Option<&str> {
        Some(self.id_number.as_str()).filter(|id| !id.is_empty())
    }

    /// `학생 이름: {name}` with `  (학번: {id})` appended when an id exists.
    pub fn line(&self) -> String {
        let mut line = format!("학생 이름: {}", self.name().unwrap_or(NOT_ENTERED));
        if let Some(id) = self.id_number() {
            line.push_str(&format!("  (학번: {id})"));
        }
        line
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionRow {
    pub course_id: String,
    pub name: String,
    pub hours: u32,
}

/// Selected courses of one term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub term: Term,
    pub rows: Vec<SectionRow>,
    pub total_hours: u32,
}

impl Section {
    /// `{y}학년 {s}학기 선택과목`
    pub fn heading(&self) -> String {
        format!("{} 선택과목", self.term.label())
    }

    /// `{y}학년 {s}학기 총 학점:`
    pub fn total_label(&self) -> String {
        format!("{} 총 학점:", self.term.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page {
    pub year: u8,
    /// Terms of this year with at least one selected course.
    pub sections: Vec<Section>,
}

/// Last line of the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Closing {
    GrandTotal(u32),
    NothingSelected,
}

impl Closing {
    pub fn text(&self) -> String {
        match self {
            Self::GrandTotal(hours) => format!("전체 총 선택 학점: {hours}"),
            Self::NothingSelected => "선택된 과목이 없습니다.".to_string(),
        }
    }
}

/// The registration summary, independent of output format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryDocument {
    pub title: String,
    pub student: StudentIdentity,
    pub pages: Vec<Page>,
    pub closing: Closing,
}

impl SummaryDocument {
    pub fn build(index: &CatalogIndex, selection: &SelectionStore) -> Self {
        let terms = selected_by_term(index, selection);
        let pages: Vec<Page> = [2u8, 3]
            .into_iter()
            .map(|year| Page {
                year,
                sections: terms
                    .iter()
                    .filter(|ts| ts.term.year() == year && !ts.is_empty())
                    .map(|ts| Section {
                        term: ts.term,
                        rows: ts
                            .courses
                            .iter()
                            .map(|course| SectionRow {
                                course_id: course.id.clone(),
                                name: course.name.clone(),
                                hours: course.hours,
                            })
                            .collect(),
                        total_hours: ts.total_hours,
                    })
                    .collect(),
            })
            .collect();

        let grand_total: u32 = pages
            .iter()
            .flat_map(|page| &page.sections)
            .map(|section| section.total_hours)
            .fold(0, u32::saturating_add);
        let closing = if grand_total > 0 {
            Closing::GrandTotal(grand_total)
        } else {
            Closing::NothingSelected
        };

        Self {
            title: TITLE.to_string(),
            student: StudentIdentity::from_selection(selection),
            pages,
            closing,
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.pages.iter().flat_map(|page| page.sections.iter())
    }
}
