use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// One (year, semester) bucket of the registration catalog.
///
/// Only years 2 and 3 and semesters 1 and 2 exist; anything else is rejected
/// at construction, so a `Term` value is always one of [`Term::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Term {
    year: u8,
    semester: u8,
}

impl Term {
    pub const Y2S1: Term = Term {
        year: 2,
        semester: 1,
    };
    pub const Y2S2: Term = Term {
        year: 2,
        semester: 2,
    };
    pub const Y3S1: Term = Term {
        year: 3,
        semester: 1,
    };
    pub const Y3S2: Term = Term {
        year: 3,
        semester: 2,
    };

    /// Every bucket, in evaluation and display order.
    pub const ALL: [Term; 4] = [Term::Y2S1, Term::Y2S2, Term::Y3S1, Term::Y3S2];

    /// Build a term, returning `None` outside years 2-3 / semesters 1-2.
    pub fn new(year: u8, semester: u8) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|term| term.year == year && term.semester == semester)
    }

    pub fn year(&self) -> u8 {
        self.year
    }

    pub fn semester(&self) -> u8 {
        self.semester
    }

    /// Compact key used in configuration files (e.g. `Y2S1`).
    pub fn key(&self) -> String {
        format!("Y{}S{}", self.year, self.semester)
    }

    /// Display label used in every user-facing message (e.g. `2학년 1학기`).
    pub fn label(&self) -> String {
        format!("{}학년 {}학기", self.year, self.semester)
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Y{}S{}", self.year, self.semester)
    }
}

impl FromStr for Term {
    type Err = ModelError;

    /// Parse `Y2S1`-style keys (case-insensitive, surrounding whitespace ignored).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ModelError::InvalidTerm {
            value: s.to_string(),
        };
        let normalized = s.trim().to_ascii_uppercase();
        let rest = normalized.strip_prefix('Y').ok_or_else(invalid)?;
        let (year, semester) = rest.split_once('S').ok_or_else(invalid)?;
        let year: u8 = year.parse().map_err(|_| invalid())?;
        let semester: u8 = semester.parse().map_err(|_| invalid())?;
        Term::new(year, semester).ok_or_else(invalid)
    }
}

impl TryFrom<String> for Term {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Term> for String {
    fn from(term: Term) -> Self {
        term.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_out_of_domain_terms() {
        assert!(Term::new(1, 1).is_none());
        assert!(Term::new(2, 3).is_none());
        assert_eq!(Term::new(3, 2), Some(Term::Y3S2));
    }

    #[test]
    fn parses_keys() {
        assert_eq!("Y2S1".parse::<Term>().unwrap(), Term::Y2S1);
        assert_eq!(" y3s2 ".parse::<Term>().unwrap(), Term::Y3S2);
        assert!("Y4S1".parse::<Term>().is_err());
        assert!("2-1".parse::<Term>().is_err());
    }

    #[test]
    fn label_uses_year_and_semester() {
        assert_eq!(Term::Y3S1.label(), "3학년 1학기");
        assert_eq!(Term::Y3S1.key(), "Y3S1");
    }
}
