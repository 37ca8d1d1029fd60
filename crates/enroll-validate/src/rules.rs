//! Rule constants and their JSON configuration.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use enroll_model::{MANDATORY_GROUP_NAME, Term};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Required total hours for any term without an explicit entry.
pub const DEFAULT_REQUIRED_HOURS: u32 = 29;

/// Which rules must pass before export is allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GatePolicy {
    /// Term checks and the duplicate-name rule gate export. Category rules
    /// are reported but do not block.
    #[default]
    Reference,
    /// Category rules block export as well.
    IncludeCategoryRules,
}

impl GatePolicy {
    pub fn includes_category_rules(&self) -> bool {
        matches!(self, Self::IncludeCategoryRules)
    }
}

/// A fixed set of course ids with a count bound.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRule {
    /// Category name used in messages, e.g. `미술/음악 관련 과목`.
    pub label: String,
    pub course_ids: Vec<String>,
    /// Exact target or upper bound, depending on which rule slot holds it.
    pub limit: usize,
}

impl CategoryRule {
    pub fn new(label: &str, course_ids: &[&str], limit: usize) -> Self {
        Self {
            label: label.to_string(),
            course_ids: course_ids.iter().map(ToString::to_string).collect(),
            limit,
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.course_ids.iter().any(|member| member == id)
    }
}

/// Every constant the engine evaluates against.
///
/// `RuleSet::default()` is the standard registration policy. A JSON file can
/// override any subset of fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RuleSet {
    pub mandatory_group: String,
    pub required_hours: BTreeMap<Term, u32>,
    /// Selected count within the category must equal `limit`.
    pub exact_category: CategoryRule,
    /// Selected count within the category must not exceed `limit`.
    pub max_category: CategoryRule,
    pub gate: GatePolicy,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            mandatory_group: MANDATORY_GROUP_NAME.to_string(),
            required_hours: Term::ALL
                .into_iter()
                .map(|term| (term, DEFAULT_REQUIRED_HOURS))
                .collect(),
            exact_category: CategoryRule::new(
                "미술/음악 관련 과목",
                &["c19", "c20", "c40", "c41", "c55", "c56", "c82", "c83"],
                2,
            ),
            max_category: CategoryRule::new(
                "국영수 관련 과목",
                &["c34", "c57", "c58", "c59", "c60", "c84", "c85"],
                3,
            ),
            gate: GatePolicy::Reference,
        }
    }
}

impl RuleSet {
    /// Required total hours for a term.
    pub fn required_hours_for(&self, term: Term) -> u32 {
        self.required_hours
            .get(&term)
            .copied()
            .unwrap_or(DEFAULT_REQUIRED_HOURS)
    }

    #[must_use]
    pub fn with_gate(mut self, gate: GatePolicy) -> Self {
        self.gate = gate;
        self
    }

    pub fn from_json_str(text: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Load a rule override file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| RuleSetError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text).map_err(|source| RuleSetError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[derive(Debug, Error)]
pub enum RuleSetError {
    #[error("failed to read rules file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid rules file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, RuleSetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_registration_policy() {
        let rules = RuleSet::default();
        assert_eq!(rules.mandatory_group, "학교지정");
        for term in Term::ALL {
            assert_eq!(rules.required_hours_for(term), 29);
        }
        assert_eq!(rules.exact_category.course_ids.len(), 8);
        assert_eq!(rules.exact_category.limit, 2);
        assert_eq!(rules.max_category.course_ids.len(), 7);
        assert_eq!(rules.max_category.limit, 3);
        assert_eq!(rules.gate, GatePolicy::Reference);
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let rules = RuleSet::from_json_str(
            r#"{"requiredHours": {"Y3S2": 30}, "gate": "include_category_rules"}"#,
        )
        .unwrap();
        assert_eq!(rules.required_hours_for(Term::Y3S2), 30);
        assert_eq!(rules.required_hours_for(Term::Y2S1), 29);
        assert_eq!(rules.gate, GatePolicy::IncludeCategoryRules);
        assert_eq!(rules.exact_category.limit, 2);
    }

    #[test]
    fn rejects_unknown_term_key() {
        assert!(RuleSet::from_json_str(r#"{"requiredHours": {"Y1S1": 30}}"#).is_err());
    }
}
