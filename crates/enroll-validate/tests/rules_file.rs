use std::fs;

use enroll_model::Term;
use enroll_validate::{GatePolicy, RuleSet, RuleSetError};
use tempfile::tempdir;

#[test]
fn test_rules_file_overrides_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("rules.json");
    fs::write(
        &path,
        r#"{
            "requiredHours": {"Y2S1": 28},
            "maxCategory": {"label": "수학 관련 과목", "courseIds": ["c34"], "limit": 1},
            "gate": "include_category_rules"
        }"#,
    )
    .unwrap();

    let rules = RuleSet::from_json_file(&path).unwrap();
    assert_eq!(rules.required_hours_for(Term::Y2S1), 28);
    assert_eq!(rules.required_hours_for(Term::Y3S2), 29);
    assert_eq!(rules.max_category.label, "수학 관련 과목");
    assert_eq!(rules.max_category.limit, 1);
    assert_eq!(rules.exact_category, RuleSet::default().exact_category);
    assert_eq!(rules.gate, GatePolicy::IncludeCategoryRules);
}

#[test]
fn test_missing_rules_file_is_read_error() {
    let dir = tempdir().unwrap();
    let result = RuleSet::from_json_file(&dir.path().join("absent.json"));
    assert!(matches!(result, Err(RuleSetError::Read { .. })));
}

#[test]
fn test_malformed_rules_file_is_parse_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("rules.json");
    fs::write(&path, "{ not json").unwrap();
    let error = RuleSet::from_json_file(&path).unwrap_err();
    assert!(matches!(error, RuleSetError::Parse { .. }));
    assert!(error.to_string().contains("rules.json"));
}
