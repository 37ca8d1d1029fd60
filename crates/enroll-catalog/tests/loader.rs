//! Integration tests for catalog loading.

use std::fs;

use enroll_catalog::{
    CatalogError, CatalogIndex, load_catalog, parse_catalog_csv, parse_catalog_json,
};
use enroll_model::Term;
use tempfile::tempdir;

#[test]
fn test_json_skips_malformed_rows() {
    let json = r#"[
        {"id": "c1", "name": "문학", "year": 2, "semester": 1, "group": "국어", "groupQuota": 1, "hours": 4, "mandatory": false},
        {"id": "c2", "name": "화법", "year": 2, "semester": 1, "group": "국어", "groupQuota": 1},
        {"id": "c3", "name": "영어", "year": 2, "semester": 1, "group": "영어", "groupQuota": 1, "hours": 0},
        {"id": "c1", "name": "문학 중복", "year": 2, "semester": 2, "group": "국어", "groupQuota": 1, "hours": 4},
        "not an object",
        {"id": "c4", "name": "체육", "year": 2, "semester": 1, "group": "학교지정", "hours": 2, "mandatory": true}
    ]"#;

    let loaded = parse_catalog_json(json).unwrap();

    let ids: Vec<&str> = loaded.courses.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["c1", "c4"]);
    assert_eq!(loaded.warnings.len(), 4);
    assert_eq!(loaded.warnings[0].row, Some(1));
    assert_eq!(loaded.warnings[0].course_id.as_deref(), Some("c2"));
    assert!(loaded.warnings[0].reason.contains("hours"));
    assert_eq!(loaded.warnings[1].reason, "hours must be positive");
    assert_eq!(loaded.warnings[2].reason, "duplicate course id");
    assert_eq!(loaded.warnings[3].course_id, None);
}

#[test]
fn test_elective_without_quota_is_dropped() {
    let json = r#"[
        {"id": "m1", "name": "국어", "year": 2, "semester": 1, "group": "학교지정", "hours": 29, "mandatory": true},
        {"id": "e1", "name": "미술", "year": 2, "semester": 1, "group": "선택A", "hours": 2}
    ]"#;

    let loaded = parse_catalog_json(json).unwrap();
    assert_eq!(loaded.courses.len(), 2);
    let index = CatalogIndex::build(loaded.courses);

    assert!(index.course("e1").is_none());
    assert!(index.term(Term::Y2S1).group("선택A").is_none());
    assert_eq!(index.warnings().len(), 1);
    assert_eq!(index.warnings()[0].course_id.as_deref(), Some("e1"));
    assert!(index.warnings()[0].reason.contains("group quota"));
    // The mandatory group needs no quota.
    assert!(index.course("m1").is_some());
}

#[test]
fn test_csv_empty_quota_reads_as_missing() {
    let csv = "\
id,name,year,semester,group,groupQuota,hours,mandatory
c1,문학,2,1,국어,,4,false
c2,체육,2,1,학교지정,,2,true
";

    let loaded = parse_catalog_csv(csv.as_bytes()).unwrap();
    assert_eq!(loaded.courses[0].group_quota, None);

    let index = CatalogIndex::build(loaded.courses);
    assert_eq!(index.courses().len(), 1);
    assert_eq!(index.warnings()[0].course_id.as_deref(), Some("c1"));
}

#[test]
fn test_json_empty_array_is_empty_catalog() {
    let loaded = parse_catalog_json("[]").unwrap();
    assert!(loaded.courses.is_empty());
    assert!(loaded.warnings.is_empty());
}

#[test]
fn test_json_syntax_error() {
    assert!(matches!(
        parse_catalog_json("[{"),
        Err(CatalogError::Json { .. })
    ));
}

#[test]
fn test_csv_catalog() {
    let csv = "\
id,name,year,semester,group,groupQuota,hours,mandatory
c1,문학,2,1,국어,1,4,false
c2,체육,2,1,학교지정,0,2,true
c3,broken,2,x,국어,1,4,false
";

    let loaded = parse_catalog_csv(csv.as_bytes()).unwrap();

    assert_eq!(loaded.courses.len(), 2);
    assert!(loaded.courses[1].mandatory);
    assert_eq!(loaded.warnings.len(), 1);
    assert_eq!(loaded.warnings[0].row, Some(2));
}

#[test]
fn test_load_catalog_by_extension() {
    let dir = tempdir().unwrap();
    let json_path = dir.path().join("courses.json");
    fs::write(
        &json_path,
        r#"[{"id":"c1","name":"문학","year":3,"semester":2,"group":"국어","groupQuota":1,"hours":4}]"#,
    )
    .unwrap();

    let loaded = load_catalog(&json_path).unwrap();
    assert_eq!(loaded.courses.len(), 1);

    let other = dir.path().join("courses.xlsx");
    fs::write(&other, b"").unwrap();
    assert!(matches!(
        load_catalog(&other),
        Err(CatalogError::UnsupportedFormat { .. })
    ));

    let missing = dir.path().join("missing.json");
    assert!(matches!(
        load_catalog(&missing),
        Err(CatalogError::FileRead { .. })
    ));
}
