//! Integration tests for catalog indexing.

use enroll_catalog::CatalogIndex;
use enroll_model::{Course, SelectionStore, Term};

fn course(id: &str, name: &str, year: u8, semester: u8, group: &str, quota: u32) -> Course {
    Course {
        id: id.to_string(),
        name: name.to_string(),
        year,
        semester,
        group: group.to_string(),
        group_quota: Some(quota),
        hours: 3,
        mandatory: group == "학교지정",
    }
}

fn sample() -> Vec<Course> {
    vec![
        course("c1", "통합사회", 2, 1, "학교지정", 0),
        course("c2", "물리", 2, 1, "선택10", 1),
        course("c3", "화학", 2, 1, "선택2", 2),
        course("c4", "생명", 2, 1, "선택2", 2),
        course("c5", "지구", 2, 1, "선택2", 2),
        course("c6", "문학", 3, 2, "국어", 1),
        course("c7", "고전", 1, 1, "국어", 1),
    ]
}

#[test]
fn test_partitions_by_term_and_group() {
    let index = CatalogIndex::build(sample());

    let y2s1 = index.term(Term::Y2S1);
    assert_eq!(y2s1.courses.len(), 5);
    assert_eq!(y2s1.groups.len(), 3);
    assert!(index.term(Term::Y2S2).is_empty());
    assert_eq!(index.term(Term::Y3S2).courses.len(), 1);

    let mandatory = y2s1.group("학교지정").unwrap();
    assert!(mandatory.is_mandatory);
    assert_eq!(mandatory.quota, 0);

    let science = y2s1.group("선택2").unwrap();
    assert_eq!(science.quota, 2);
    assert_eq!(science.courses.len(), 3);
}

#[test]
fn test_out_of_range_term_is_reported_and_excluded() {
    let index = CatalogIndex::build(sample());

    assert_eq!(index.warnings().len(), 1);
    assert_eq!(index.warnings()[0].course_id.as_deref(), Some("c7"));
    assert!(index.terms().all(|t| t.courses.iter().all(|c| c.id != "c7")));
    // Still resolvable by id for name lookups.
    assert_eq!(index.display_name("c7"), "고전");
    assert_eq!(index.display_name("nope"), "nope");
}

#[test]
fn test_sorted_groups_put_mandatory_first_then_natural_order() {
    let index = CatalogIndex::build(sample());
    let labels: Vec<&str> = index
        .term(Term::Y2S1)
        .sorted_groups()
        .into_iter()
        .map(|g| g.label.as_str())
        .collect();
    assert_eq!(labels, vec!["학교지정", "선택2", "선택10"]);
}

#[test]
fn test_group_legend() {
    let index = CatalogIndex::build(sample());
    let y2s1 = index.term(Term::Y2S1);
    assert_eq!(y2s1.group("선택2").unwrap().legend(), "선택2 ( 2개 선택 )");
    assert_eq!(y2s1.group("학교지정").unwrap().legend(), "학교지정");
}

#[test]
fn test_empty_catalog_builds() {
    let index = CatalogIndex::build(Vec::new());
    assert!(index.is_empty());
    assert!(Term::ALL.iter().all(|&t| index.term(t).is_empty()));
}

#[test]
fn test_mandatory_seed_only_for_new_sessions() {
    let index = CatalogIndex::build(sample());

    assert_eq!(index.auto_select_seed(false), vec!["c1"]);
    assert!(index.auto_select_seed(true).is_empty());

    let mut fresh = SelectionStore::new();
    assert_eq!(index.seed_selection(&mut fresh, false), 1);
    assert!(fresh.contains("c1"));

    let mut restored = SelectionStore::new();
    restored.add("c2");
    assert_eq!(index.seed_selection(&mut restored, true), 0);
    assert!(!restored.contains("c1"));
}

#[test]
fn test_selected_hours_and_counts() {
    let index = CatalogIndex::build(sample());
    let mut selection = SelectionStore::new();
    selection.add("c1");
    selection.add("c3");
    selection.add("c6");

    let y2s1 = index.term(Term::Y2S1);
    assert_eq!(y2s1.selected_hours(&selection), 6);
    assert_eq!(y2s1.group("선택2").unwrap().selected_count(&selection), 1);
}

#[test]
fn test_selected_hours_saturate() {
    let mut huge = course("h1", "대형", 2, 2, "선택9", 2);
    huge.hours = u32::MAX;
    let mut other = course("h2", "대형2", 2, 2, "선택9", 2);
    other.hours = u32::MAX;
    let index = CatalogIndex::build(vec![huge, other]);
    let mut selection = SelectionStore::new();
    selection.add("h1");
    selection.add("h2");

    assert_eq!(index.term(Term::Y2S2).selected_hours(&selection), u32::MAX);
}
