//! Integration tests for the registration rule engine.

use enroll_catalog::CatalogIndex;
use enroll_model::{Course, SelectionStore, Severity, Term};
use enroll_validate::{CategoryRule, GatePolicy, RuleSet, evaluate, gate_export};

fn course(term: Term, code: &str, group: &str, quota: u32, hours: u32) -> Course {
    Course {
        id: format!("{}-{}", term.key(), code),
        name: format!("{} 과목{}", term.key(), code),
        year: term.year(),
        semester: term.semester(),
        group: group.to_string(),
        group_quota: Some(quota),
        hours,
        mandatory: group == "학교지정",
    }
}

/// Each term: two mandatory courses (9h) and two quota-2 groups of four 5h
/// courses, so a complete pick is exactly 29 hours.
fn catalog() -> Vec<Course> {
    let mut courses = Vec::new();
    for term in Term::ALL {
        courses.push(course(term, "M1", "학교지정", 0, 5));
        courses.push(course(term, "M2", "학교지정", 0, 4));
        for n in 1..=4 {
            courses.push(course(term, &format!("A{n}"), "선택A", 2, 5));
        }
        for n in 1..=4 {
            courses.push(course(term, &format!("B{n}"), "선택B", 2, 5));
        }
    }
    courses
}

fn rules() -> RuleSet {
    RuleSet {
        exact_category: CategoryRule::new(
            "미술/음악 관련 과목",
            &["Y2S1-A1", "Y2S2-A1", "Y3S1-A1", "Y3S2-A1"],
            2,
        ),
        max_category: CategoryRule::new(
            "국영수 관련 과목",
            &["Y2S1-B1", "Y2S2-B1", "Y3S1-B1", "Y3S2-B1"],
            3,
        ),
        ..RuleSet::default()
    }
}

fn select(ids: &[&str]) -> SelectionStore {
    let mut selection = SelectionStore::new();
    for id in ids {
        selection.add(id);
    }
    selection
}

fn valid_selection() -> SelectionStore {
    let mut selection = SelectionStore::new();
    let picks = [
        (Term::Y2S1, ["A1", "A2", "B1", "B2"]),
        (Term::Y2S2, ["A1", "A2", "B1", "B2"]),
        (Term::Y3S1, ["A3", "A4", "B1", "B2"]),
        (Term::Y3S2, ["A3", "A4", "B3", "B4"]),
    ];
    for (term, codes) in picks {
        selection.add(&format!("{}-M1", term.key()));
        selection.add(&format!("{}-M2", term.key()));
        for code in codes {
            selection.add(&format!("{}-{}", term.key(), code));
        }
    }
    selection
}

#[test]
fn test_valid_selection_enables_export() {
    let index = CatalogIndex::build(catalog());
    let report = evaluate(&index, &valid_selection(), &rules());

    assert!(report.terms.iter().all(|t| t.is_valid));
    assert!(report.terms.iter().all(|t| t.total_hours == 29));
    assert!(report.exact_category.ok);
    assert!(report.max_category.ok);
    assert!(report.overall_valid);
    assert!(report.export_enabled);
    assert_eq!(report.error_count(), 0);
    assert_eq!(
        report.overall_message.as_ref().map(|m| m.text.as_str()),
        Some("모든 학년/학기의 수강신청 조건이 충족되었습니다. PDF 다운로드가 가능합니다.")
    );
}

#[test]
fn test_term_messages_for_incomplete_group() {
    let index = CatalogIndex::build(catalog());
    let selection = select(&["Y2S1-M1", "Y2S1-M2", "Y2S1-A1", "Y2S1-A2", "Y2S1-B1"]);
    let report = evaluate(&index, &selection, &rules());

    let y2s1 = report.term(Term::Y2S1).unwrap();
    assert!(!y2s1.is_valid);
    assert_eq!(y2s1.total_hours, 24);
    let text = y2s1
        .messages
        .iter()
        .map(|m| format!("[{}] {}", m.severity.label(), m.text))
        .collect::<Vec<_>>()
        .join("\n");
    insta::assert_snapshot!(text, @r#"
    [Error] 2학년 1학기 일부 조건이 충족되지 않았습니다.
    [Success] "선택A" 그룹 선택 완료! (2/2개)
    [Error] "선택B" 그룹에서 2개의 과목을 선택해야 합니다. (현재 1개 선택)
    [Error] 2학년 1학기 총 학점은 정확히 29학점이어야 합니다. (현재 24학점)
    "#);
}

#[test]
fn test_quota_requires_equality_not_upper_bound() {
    let index = CatalogIndex::build(catalog());
    let mut selection = valid_selection();
    // Over-select group A in Y2S2: three picks against a quota of two.
    selection.add("Y2S2-A3");
    let report = evaluate(&index, &selection, &rules());

    let y2s2 = report.term(Term::Y2S2).unwrap();
    assert!(!y2s2.is_valid);
    assert!(y2s2.messages.iter().any(|m| {
        m.severity == Severity::Error && m.text == "\"선택A\" 그룹에서 2개의 과목을 선택해야 합니다. (현재 3개 선택)"
    }));
    assert!(!report.overall_valid);
    assert!(!report.export_enabled);
}

#[test]
fn test_overall_message_lists_failing_terms() {
    let index = CatalogIndex::build(catalog());
    let mut selection = valid_selection();
    selection.remove("Y2S2-B2");
    selection.remove("Y3S2-A3");
    let report = evaluate(&index, &selection, &rules());

    assert_eq!(report.failing_terms(), vec![Term::Y2S2, Term::Y3S2]);
    let overall = report.overall_message.unwrap();
    assert_eq!(overall.severity, Severity::Error);
    assert_eq!(
        overall.text,
        "2학년 2학기, 3학년 2학기 수강신청 조건이 충족되지 않았습니다. 각 학년/학기별 선택 내용을 확인해주세요."
    );
}

#[test]
fn test_empty_term_is_vacuously_valid() {
    let courses: Vec<Course> = catalog()
        .into_iter()
        .filter(|c| c.term() != Some(Term::Y3S1))
        .collect();
    let index = CatalogIndex::build(courses);
    let report = evaluate(&index, &valid_selection(), &rules());

    let y3s1 = report.term(Term::Y3S1).unwrap();
    assert!(y3s1.is_valid);
    assert_eq!(y3s1.total_hours, 0);
    assert_eq!(y3s1.messages.len(), 1);
    assert_eq!(y3s1.messages[0].severity, Severity::Info);
    assert_eq!(y3s1.messages[0].text, "3학년 1학기 과목 정보가 없습니다.");
    assert!(report.overall_valid);
}

#[test]
fn test_empty_catalog_and_selection() {
    let index = CatalogIndex::build(Vec::new());
    let report = evaluate(&index, &SelectionStore::new(), &RuleSet::default());

    assert!(report.terms.iter().all(|t| t.is_valid));
    assert!(report.overall_valid);
    // Exact category still fails with zero picks; it just does not gate export.
    assert!(!report.exact_category.ok);
    assert!(report.export_enabled);
    // No success line for the max rule while nothing is selected.
    assert!(report.max_category.ok);
    assert!(report.max_category.message.is_none());
    // Names fall back to raw ids when the catalog lacks the course.
    let exact = report.exact_category.message.unwrap();
    assert!(exact.text.starts_with("미술/음악 관련 과목(c19, c20, c40, c41, c55, c56, c82, c83)"));
    assert!(exact.text.ends_with("(현재 0개 선택)"));
}

#[test]
fn test_exact_category_one_over_target_is_error() {
    let index = CatalogIndex::build(catalog());
    let mut selection = valid_selection();
    selection.remove("Y3S1-A3");
    selection.add("Y3S1-A1");
    let report = evaluate(&index, &selection, &rules());

    assert!(report.terms.iter().all(|t| t.is_valid));
    assert!(!report.exact_category.ok);
    assert_eq!(report.exact_category.selected, 3);
    let message = report.exact_category.message.as_ref().unwrap();
    assert_eq!(message.severity, Severity::Error);
    assert_eq!(
        message.text,
        "미술/음악 관련 과목(Y2S1 과목A1, Y2S2 과목A1, Y3S1 과목A1, Y3S2 과목A1) 중 정확히 2개를 선택해야 합니다. (현재 3개 선택)"
    );
    // Reference gating reports the failure without blocking export.
    assert!(report.overall_valid);
    assert!(report.export_enabled);
    assert!(report.category_gate_gap());
}

#[test]
fn test_include_category_rules_gate_blocks_export() {
    let index = CatalogIndex::build(catalog());
    let mut selection = valid_selection();
    selection.remove("Y3S2-B3");
    selection.add("Y3S2-B1");
    let rules = rules().with_gate(GatePolicy::IncludeCategoryRules);
    let report = evaluate(&index, &selection, &rules);

    assert!(report.overall_valid);
    assert!(!report.max_category.ok);
    assert!(!report.export_enabled);
    assert!(!report.category_gate_gap());

    let gate = gate_export(&rules, &report);
    assert_eq!(gate.blocking, vec!["국영수 관련 과목".to_string()]);
}

#[test]
fn test_max_category_messages() {
    let index = CatalogIndex::build(catalog());
    let report = evaluate(&index, &valid_selection(), &rules());
    assert_eq!(
        report.max_category.message.as_ref().map(|m| m.text.as_str()),
        Some("지정 국영수 관련 과목 선택 조건 충족! (최대 3개, 현재 3개)")
    );

    let mut selection = valid_selection();
    selection.remove("Y3S2-B3");
    selection.add("Y3S2-B1");
    let report = evaluate(&index, &selection, &rules());
    let message = report.max_category.message.unwrap();
    assert_eq!(message.severity, Severity::Error);
    assert!(message.text.starts_with("지정된 국영수 관련 과목("));
    assert!(message.text.ends_with("중 3개 이하로 선택해야 합니다. (현재 4개 선택)"));
}

fn language_catalog() -> Vec<Course> {
    let mut courses = catalog();
    let japanese = |id: &str, year: u8, semester: u8| Course {
        id: id.to_string(),
        name: "일본어".to_string(),
        year,
        semester,
        group: "외국어".to_string(),
        group_quota: Some(0),
        hours: 2,
        mandatory: false,
    };
    courses.push(japanese("j21", 2, 1));
    courses.push(japanese("j31", 3, 1));
    courses.push(japanese("j32", 3, 2));
    courses.push(Course {
        id: "k22".to_string(),
        name: "중국어".to_string(),
        year: 2,
        semester: 2,
        group: "외국어".to_string(),
        group_quota: Some(0),
        hours: 2,
        mandatory: false,
    });
    courses.push(Course {
        id: "k31".to_string(),
        name: "중국어".to_string(),
        year: 3,
        semester: 1,
        group: "외국어".to_string(),
        group_quota: Some(0),
        hours: 2,
        mandatory: false,
    });
    courses
}

#[test]
fn test_duplicate_name_across_semesters() {
    let index = CatalogIndex::build(language_catalog());
    let mut selection = valid_selection();
    selection.add("j21");
    selection.add("j32");
    let report = evaluate(&index, &selection, &rules());

    assert_eq!(
        report.duplicate_error.as_deref(),
        Some("과목 \"일본어\"은(는) 여러 학기에 중복하여 선택할 수 없습니다. (선택된 시점: 2학년 1학기, 3학년 2학기)")
    );
    assert!(!report.overall_valid);
    assert!(!report.export_enabled);
    // The duplicate error replaces the overall failure line.
    assert!(report.overall_message.is_none());
    assert_eq!(report.global_messages()[0].severity, Severity::Error);
}

#[test]
fn test_same_semester_in_different_years_is_not_duplicate() {
    let index = CatalogIndex::build(language_catalog());
    let mut selection = valid_selection();
    selection.add("j21");
    selection.add("j31");
    let report = evaluate(&index, &selection, &rules());
    assert!(report.duplicate_error.is_none());
}

#[test]
fn test_only_first_duplicate_is_reported() {
    let index = CatalogIndex::build(language_catalog());
    let selection = select(&["k22", "j21", "k31", "j32"]);
    let report = evaluate(&index, &selection, &rules());

    let message = report.duplicate_error.unwrap();
    assert!(message.contains("\"중국어\""));
    assert!(!message.contains("일본어"));
}

#[test]
fn test_unknown_selected_ids_are_ignored() {
    let index = CatalogIndex::build(catalog());
    let mut selection = valid_selection();
    selection.add("retired-course");
    let report = evaluate(&index, &selection, &rules());
    assert!(report.overall_valid);
    assert!(report.duplicate_error.is_none());
}

#[test]
fn test_evaluation_is_repeatable() {
    let index = CatalogIndex::build(language_catalog());
    let mut selection = valid_selection();
    selection.add("j21");
    selection.add("j32");
    let first = evaluate(&index, &selection, &rules());
    let second = evaluate(&index, &selection, &rules());
    assert_eq!(first, second);
}
