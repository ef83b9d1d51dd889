use super::*;

/// A minimal single-branch dataset used to exercise validation failures.
/// Weights and structure are valid as written; individual tests patch one
/// aspect at a time.
fn one_branch_yaml(phases: &str, semesters: &str) -> String {
    format!(
        r#"
branches:
  - id: CSE
    name: Computer Science Engineering
    focus: Software systems
    phases:
{phases}
    semesters:
{semesters}
"#
    )
}

fn valid_phases() -> &'static str {
    r#"      - {phase: foundation, label: Foundation, weight: 25}
      - {phase: core, label: Core CS, weight: 30}
      - {phase: advanced, label: Advanced CS, weight: 25}
      - {phase: specialization, label: Specialization, weight: 20}"#
}

fn eight_semesters(weight: u8) -> String {
    (1..=8)
        .map(|n| {
            format!(
                "      - {{number: {n}, subjects: [{{name: Subject {n}, weight: {weight}}}]}}"
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

const EMPTY_GATE: &str = r#"
phases:
  - {number: 1, title: A, months: "1-3", blocks: []}
  - {number: 2, title: B, months: "4-6", blocks: []}
  - {number: 3, title: C, months: "7-9", blocks: []}
  - {number: 4, title: D, months: "10-12", blocks: []}
"#;

#[test]
fn builtin_catalog_loads() {
    let catalog = Catalog::builtin().unwrap();

    let ids: Vec<&str> = catalog.branches().iter().map(|b| b.id.as_str()).collect();
    assert_eq!(ids, vec!["CSE", "IT", "ECE"]);
    assert_eq!(catalog.roadmap().len(), 4);
    assert_eq!(catalog.gate_plan().phases.len(), 4);
}

#[test]
fn builtin_phase_weights_sum_to_100() {
    let catalog = Catalog::builtin().unwrap();
    for branch in catalog.branches() {
        let sum: u32 = catalog
            .phase_aggregates(branch.id.as_str())
            .unwrap()
            .iter()
            .map(|a| u32::from(a.weight))
            .sum();
        assert_eq!(sum, 100, "branch {}", branch.id);
    }
}

#[test]
fn cse_semester_2_subjects_in_order() {
    let catalog = Catalog::builtin().unwrap();
    let subjects = catalog.semester_subjects("CSE", 2).unwrap();

    let entries: Vec<(&str, u8)> = subjects.iter().map(|s| (s.name.as_str(), s.weight)).collect();
    assert_eq!(
        entries,
        vec![
            ("Engineering Mathematics II", 8),
            ("Data Structures", 10),
            ("Object-Oriented Programming", 6),
            ("Computer Organization", 8),
        ]
    );
}

#[test]
fn unknown_branch_is_not_found() {
    let catalog = Catalog::builtin().unwrap();
    let err = catalog.semester_subjects("ME", 1).unwrap_err();
    assert!(matches!(err, CoreError::BranchNotFound { ref name } if name == "ME"));
}

#[test]
fn semester_out_of_range_is_not_found() {
    let catalog = Catalog::builtin().unwrap();
    let err = catalog.semester_subjects("CSE", 9).unwrap_err();
    assert!(matches!(
        err,
        CoreError::SemesterNotFound { ref branch, semester: 9 } if branch == "CSE"
    ));
}

#[test]
fn branch_profiles_carry_careers() {
    let catalog = Catalog::builtin().unwrap();
    let it = catalog.branch("IT").unwrap();
    assert_eq!(it.name, "Information Technology");
    assert!(it.careers.iter().any(|c| c == "DevOps Engineer"));
    assert_eq!(it.highlights.len(), 4);
}

#[test]
fn phase_sum_mismatch_fails_construction() {
    let phases = r#"      - {phase: foundation, label: Foundation, weight: 25}
      - {phase: core, label: Core CS, weight: 30}
      - {phase: advanced, label: Advanced CS, weight: 25}
      - {phase: specialization, label: Specialization, weight: 18}"#;
    let yaml = one_branch_yaml(phases, &eight_semesters(5));

    let err = Catalog::from_yaml(&yaml, EMPTY_GATE).unwrap_err();
    assert!(matches!(err, CoreError::PhaseSumMismatch { sum: 98, .. }));
}

#[test]
fn phase_order_is_enforced() {
    let phases = r#"      - {phase: core, label: Core CS, weight: 30}
      - {phase: foundation, label: Foundation, weight: 25}
      - {phase: advanced, label: Advanced CS, weight: 25}
      - {phase: specialization, label: Specialization, weight: 20}"#;
    let yaml = one_branch_yaml(phases, &eight_semesters(5));

    let err = Catalog::from_yaml(&yaml, EMPTY_GATE).unwrap_err();
    assert!(matches!(err, CoreError::PhaseOrder { .. }));
}

#[test]
fn nine_semesters_fail_construction() {
    let mut semesters = eight_semesters(5);
    semesters.push_str("\n      - {number: 9, subjects: [{name: Extra, weight: 5}]}");
    let yaml = one_branch_yaml(valid_phases(), &semesters);

    let err = Catalog::from_yaml(&yaml, EMPTY_GATE).unwrap_err();
    assert!(matches!(err, CoreError::SemesterCount { found: 9, .. }));
}

#[test]
fn subject_weight_above_100_fails_construction() {
    let semesters = eight_semesters(5).replace(
        "{number: 3, subjects: [{name: Subject 3, weight: 5}]}",
        "{number: 3, subjects: [{name: Subject 3, weight: 120}]}",
    );
    let yaml = one_branch_yaml(valid_phases(), &semesters);

    let err = Catalog::from_yaml(&yaml, EMPTY_GATE).unwrap_err();
    assert!(matches!(
        err,
        CoreError::SubjectWeightOutOfRange { semester: 3, weight: 120, .. }
    ));
}

#[test]
fn duplicate_branch_fails_construction() {
    let single = one_branch_yaml(valid_phases(), &eight_semesters(5));
    // Duplicate the branch entry under the same top-level list.
    let body = single.trim_start().trim_start_matches("branches:");
    let yaml = format!("branches:{body}{body}");

    let err = Catalog::from_yaml(&yaml, EMPTY_GATE).unwrap_err();
    assert!(matches!(err, CoreError::DuplicateBranch { ref name } if name == "CSE"));
}

#[test]
fn malformed_yaml_is_a_parse_error() {
    let err = Catalog::from_yaml("branches: [not a branch", EMPTY_GATE).unwrap_err();
    assert!(matches!(err, CoreError::Yaml(_)));
}
