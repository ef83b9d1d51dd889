//! Integration tests for Roadplan

use rp_core::{
    branch_breakdown, phase_comparison, semester_progression, Catalog, CoreError,
};

const MINIMAL_GATE: &str = r#"
phases:
  - number: 1
    title: Foundation Building
    months: "1-3"
    blocks:
      - weeks: { start: 1, end: 4 }
        subject: Engineering Mathematics
        weightage: 15
        target_score: { min: 12, max: 15 }
        topics:
          - { name: Linear Algebra, weight: 5 }
          - { name: Calculus, weight: 4 }
          - { name: Probability & Statistics, weight: 3 }
          - { name: Discrete Mathematics, weight: 3 }
  - { number: 2, title: Core Subjects, months: "4-6", blocks: [] }
  - { number: 3, title: Advanced Topics, months: "7-9", blocks: [] }
  - { number: 4, title: Practice & Revision, months: "10-12", blocks: [] }
"#;

/// Test loading the builtin datasets
#[test]
fn test_load_builtin_catalog() {
    let catalog = Catalog::builtin().unwrap();

    assert_eq!(catalog.branches().len(), 3);
    assert!(catalog.branch("CSE").is_ok());
    assert!(catalog.branch("IT").is_ok());
    assert!(catalog.branch("ECE").is_ok());
    assert!(matches!(
        catalog.branch("ME").unwrap_err(),
        CoreError::BranchNotFound { .. }
    ));
}

/// Test the analytics document shape an external dashboard consumes
#[test]
fn test_analytics_json_shape() {
    let catalog = Catalog::builtin().unwrap();

    let comparison = serde_json::to_value(phase_comparison(&catalog)).unwrap();
    let rows = comparison.as_array().unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0]["branch"], "CSE");
    assert_eq!(rows[0]["foundation"], 25);
    assert_eq!(rows[1]["core"], 35);

    let progression = serde_json::to_value(semester_progression(&catalog)).unwrap();
    let series = progression.as_array().unwrap();
    assert_eq!(series.len(), 3);
    assert_eq!(series[0]["points"].as_array().unwrap().len(), 8);
    assert_eq!(series[0]["points"][2]["semester"], 3);
    assert_eq!(series[0]["points"][2]["weight"], 30);

    let breakdown = serde_json::to_value(branch_breakdown(&catalog, "ECE").unwrap()).unwrap();
    let slices = breakdown.as_array().unwrap();
    assert_eq!(slices.len(), 4);
    assert_eq!(slices[1]["label"], "Core ECE");
    assert_eq!(slices[1]["value"], 30);
}

/// Test that a custom single-branch dataset drives the projections
#[test]
fn test_custom_dataset() {
    let curriculum = r#"
branches:
  - id: AI
    name: Artificial Intelligence
    focus: Learning systems
    phases:
      - { phase: foundation, label: Foundation, weight: 30 }
      - { phase: core, label: Core AI, weight: 30 }
      - { phase: advanced, label: Advanced AI, weight: 25 }
      - { phase: specialization, label: Specialization, weight: 15 }
    semesters:
      - { number: 1, subjects: [{ name: Mathematics for AI, weight: 10 }] }
      - { number: 2, subjects: [{ name: Python Programming, weight: 8 }] }
      - { number: 3, subjects: [{ name: Machine Learning, weight: 12 }] }
      - { number: 4, subjects: [{ name: Deep Learning, weight: 10 }] }
      - { number: 5, subjects: [{ name: Computer Vision, weight: 8 }] }
      - { number: 6, subjects: [{ name: Natural Language Processing, weight: 8 }] }
      - { number: 7, subjects: [{ name: Research Project, weight: 10 }] }
      - { number: 8, subjects: [{ name: Capstone Project, weight: 15 }] }
"#;

    let catalog = Catalog::from_yaml(curriculum, MINIMAL_GATE).unwrap();

    let rows = phase_comparison(&catalog);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].branch.as_str(), "AI");
    assert_eq!(rows[0].foundation, 30);

    let series = semester_progression(&catalog);
    let weights: Vec<u8> = series[0].points.iter().map(|p| p.weight).collect();
    assert_eq!(weights, vec![30, 30, 30, 30, 25, 25, 15, 15]);

    assert!(catalog.roadmap().is_empty());
}

/// Test that a branchless dataset projects to empty results, not errors
#[test]
fn test_empty_branch_set_projects_empty() {
    let catalog = Catalog::from_yaml("branches: []", MINIMAL_GATE).unwrap();

    assert!(phase_comparison(&catalog).is_empty());
    assert!(semester_progression(&catalog).is_empty());
    assert!(matches!(
        branch_breakdown(&catalog, "CSE").unwrap_err(),
        CoreError::BranchNotFound { .. }
    ));
}

/// Test that GATE data flows through the catalog accessor
#[test]
fn test_gate_plan_accessor() {
    let catalog = Catalog::builtin().unwrap();
    let plan = catalog.gate_plan();

    let phase1 = plan.phase(1).unwrap();
    assert_eq!(phase1.blocks.len(), 3);
    assert_eq!(phase1.blocks[0].subject, "Engineering Mathematics");
    assert_eq!(phase1.blocks[0].weightage, Some(15));

    let last_block = &plan.phase(4).unwrap().blocks[2];
    assert_eq!(last_block.subject, "Final Revision");
    assert_eq!(last_block.weeks.start, 45);
    assert_eq!(last_block.weeks.end, 48);
}
