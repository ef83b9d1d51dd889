use super::*;
use crate::catalog::Catalog;

#[test]
fn builtin_plan_has_four_phases() {
    let catalog = Catalog::builtin().unwrap();
    let plan = catalog.gate_plan();

    let titles: Vec<&str> = plan.phases.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "Foundation Building",
            "Core Subjects",
            "Advanced Topics",
            "Practice & Revision",
        ]
    );
}

#[test]
fn weighted_blocks_sum_their_topics() {
    let catalog = Catalog::builtin().unwrap();
    for phase in &catalog.gate_plan().phases {
        for block in &phase.blocks {
            if let Some(weightage) = block.weightage {
                let sum: u32 = block.topics.iter().map(|t| u32::from(t.weight)).sum();
                assert_eq!(sum, u32::from(weightage), "block {}", block.subject);
            }
        }
    }
}

#[test]
fn phase_lookup_by_ordinal() {
    let catalog = Catalog::builtin().unwrap();
    let phase2 = catalog.gate_plan().phase(2).unwrap();
    assert_eq!(phase2.title, "Core Subjects");
    assert_eq!(phase2.months, "4-6");

    let err = catalog.gate_plan().phase(5).unwrap_err();
    assert!(matches!(err, CoreError::GatePhaseNotFound { phase: 5 }));
}

#[test]
fn practice_blocks_carry_activities_only() {
    let catalog = Catalog::builtin().unwrap();
    let phase4 = catalog.gate_plan().phase(4).unwrap();

    assert_eq!(phase4.blocks.len(), 3);
    for block in &phase4.blocks {
        assert!(block.weightage.is_none());
        assert!(block.target_score.is_none());
        assert!(!block.activities.is_empty());
    }
    assert_eq!(phase4.blocks[0].weeks, WeekRange { start: 37, end: 40 });
}

#[test]
fn topic_sum_mismatch_fails_validation() {
    let plan = GatePlan {
        phases: (1..=4)
            .map(|number| GatePhase {
                number,
                title: format!("Phase {number}"),
                months: String::new(),
                blocks: if number == 1 {
                    vec![StudyBlock {
                        weeks: WeekRange { start: 1, end: 4 },
                        subject: "Mathematics".to_string(),
                        weightage: Some(15),
                        target_score: Some(TargetRange { min: 12, max: 15 }),
                        topics: vec![Topic {
                            name: "Linear Algebra".to_string(),
                            weight: 5,
                        }],
                        activities: Vec::new(),
                    }]
                } else {
                    Vec::new()
                },
            })
            .collect(),
    };

    let err = plan.validate().unwrap_err();
    assert!(matches!(
        err,
        CoreError::TopicSumMismatch { sum: 5, expected: 15, .. }
    ));
}

#[test]
fn inverted_week_range_fails_validation() {
    let plan = GatePlan {
        phases: (1..=4)
            .map(|number| GatePhase {
                number,
                title: String::new(),
                months: String::new(),
                blocks: if number == 1 {
                    vec![StudyBlock {
                        weeks: WeekRange { start: 8, end: 5 },
                        subject: "Algorithms".to_string(),
                        weightage: None,
                        target_score: None,
                        topics: Vec::new(),
                        activities: Vec::new(),
                    }]
                } else {
                    Vec::new()
                },
            })
            .collect(),
    };

    let err = plan.validate().unwrap_err();
    assert!(matches!(err, CoreError::WeekRangeInverted { start: 8, end: 5, .. }));
}

#[test]
fn wrong_phase_numbering_fails_validation() {
    let plan = GatePlan {
        phases: vec![GatePhase {
            number: 2,
            title: String::new(),
            months: String::new(),
            blocks: Vec::new(),
        }],
    };
    assert!(matches!(plan.validate().unwrap_err(), CoreError::GatePhaseOrder));
}
