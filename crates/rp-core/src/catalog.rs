//! The curriculum catalog: parsed once, validated, then immutable.
//!
//! The builtin datasets are compiled into the binary; an alternative dataset
//! can be supplied as YAML text. Construction fails fast on any consistency
//! violation, so a `Catalog` in hand always satisfies the invariants the
//! accessors and projections rely on. All state is read-only after
//! construction, so a `Catalog` can be shared across threads freely.

use crate::branch::{BranchCurriculum, PhaseAggregate, SubjectEntry, SEMESTERS_PER_BRANCH};
use crate::error::{CoreError, CoreResult};
use crate::gate::GatePlan;
use crate::phase::Phase;
use crate::roadmap::RoadmapYear;
use serde::Deserialize;
use std::collections::HashSet;

/// Builtin curriculum dataset (branches + roadmap).
const CURRICULUM_YML: &str = include_str!("../data/curriculum.yml");

/// Builtin GATE plan dataset.
const GATE_YML: &str = include_str!("../data/gate.yml");

/// Top-level shape of the curriculum dataset file.
#[derive(Debug, Deserialize)]
struct CurriculumFile {
    branches: Vec<BranchCurriculum>,

    #[serde(default)]
    roadmap: Vec<RoadmapYear>,
}

/// The authoritative, immutable curriculum dataset.
#[derive(Debug, Clone)]
pub struct Catalog {
    branches: Vec<BranchCurriculum>,
    roadmap: Vec<RoadmapYear>,
    gate: GatePlan,
}

impl Catalog {
    /// Load and validate the builtin datasets.
    pub fn builtin() -> CoreResult<Self> {
        Self::from_yaml(CURRICULUM_YML, GATE_YML)
    }

    /// Parse and validate externally supplied dataset text.
    pub fn from_yaml(curriculum: &str, gate: &str) -> CoreResult<Self> {
        let file: CurriculumFile = serde_yaml::from_str(curriculum)?;
        let gate: GatePlan = serde_yaml::from_str(gate)?;

        let catalog = Self {
            branches: file.branches,
            roadmap: file.roadmap,
            gate,
        };
        catalog.validate()?;

        log::debug!(
            "catalog loaded: {} branches, {} roadmap years, {} GATE phases",
            catalog.branches.len(),
            catalog.roadmap.len(),
            catalog.gate.phases.len()
        );
        Ok(catalog)
    }

    /// All branches, in dataset order.
    pub fn branches(&self) -> &[BranchCurriculum] {
        &self.branches
    }

    /// Look up a branch by id.
    pub fn branch(&self, id: &str) -> CoreResult<&BranchCurriculum> {
        self.branches
            .iter()
            .find(|b| b.id == id)
            .ok_or_else(|| CoreError::BranchNotFound {
                name: id.to_string(),
            })
    }

    /// Ordered subject entries of one semester of one branch.
    pub fn semester_subjects(&self, branch: &str, semester: u8) -> CoreResult<&[SubjectEntry]> {
        let curriculum = self.branch(branch)?;
        curriculum
            .semester(semester)
            .map(|s| s.subjects.as_slice())
            .ok_or(CoreError::SemesterNotFound {
                branch: branch.to_string(),
                semester,
            })
    }

    /// The four phase aggregates of a branch, in canonical order.
    ///
    /// Guaranteed by construction to sum to 100.
    pub fn phase_aggregates(&self, branch: &str) -> CoreResult<&[PhaseAggregate]> {
        Ok(self.branch(branch)?.phases.as_slice())
    }

    /// Year-wise roadmap notes (may be empty for custom datasets).
    pub fn roadmap(&self) -> &[RoadmapYear] {
        &self.roadmap
    }

    /// The GATE preparation plan.
    pub fn gate_plan(&self) -> &GatePlan {
        &self.gate
    }

    /// Enforce every construction-time invariant, failing on the first
    /// violation.
    fn validate(&self) -> CoreResult<()> {
        let mut seen: HashSet<&str> = HashSet::new();
        for branch in &self.branches {
            if !seen.insert(branch.id.as_str()) {
                return Err(CoreError::DuplicateBranch {
                    name: branch.id.to_string(),
                });
            }
            validate_branch(branch)?;
        }

        validate_roadmap(&self.roadmap)?;
        self.gate.validate()
    }
}

/// Check one branch: 8 ordered semesters, non-empty subject lists with
/// gauge-scale weights, and 4 canonical phase aggregates summing to 100.
fn validate_branch(branch: &BranchCurriculum) -> CoreResult<()> {
    if branch.semesters.len() != SEMESTERS_PER_BRANCH as usize {
        return Err(CoreError::SemesterCount {
            branch: branch.id.to_string(),
            found: branch.semesters.len(),
        });
    }

    for (idx, semester) in branch.semesters.iter().enumerate() {
        let expected = idx as u8 + 1;
        if semester.number != expected {
            return Err(CoreError::SemesterOrder {
                branch: branch.id.to_string(),
                found: semester.number,
                expected,
            });
        }
        if semester.subjects.is_empty() {
            return Err(CoreError::EmptySemester {
                branch: branch.id.to_string(),
                semester: semester.number,
            });
        }
        for subject in &semester.subjects {
            if subject.weight > 100 {
                return Err(CoreError::SubjectWeightOutOfRange {
                    branch: branch.id.to_string(),
                    semester: semester.number,
                    subject: subject.name.clone(),
                    weight: subject.weight,
                });
            }
        }
    }

    let canonical = branch.phases.len() == Phase::ALL.len()
        && branch
            .phases
            .iter()
            .zip(Phase::ALL)
            .all(|(aggregate, phase)| aggregate.phase == phase);
    if !canonical {
        return Err(CoreError::PhaseOrder {
            branch: branch.id.to_string(),
        });
    }

    let sum: u32 = branch.phases.iter().map(|a| u32::from(a.weight)).sum();
    if sum != 100 {
        return Err(CoreError::PhaseSumMismatch {
            branch: branch.id.to_string(),
            sum,
        });
    }

    Ok(())
}

/// Check the roadmap covers years 1..=4 in order, each year holding its two
/// semesters. An absent roadmap is allowed for custom datasets.
fn validate_roadmap(roadmap: &[RoadmapYear]) -> CoreResult<()> {
    if roadmap.is_empty() {
        return Ok(());
    }
    if roadmap.len() != 4 {
        return Err(CoreError::RoadmapYearOrder);
    }
    for (idx, year) in roadmap.iter().enumerate() {
        if year.year != idx as u8 + 1 {
            return Err(CoreError::RoadmapYearOrder);
        }
        let first = year.year * 2 - 1;
        let second = year.year * 2;
        let numbers: Vec<u8> = year.semesters.iter().map(|s| s.number).collect();
        if numbers != [first, second] {
            return Err(CoreError::RoadmapSemesterMismatch {
                year: year.year,
                first,
                second,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
