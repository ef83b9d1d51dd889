//! Branch curriculum representation.
//!
//! A branch owns exactly 8 semesters of ordered subject entries and exactly
//! 4 phase aggregates. Both invariants are enforced when the catalog is
//! constructed (see [`crate::catalog`]), so accessors here can assume them.

use crate::branch_id::BranchId;
use crate::phase::Phase;
use serde::{Deserialize, Serialize};

/// Number of semesters per branch.
pub const SEMESTERS_PER_BRANCH: u8 = 8;

/// A single subject with its weightage score.
///
/// `weight` is a 0-100 importance percentage; the display gauge always
/// renders `weight / 100` of full scale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectEntry {
    /// Subject display name
    pub name: String,

    /// Weightage percentage in 0..=100
    pub weight: u8,
}

impl SubjectEntry {
    /// Fraction of a full 0-100% gauge this subject fills.
    pub fn gauge_fraction(&self) -> f32 {
        f32::from(self.weight) / 100.0
    }
}

/// One semester of a branch curriculum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Semester {
    /// Ordinal in 1..=8
    pub number: u8,

    /// Subjects in display order
    pub subjects: Vec<SubjectEntry>,
}

/// A phase bucket of a branch with its display label and weight.
///
/// Labels are branch-flavored ("Core CS" vs "Core IT"); the `phase` field is
/// the canonical bucket shared across branches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseAggregate {
    /// Canonical phase bucket
    pub phase: Phase,

    /// Branch-specific display label
    pub label: String,

    /// Weight percentage; the four aggregates of a branch sum to 100
    pub weight: u8,
}

/// Full curriculum of one engineering branch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchCurriculum {
    /// Branch identifier ("CSE", "IT", "ECE")
    pub id: BranchId,

    /// Full display name
    pub name: String,

    /// One-line focus description
    pub focus: String,

    /// Headline subjects shown on the overview card
    #[serde(default)]
    pub highlights: Vec<String>,

    /// Career paths this branch leads to
    #[serde(default)]
    pub careers: Vec<String>,

    /// Phase aggregates in canonical order (validated at load)
    pub phases: Vec<PhaseAggregate>,

    /// Semesters 1..=8 in order (validated at load)
    pub semesters: Vec<Semester>,
}

impl BranchCurriculum {
    /// The semester with the given ordinal, if present.
    pub fn semester(&self, number: u8) -> Option<&Semester> {
        self.semesters.iter().find(|s| s.number == number)
    }

    /// The aggregate weight of a phase.
    pub fn phase_weight(&self, phase: Phase) -> u8 {
        // Aggregates are validated to hold all four phases exactly once.
        self.phases
            .iter()
            .find(|a| a.phase == phase)
            .map(|a| a.weight)
            .unwrap_or(0)
    }

    /// Total number of subjects across all semesters.
    pub fn subject_count(&self) -> usize {
        self.semesters.iter().map(|s| s.subjects.len()).sum()
    }
}
