//! Curriculum phases.
//!
//! Every branch runs 8 semesters grouped into 4 two-semester phases. The
//! grouping is structural (it never varies per branch), so the phase set is
//! a closed enum rather than dataset-driven.

use serde::{Deserialize, Serialize};

/// A two-semester grouping of the 8-semester curriculum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Semesters 1-2
    Foundation,
    /// Semesters 3-4
    Core,
    /// Semesters 5-6
    Advanced,
    /// Semesters 7-8
    Specialization,
}

impl Phase {
    /// All phases in curriculum order.
    pub const ALL: [Phase; 4] = [
        Phase::Foundation,
        Phase::Core,
        Phase::Advanced,
        Phase::Specialization,
    ];

    /// The phase covering a semester ordinal, or `None` outside 1..=8.
    pub fn for_semester(semester: u8) -> Option<Phase> {
        match semester {
            1 | 2 => Some(Phase::Foundation),
            3 | 4 => Some(Phase::Core),
            5 | 6 => Some(Phase::Advanced),
            7 | 8 => Some(Phase::Specialization),
            _ => None,
        }
    }

    /// The two semester ordinals this phase covers.
    pub fn semesters(self) -> [u8; 2] {
        match self {
            Phase::Foundation => [1, 2],
            Phase::Core => [3, 4],
            Phase::Advanced => [5, 6],
            Phase::Specialization => [7, 8],
        }
    }

    /// Canonical column name for cross-branch views.
    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Foundation => "Foundation",
            Phase::Core => "Core",
            Phase::Advanced => "Advanced",
            Phase::Specialization => "Specialization",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
