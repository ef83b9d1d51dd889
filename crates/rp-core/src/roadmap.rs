//! Year-wise study roadmap.
//!
//! Branch-independent topic notes for each semester, grouped by academic
//! year. Display content only; the weightage model lives in [`crate::branch`].

use serde::{Deserialize, Serialize};

/// Topic notes for one semester of the roadmap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadmapSemester {
    /// Ordinal in 1..=8
    pub number: u8,

    /// Topic lines in display order
    pub topics: Vec<String>,
}

/// One academic year of the roadmap (two semesters).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadmapYear {
    /// Year ordinal in 1..=4
    pub year: u8,

    /// Year theme, e.g. "Foundation Building"
    pub title: String,

    /// The year's two semesters in order
    pub semesters: Vec<RoadmapSemester>,
}
