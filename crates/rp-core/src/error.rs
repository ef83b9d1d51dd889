//! Error types for rp-core
//!
//! Lookup failures (E1xx) surface to the caller and are never substituted
//! with defaults. Consistency failures (E2xx) are raised at catalog
//! construction only; a catalog that fails validation is never returned.

use thiserror::Error;

/// Core error type for Roadplan
#[derive(Error, Debug)]
pub enum CoreError {
    /// E001: Failed to parse a YAML dataset
    #[error("[E001] Failed to parse dataset: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// E002: JSON serialization error
    #[error("[E002] JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// E101: Requested branch does not exist in the catalog
    #[error("[E101] Branch not found: {name}")]
    BranchNotFound { name: String },

    /// E102: Requested semester does not exist for the branch
    #[error("[E102] Branch '{branch}' has no semester {semester} (expected 1-8)")]
    SemesterNotFound { branch: String, semester: u8 },

    /// E103: Requested GATE phase does not exist
    #[error("[E103] GATE plan has no phase {phase} (expected 1-4)")]
    GatePhaseNotFound { phase: u8 },

    /// E201: Duplicate branch id in the dataset
    #[error("[E201] Duplicate branch id: {name}")]
    DuplicateBranch { name: String },

    /// E202: Branch does not define exactly 8 semesters
    #[error("[E202] Branch '{branch}' defines {found} semesters, expected 8")]
    SemesterCount { branch: String, found: usize },

    /// E203: Semester ordinals are not 1..=8 in order
    #[error("[E203] Branch '{branch}' has semester {found} where {expected} was expected")]
    SemesterOrder {
        branch: String,
        found: u8,
        expected: u8,
    },

    /// E204: Semester has an empty subject list
    #[error("[E204] Branch '{branch}' semester {semester} has no subjects")]
    EmptySemester { branch: String, semester: u8 },

    /// E205: Subject weight outside the 0-100 gauge scale
    #[error("[E205] Subject '{subject}' in branch '{branch}' semester {semester} has weight {weight}, expected 0-100")]
    SubjectWeightOutOfRange {
        branch: String,
        semester: u8,
        subject: String,
        weight: u8,
    },

    /// E206: Phase aggregates missing or not in canonical order
    #[error("[E206] Branch '{branch}' must define Foundation, Core, Advanced, Specialization aggregates in order")]
    PhaseOrder { branch: String },

    /// E207: Phase aggregate weights do not sum to 100
    #[error("[E207] Branch '{branch}' phase weights sum to {sum}, expected 100")]
    PhaseSumMismatch { branch: String, sum: u32 },

    /// E208: GATE phases missing or not numbered 1..=4 in order
    #[error("[E208] GATE plan must define phases 1-4 in order")]
    GatePhaseOrder,

    /// E209: GATE study block week range is inverted
    #[error("[E209] GATE block '{subject}' has inverted week range {start}-{end}")]
    WeekRangeInverted {
        subject: String,
        start: u8,
        end: u8,
    },

    /// E210: GATE study block target score range is inverted
    #[error("[E210] GATE block '{subject}' has inverted target score range {min}-{max}")]
    TargetRangeInverted { subject: String, min: u8, max: u8 },

    /// E211: GATE topic weights do not sum to the block weightage
    #[error("[E211] GATE block '{subject}' topic weights sum to {sum}, expected {expected}")]
    TopicSumMismatch {
        subject: String,
        sum: u32,
        expected: u8,
    },

    /// E212: Roadmap years missing or not numbered 1..=4 in order
    #[error("[E212] Roadmap must define years 1-4 in order")]
    RoadmapYearOrder,

    /// E213: Roadmap year covers the wrong semesters
    #[error("[E213] Roadmap year {year} must cover semesters {first} and {second}")]
    RoadmapSemesterMismatch { year: u8, first: u8, second: u8 },
}

/// Result type alias for CoreError
pub type CoreResult<T> = Result<T, CoreError>;
