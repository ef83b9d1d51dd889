//! rp-core - Core library for Roadplan
//!
//! This crate provides the curriculum catalog (branches, semesters, subject
//! weightages, GATE study plan) and the pure projections that turn catalog
//! data into chart-ready series used across all Roadplan components.

pub mod branch;
pub mod branch_id;
pub mod catalog;
pub mod error;
pub mod gate;
pub mod phase;
pub mod projection;
pub mod roadmap;

pub use branch::{BranchCurriculum, PhaseAggregate, Semester, SubjectEntry};
pub use branch_id::BranchId;
pub use catalog::Catalog;
pub use error::{CoreError, CoreResult};
pub use gate::{GatePhase, GatePlan, StudyBlock, TargetRange, Topic, WeekRange};
pub use phase::Phase;
pub use projection::{
    branch_breakdown, phase_comparison, semester_progression, subject_gauges, BreakdownSlice,
    PhaseComparisonRow, ProgressionPoint, ProgressionSeries, SubjectGauge,
};
pub use roadmap::{RoadmapSemester, RoadmapYear};
