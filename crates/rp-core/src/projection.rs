//! Chart projections over the catalog.
//!
//! Pure transforms from catalog data into the shapes the analytics views
//! plot: a grouped-bar table, a pie-style breakdown, a multi-series
//! progression line, and per-semester subject gauges. No knowledge of any
//! plotting library; outputs own their data.

use crate::branch_id::BranchId;
use crate::catalog::Catalog;
use crate::error::CoreResult;
use crate::phase::Phase;
use serde::Serialize;

/// One grouped-bar row: a branch with its four phase weights.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhaseComparisonRow {
    pub branch: BranchId,
    pub foundation: u8,
    pub core: u8,
    pub advanced: u8,
    pub specialization: u8,
}

/// One pie slice of a single-branch breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreakdownSlice {
    pub label: String,
    pub value: u8,
}

/// One point of a progression line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProgressionPoint {
    pub semester: u8,
    pub weight: u8,
}

/// One line of the progression chart: a branch over semesters 1..=8.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgressionSeries {
    pub branch: BranchId,
    pub points: Vec<ProgressionPoint>,
}

/// One progress-gauge row of a semester view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubjectGauge {
    pub name: String,
    pub weight: u8,
    /// Fill fraction of a 0-100% gauge, always `weight / 100`
    pub fraction: f32,
}

/// Phase weights of every branch, one row per branch in catalog order.
///
/// An empty catalog yields an empty table, not an error.
pub fn phase_comparison(catalog: &Catalog) -> Vec<PhaseComparisonRow> {
    catalog
        .branches()
        .iter()
        .map(|b| PhaseComparisonRow {
            branch: b.id.clone(),
            foundation: b.phase_weight(Phase::Foundation),
            core: b.phase_weight(Phase::Core),
            advanced: b.phase_weight(Phase::Advanced),
            specialization: b.phase_weight(Phase::Specialization),
        })
        .collect()
}

/// Ordered (label, value) slices of one branch, summing to 100.
///
/// Unknown branches are a hard failure, never an empty default.
pub fn branch_breakdown(catalog: &Catalog, branch: &str) -> CoreResult<Vec<BreakdownSlice>> {
    let aggregates = catalog.phase_aggregates(branch)?;
    Ok(aggregates
        .iter()
        .map(|a| BreakdownSlice {
            label: a.label.clone(),
            value: a.weight,
        })
        .collect())
}

/// Per-branch stepwise weight progression over semesters 1..=8.
///
/// Each semester carries the weight of its phase, so every phase
/// contributes two equal points.
pub fn semester_progression(catalog: &Catalog) -> Vec<ProgressionSeries> {
    catalog
        .branches()
        .iter()
        .map(|b| {
            let points = Phase::ALL
                .iter()
                .flat_map(|&phase| {
                    let weight = b.phase_weight(phase);
                    phase
                        .semesters()
                        .into_iter()
                        .map(move |semester| ProgressionPoint { semester, weight })
                })
                .collect();
            ProgressionSeries {
                branch: b.id.clone(),
                points,
            }
        })
        .collect()
}

/// Gauge rows for one semester of one branch, in subject order.
pub fn subject_gauges(catalog: &Catalog, branch: &str, semester: u8) -> CoreResult<Vec<SubjectGauge>> {
    let subjects = catalog.semester_subjects(branch, semester)?;
    Ok(subjects
        .iter()
        .map(|s| SubjectGauge {
            name: s.name.clone(),
            weight: s.weight,
            fraction: s.gauge_fraction(),
        })
        .collect())
}

#[cfg(test)]
#[path = "projection_test.rs"]
mod tests;
