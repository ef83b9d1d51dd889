//! GATE preparation plan.
//!
//! A fixed 12-month plan of 4 phases. Phases 1-3 hold weighted study blocks
//! (subject weightage, target score, topic breakdown); phase 4 holds
//! practice blocks with activity notes and no weightage.

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};

/// Number of phases in the plan.
pub const GATE_PHASES: u8 = 4;

/// An inclusive range of study weeks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekRange {
    pub start: u8,
    pub end: u8,
}

impl std::fmt::Display for WeekRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Week {}-{}", self.start, self.end)
    }
}

/// Target score band for a weighted study block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetRange {
    pub min: u8,
    pub max: u8,
}

impl std::fmt::Display for TargetRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

/// A topic within a study block, carrying its share of the block weightage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    pub name: String,
    pub weight: u8,
}

/// One block of the plan: a week range devoted to a subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyBlock {
    /// Weeks this block covers
    pub weeks: WeekRange,

    /// Subject or activity name
    pub subject: String,

    /// Exam weightage percent; absent for practice blocks
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weightage: Option<u8>,

    /// Target score band; absent for practice blocks
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_score: Option<TargetRange>,

    /// Topic breakdown; weights sum to `weightage`
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub topics: Vec<Topic>,

    /// Activity notes for practice blocks
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub activities: Vec<String>,
}

/// One of the four plan phases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatePhase {
    /// Ordinal in 1..=4
    pub number: u8,

    /// Phase theme, e.g. "Foundation Building"
    pub title: String,

    /// Covered months label, e.g. "1-3"
    pub months: String,

    /// Study blocks in week order
    pub blocks: Vec<StudyBlock>,
}

/// The complete 4-phase plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatePlan {
    pub phases: Vec<GatePhase>,
}

impl GatePlan {
    /// The phase with the given ordinal.
    pub fn phase(&self, number: u8) -> CoreResult<&GatePhase> {
        self.phases
            .iter()
            .find(|p| p.number == number)
            .ok_or(CoreError::GatePhaseNotFound { phase: number })
    }

    /// Validate plan shape: 4 phases in order, sane ranges, topic sums
    /// matching block weightages.
    pub(crate) fn validate(&self) -> CoreResult<()> {
        if self.phases.len() != GATE_PHASES as usize {
            return Err(CoreError::GatePhaseOrder);
        }
        for (idx, phase) in self.phases.iter().enumerate() {
            if phase.number != idx as u8 + 1 {
                return Err(CoreError::GatePhaseOrder);
            }
            for block in &phase.blocks {
                block.validate()?;
            }
        }
        Ok(())
    }
}

impl StudyBlock {
    fn validate(&self) -> CoreResult<()> {
        if self.weeks.start > self.weeks.end {
            return Err(CoreError::WeekRangeInverted {
                subject: self.subject.clone(),
                start: self.weeks.start,
                end: self.weeks.end,
            });
        }
        if let Some(target) = self.target_score {
            if target.min > target.max {
                return Err(CoreError::TargetRangeInverted {
                    subject: self.subject.clone(),
                    min: target.min,
                    max: target.max,
                });
            }
        }
        if let Some(weightage) = self.weightage {
            let sum: u32 = self.topics.iter().map(|t| u32::from(t.weight)).sum();
            if sum != u32::from(weightage) {
                return Err(CoreError::TopicSumMismatch {
                    subject: self.subject.clone(),
                    sum,
                    expected: weightage,
                });
            }
        } else if !self.topics.is_empty() {
            // Topics without a block weightage have nothing to sum against.
            log::warn!(
                "GATE block '{}' lists topics but no weightage; topics ignored in totals",
                self.subject
            );
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "gate_test.rs"]
mod tests;
