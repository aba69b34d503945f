//! Milestone Insight
//!
//! Celebrates the total number of completed tasks across the whole list.

use crate::error::Result;
use crate::models::completed_count;

use super::engine::{AnalysisContext, Analyzer};
use super::types::{AnalyzerId, Finding, InsightKind, InsightType, Priority};

/// Analyzer for completed-task milestones
pub struct MilestoneAnalyzer;

impl MilestoneAnalyzer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MilestoneAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer for MilestoneAnalyzer {
    fn id(&self) -> AnalyzerId {
        AnalyzerId::Milestone
    }

    fn name(&self) -> &'static str {
        "Milestone"
    }

    fn analyze(&self, ctx: &AnalysisContext<'_>) -> Result<Vec<Finding>> {
        let t = ctx.thresholds;
        let completed = completed_count(ctx.todos);

        let finding = if completed >= t.mastery_completed {
            Some(Finding::new(
                InsightKind::MasteryMilestone,
                InsightType::Achievement,
                Priority::High,
                "Task Master",
                format!(
                    "You've completed {} tasks. That's real mastery of your workload!",
                    completed
                ),
            ))
        } else if completed >= t.steady_completed {
            Some(Finding::new(
                InsightKind::SteadyMilestone,
                InsightType::Achievement,
                Priority::Medium,
                "Steady Execution",
                format!("You've completed {} tasks so far. Keep it up!", completed),
            ))
        } else {
            None
        };

        Ok(finding.into_iter().collect())
    }
}
