//! Today Insight
//!
//! Celebrates a strong day or nudges toward the tasks still due today.

use crate::error::Result;

use super::engine::{finite, AnalysisContext, Analyzer};
use super::types::{ActionType, AnalyzerId, Finding, InsightKind, InsightType, Priority};

/// Analyzer for today's completion rate
pub struct TodayAnalyzer;

impl TodayAnalyzer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TodayAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer for TodayAnalyzer {
    fn id(&self) -> AnalyzerId {
        AnalyzerId::Today
    }

    fn name(&self) -> &'static str {
        "Today"
    }

    fn analyze(&self, ctx: &AnalysisContext<'_>) -> Result<Vec<Finding>> {
        let t = ctx.thresholds;
        let today = &ctx.stats.today;
        let rate = finite("today's completion rate", today.completion_rate)?;

        let finding = if rate >= t.today_strong_rate {
            Some(Finding::new(
                InsightKind::StrongDay,
                InsightType::Achievement,
                Priority::High,
                "Great Day",
                format!(
                    "You've completed {:.0}% of today's tasks. Excellent work!",
                    rate.round()
                ),
            ))
        } else if rate < t.today_low_rate && today.due > 0 {
            let remaining = today.due_remaining();
            Some(
                Finding::new(
                    InsightKind::LowCompletionToday,
                    InsightType::Suggestion,
                    Priority::Medium,
                    "Tasks Waiting Today",
                    format!(
                        "You still have {} {} due today. Start with the quickest one.",
                        remaining,
                        if remaining == 1 { "task" } else { "tasks" }
                    ),
                )
                .with_action(ActionType::Navigate, "View today's tasks"),
            )
        } else {
            None
        };

        Ok(finding.into_iter().collect())
    }
}
