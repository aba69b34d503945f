//! Overdue Insight
//!
//! No overdue tasks is worth celebrating; a handful is not yet a problem;
//! past the buildup threshold it becomes a weakness worth acting on.

use crate::error::Result;

use super::engine::{AnalysisContext, Analyzer};
use super::types::{ActionType, AnalyzerId, Finding, InsightKind, InsightType, Priority};

/// Analyzer for overdue task buildup
pub struct OverdueAnalyzer;

impl OverdueAnalyzer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for OverdueAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer for OverdueAnalyzer {
    fn id(&self) -> AnalyzerId {
        AnalyzerId::Overdue
    }

    fn name(&self) -> &'static str {
        "Overdue"
    }

    fn analyze(&self, ctx: &AnalysisContext<'_>) -> Result<Vec<Finding>> {
        let total = ctx.stats.overdue.total;
        let mut findings = Vec::new();

        if total == 0 {
            findings.push(Finding::new(
                InsightKind::NoOverdue,
                InsightType::Achievement,
                Priority::Medium,
                "Perfect Time Management",
                "You have no overdue tasks. Everything is on schedule!",
            ));
        } else if total > ctx.thresholds.overdue_buildup {
            findings.push(
                Finding::new(
                    InsightKind::OverdueBuildup,
                    InsightType::Weakness,
                    Priority::High,
                    "Overdue Tasks Piling Up",
                    format!(
                        "You have {} overdue tasks. Reschedule or drop the ones that no longer matter.",
                        total
                    ),
                )
                .with_action(ActionType::Navigate, "Review overdue tasks"),
            );
        }

        Ok(findings)
    }
}
