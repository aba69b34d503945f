//! Category Insight
//!
//! Points out the best-performing category as a strength and the weakest one
//! as a place to break work down. With a single category it is both best and
//! worst; the two checks run independently against it.

use crate::error::Result;
use crate::models::CategoryStats;

use super::engine::{finite, AnalysisContext, Analyzer};
use super::types::{ActionType, AnalyzerId, Finding, InsightKind, InsightType, Priority};

/// Analyzer for per-category completion rates
pub struct CategoryAnalyzer;

impl CategoryAnalyzer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CategoryAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer for CategoryAnalyzer {
    fn id(&self) -> AnalyzerId {
        AnalyzerId::Category
    }

    fn name(&self) -> &'static str {
        "Category"
    }

    fn analyze(&self, ctx: &AnalysisContext<'_>) -> Result<Vec<Finding>> {
        let t = ctx.thresholds;
        let categories = &ctx.stats.categories;

        for category in categories {
            finite(
                &format!("completion rate for category {}", category.name),
                category.completion_rate,
            )?;
        }

        let (Some(best), Some(worst)) = (best_category(categories), worst_category(categories))
        else {
            return Ok(vec![]);
        };

        let mut findings = Vec::new();

        if best.completion_rate >= t.category_strong_rate {
            findings.push(Finding::new(
                InsightKind::TopCategory,
                InsightType::Strength,
                Priority::Medium,
                format!("Strong in {}", best.name),
                format!(
                    "You complete {:.0}% of your {} tasks. This is where you shine.",
                    best.completion_rate.round(),
                    best.name
                ),
            ));
        }

        if worst.completion_rate < t.category_weak_rate && worst.total_tasks > t.category_min_tasks
        {
            findings.push(
                Finding::new(
                    InsightKind::StrugglingCategory,
                    InsightType::Suggestion,
                    Priority::Medium,
                    format!("{} Needs Attention", worst.name),
                    format!(
                        "Only {:.0}% of your {} tasks get done. Try breaking them into smaller goals.",
                        worst.completion_rate.round(),
                        worst.name
                    ),
                )
                .with_action(ActionType::Modal, "Break into smaller goals"),
            );
        }

        Ok(findings)
    }
}

/// Category with the highest completion rate; the first one wins ties
pub fn best_category(categories: &[CategoryStats]) -> Option<&CategoryStats> {
    categories.iter().fold(None, |best, c| match best {
        Some(b) if c.completion_rate <= b.completion_rate => Some(b),
        _ => Some(c),
    })
}

/// Category with the lowest completion rate; the first one wins ties
pub fn worst_category(categories: &[CategoryStats]) -> Option<&CategoryStats> {
    categories.iter().fold(None, |worst, c| match worst {
        Some(w) if c.completion_rate >= w.completion_rate => Some(w),
        _ => Some(c),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Thresholds;
    use crate::models::StatisticsSummary;
    use crate::test_utils::*;

    fn analyze(categories: Vec<CategoryStats>) -> Vec<Finding> {
        let stats = StatisticsSummary {
            categories,
            ..Default::default()
        };
        let thresholds = Thresholds::default();
        let ctx = AnalysisContext::new(&stats, &[], &thresholds);
        CategoryAnalyzer::new().analyze(&ctx).unwrap()
    }

    #[test]
    fn test_strength_and_suggestion() {
        let findings = analyze(vec![category("A", 90.0, 10), category("B", 30.0, 5)]);
        assert_eq!(findings.len(), 2);

        assert_eq!(findings[0].kind, InsightKind::TopCategory);
        assert_eq!(findings[0].insight_type, InsightType::Strength);
        assert!(findings[0].message.contains("90% of your A tasks"));

        assert_eq!(findings[1].kind, InsightKind::StrugglingCategory);
        assert!(findings[1].message.contains("30% of your B tasks"));
        assert_eq!(
            findings[1].action.as_ref().map(|a| a.action_type),
            Some(ActionType::Modal)
        );
    }

    #[test]
    fn test_no_categories_is_quiet() {
        assert!(analyze(vec![]).is_empty());
    }

    #[test]
    fn test_sparse_weak_category_is_ignored() {
        let findings = analyze(vec![category("A", 60.0, 10), category("B", 10.0, 2)]);
        assert!(findings.is_empty());
    }

    #[test]
    fn test_best_at_exactly_eighty_is_a_strength() {
        let findings = analyze(vec![category("Work", 80.0, 10), category("Home", 60.0, 10)]);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].kind, InsightKind::TopCategory);
    }

    #[test]
    fn test_worst_at_exactly_fifty_is_not_flagged() {
        let findings = analyze(vec![category("Work", 70.0, 10), category("Home", 50.0, 10)]);
        assert!(findings.is_empty());
    }

    #[test]
    fn test_weak_category_with_three_tasks_is_flagged() {
        let findings = analyze(vec![category("Work", 70.0, 10), category("Home", 10.0, 3)]);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].kind, InsightKind::StrugglingCategory);
        assert!(findings[0].message.contains("Home"));
    }

    #[test]
    fn test_single_category_is_best_and_worst() {
        let findings = analyze(vec![category("Solo", 85.0, 8)]);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].kind, InsightKind::TopCategory);

        let findings = analyze(vec![category("Solo", 20.0, 8)]);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].kind, InsightKind::StrugglingCategory);
    }

    #[test]
    fn test_ties_resolve_to_first() {
        let categories = vec![
            category("First", 80.0, 4),
            category("Second", 80.0, 4),
            category("Low", 40.0, 4),
            category("AlsoLow", 40.0, 4),
        ];
        assert_eq!(best_category(&categories).unwrap().name, "First");
        assert_eq!(worst_category(&categories).unwrap().name, "Low");
    }

    #[test]
    fn test_nan_rate_is_an_error() {
        let stats = StatisticsSummary {
            categories: vec![category("Broken", f64::NAN, 3)],
            ..Default::default()
        };
        let thresholds = Thresholds::default();
        let ctx = AnalysisContext::new(&stats, &[], &thresholds);
        assert!(CategoryAnalyzer::new().analyze(&ctx).is_err());
    }
}
