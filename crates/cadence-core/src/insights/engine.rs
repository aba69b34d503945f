//! Insight Engine - orchestrates the analyzers and ranks their findings

use std::panic::{self, AssertUnwindSafe};

use chrono::{DateTime, Utc};

use crate::config::{EngineConfig, Thresholds, MAX_INSIGHTS};
use crate::error::{Error, Result};
use crate::models::{StatisticsSummary, Todo};

use super::types::{AnalyzerId, Finding, ProductivityInsight};
use super::{
    CategoryAnalyzer, MilestoneAnalyzer, OverdueAnalyzer, TodayAnalyzer, TrendAnalyzer,
    WeeklyPatternAnalyzer,
};

/// Context provided to analyzers
pub struct AnalysisContext<'a> {
    /// Statistics snapshot for this generation
    pub stats: &'a StatisticsSummary,
    /// Full task list (not windowed)
    pub todos: &'a [Todo],
    pub thresholds: &'a Thresholds,
}

impl<'a> AnalysisContext<'a> {
    pub fn new(
        stats: &'a StatisticsSummary,
        todos: &'a [Todo],
        thresholds: &'a Thresholds,
    ) -> Self {
        Self {
            stats,
            todos,
            thresholds,
        }
    }
}

/// Trait for insight analyzers
pub trait Analyzer: Send + Sync {
    /// Unique identifier for this analyzer
    fn id(&self) -> AnalyzerId;

    /// Human-readable name
    fn name(&self) -> &'static str;

    /// Analyze the snapshot and produce findings
    fn analyze(&self, ctx: &AnalysisContext<'_>) -> Result<Vec<Finding>>;
}

/// Reject NaN and infinite rates before comparing them against thresholds
pub(crate) fn finite(label: &str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::InvalidData(format!("{} is not a finite number", label)))
    }
}

/// Stable-sort findings by priority (highest first) and keep the first `limit`.
///
/// Findings of equal priority keep the order their analyzers produced them in.
pub fn rank_findings(mut findings: Vec<Finding>, limit: usize) -> Vec<Finding> {
    findings.sort_by(|a, b| b.priority.weight().cmp(&a.priority.weight()));
    findings.truncate(limit);
    findings
}

/// The main insight engine. Holds no per-call state and can be shared freely.
pub struct InsightEngine {
    analyzers: Vec<Box<dyn Analyzer>>,
    config: EngineConfig,
}

impl Default for InsightEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl InsightEngine {
    /// Create a new engine with the default configuration
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Create an engine with built-in analyzers and the given configuration
    pub fn with_config(config: EngineConfig) -> Self {
        let include_weekly = config.include_weekly_patterns;
        let mut engine = Self {
            analyzers: vec![],
            config,
        };

        // Registration order is the tie-break order for equal priorities
        engine.register(Box::new(TrendAnalyzer::new()));
        engine.register(Box::new(TodayAnalyzer::new()));
        engine.register(Box::new(OverdueAnalyzer::new()));
        engine.register(Box::new(CategoryAnalyzer::new()));
        engine.register(Box::new(MilestoneAnalyzer::new()));
        if include_weekly {
            engine.register(Box::new(WeeklyPatternAnalyzer::new()));
        }

        engine
    }

    /// Register an additional analyzer, run after the existing ones
    pub fn register(&mut self, analyzer: Box<dyn Analyzer>) {
        self.analyzers.push(analyzer);
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Get list of registered analyzers in run order
    pub fn analyzer_ids(&self) -> Vec<AnalyzerId> {
        self.analyzers.iter().map(|a| a.id()).collect()
    }

    /// Run every analyzer and return the top-ranked insights.
    ///
    /// Never fails: an analyzer that errors or panics contributes no insights.
    pub fn generate_insights(
        &self,
        stats: &StatisticsSummary,
        todos: &[Todo],
    ) -> Vec<ProductivityInsight> {
        self.generate_insights_at(stats, todos, Utc::now())
    }

    /// Same as [`generate_insights`](Self::generate_insights) with an explicit generation time
    pub fn generate_insights_at(
        &self,
        stats: &StatisticsSummary,
        todos: &[Todo],
        generated_at: DateTime<Utc>,
    ) -> Vec<ProductivityInsight> {
        let ctx = AnalysisContext::new(stats, todos, &self.config.thresholds);
        let findings = run_analyzers(&self.analyzers, &ctx);
        let total = findings.len();

        let limit = self.config.max_insights.min(MAX_INSIGHTS);
        let insights = stamp(rank_findings(findings, limit), generated_at);

        tracing::debug!(
            findings = total,
            returned = insights.len(),
            "Insight generation complete"
        );
        insights
    }

    /// Run only the day-of-week analyzer. Callers opt in to this separately.
    pub fn analyze_weekly_patterns(&self, stats: &StatisticsSummary) -> Vec<ProductivityInsight> {
        self.analyze_weekly_patterns_at(stats, Utc::now())
    }

    pub fn analyze_weekly_patterns_at(
        &self,
        stats: &StatisticsSummary,
        generated_at: DateTime<Utc>,
    ) -> Vec<ProductivityInsight> {
        let ctx = AnalysisContext::new(stats, &[], &self.config.thresholds);
        let analyzers: Vec<Box<dyn Analyzer>> = vec![Box::new(WeeklyPatternAnalyzer::new())];
        let findings = run_analyzers(&analyzers, &ctx);
        stamp(findings, generated_at)
    }
}

fn run_analyzers(analyzers: &[Box<dyn Analyzer>], ctx: &AnalysisContext<'_>) -> Vec<Finding> {
    let mut all_findings = vec![];

    for analyzer in analyzers {
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| analyzer.analyze(ctx)));
        match outcome {
            Ok(Ok(findings)) => {
                tracing::debug!(
                    analyzer = analyzer.id().as_str(),
                    count = findings.len(),
                    "Analyzer complete"
                );
                all_findings.extend(findings);
            }
            Ok(Err(e)) => {
                tracing::warn!(
                    analyzer = analyzer.id().as_str(),
                    error = %e,
                    "Analyzer failed, skipping its insights"
                );
            }
            Err(payload) => {
                tracing::warn!(
                    analyzer = analyzer.id().as_str(),
                    error = panic_message(payload.as_ref()),
                    "Analyzer panicked, skipping its insights"
                );
            }
        }
    }

    all_findings
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> &str {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        *msg
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.as_str()
    } else {
        "unknown panic"
    }
}

fn stamp(findings: Vec<Finding>, generated_at: DateTime<Utc>) -> Vec<ProductivityInsight> {
    findings
        .into_iter()
        .enumerate()
        .map(|(seq, finding)| finding.into_insight(seq, generated_at))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::insights::types::{InsightKind, InsightType, Priority};
    use crate::test_utils::*;
    use std::collections::HashSet;

    struct FailingAnalyzer;

    impl Analyzer for FailingAnalyzer {
        fn id(&self) -> AnalyzerId {
            AnalyzerId::Today
        }

        fn name(&self) -> &'static str {
            "Failing"
        }

        fn analyze(&self, _ctx: &AnalysisContext<'_>) -> Result<Vec<Finding>> {
            Err(Error::InvalidData("boom".into()))
        }
    }

    struct PanickingAnalyzer;

    impl Analyzer for PanickingAnalyzer {
        fn id(&self) -> AnalyzerId {
            AnalyzerId::Trend
        }

        fn name(&self) -> &'static str {
            "Panicking"
        }

        fn analyze(&self, ctx: &AnalysisContext<'_>) -> Result<Vec<Finding>> {
            let first = &ctx.stats.trends.daily[0];
            Ok(vec![Finding::new(
                InsightKind::StrongDay,
                InsightType::Achievement,
                Priority::High,
                "First day",
                first.date.to_string(),
            )])
        }
    }

    struct FixedAnalyzer(Vec<Finding>);

    impl Analyzer for FixedAnalyzer {
        fn id(&self) -> AnalyzerId {
            AnalyzerId::Milestone
        }

        fn name(&self) -> &'static str {
            "Fixed"
        }

        fn analyze(&self, _ctx: &AnalysisContext<'_>) -> Result<Vec<Finding>> {
            Ok(self.0.clone())
        }
    }

    fn finding(kind: InsightKind, priority: Priority) -> Finding {
        Finding::new(kind, InsightType::Suggestion, priority, kind.as_str(), "msg")
    }

    #[test]
    fn test_engine_creation() {
        let engine = InsightEngine::new();
        assert_eq!(
            engine.analyzer_ids(),
            vec![
                AnalyzerId::Trend,
                AnalyzerId::Today,
                AnalyzerId::Overdue,
                AnalyzerId::Category,
                AnalyzerId::Milestone,
            ]
        );
    }

    #[test]
    fn test_weekly_analyzer_is_opt_in() {
        let config = EngineConfig {
            include_weekly_patterns: true,
            ..Default::default()
        };
        let engine = InsightEngine::with_config(config);
        assert_eq!(
            engine.analyzer_ids().last(),
            Some(&AnalyzerId::WeeklyPattern)
        );
    }

    #[test]
    fn test_empty_snapshot_does_not_fail() {
        let engine = InsightEngine::new();
        let insights = engine.generate_insights_at(&StatisticsSummary::default(), &[], fixed_now());

        // An empty trend list has zero variance and no overdue tasks
        let kinds: Vec<_> = insights.iter().map(|i| i.kind).collect();
        assert_eq!(
            kinds,
            vec![InsightKind::ConsistentPerformance, InsightKind::NoOverdue]
        );
    }

    #[test]
    fn test_rank_is_stable_within_priority() {
        let ranked = rank_findings(
            vec![
                finding(InsightKind::NoOverdue, Priority::Medium),
                finding(InsightKind::OverdueBuildup, Priority::High),
                finding(InsightKind::TopCategory, Priority::Medium),
                finding(InsightKind::WeeklyPattern, Priority::Low),
                finding(InsightKind::StrongDay, Priority::High),
            ],
            5,
        );

        let kinds: Vec<_> = ranked.iter().map(|f| f.kind).collect();
        assert_eq!(
            kinds,
            vec![
                InsightKind::OverdueBuildup,
                InsightKind::StrongDay,
                InsightKind::NoOverdue,
                InsightKind::TopCategory,
                InsightKind::WeeklyPattern,
            ]
        );
    }

    #[test]
    fn test_output_is_capped() {
        let mut engine = InsightEngine::new();
        engine.register(Box::new(FixedAnalyzer(vec![
            finding(InsightKind::WeeklyPattern, Priority::Low),
            finding(InsightKind::TopCategory, Priority::High),
            finding(InsightKind::StrugglingCategory, Priority::High),
            finding(InsightKind::StrongDay, Priority::High),
            finding(InsightKind::MasteryMilestone, Priority::High),
            finding(InsightKind::OverdueBuildup, Priority::High),
        ])));

        let insights = engine.generate_insights_at(&StatisticsSummary::default(), &[], fixed_now());
        assert_eq!(insights.len(), 5);
        assert!(insights.iter().all(|i| i.priority == Priority::High));
    }

    #[test]
    fn test_failing_analyzer_is_skipped() {
        let mut engine = InsightEngine::new();
        engine.register(Box::new(FailingAnalyzer));

        let mut stats = StatisticsSummary::default();
        stats.overdue.total = 6;
        let insights = engine.generate_insights_at(&stats, &[], fixed_now());

        assert!(insights
            .iter()
            .any(|i| i.kind == InsightKind::OverdueBuildup));
    }

    #[test]
    fn test_panicking_analyzer_is_skipped() {
        let mut engine = InsightEngine::new();
        engine.register(Box::new(PanickingAnalyzer));

        let mut stats = StatisticsSummary::default();
        stats.overdue.total = 6;
        let insights = engine.generate_insights_at(&stats, &[], fixed_now());

        let kinds: Vec<_> = insights.iter().map(|i| i.kind).collect();
        assert_eq!(
            kinds,
            vec![
                InsightKind::OverdueBuildup,
                InsightKind::ConsistentPerformance
            ]
        );
    }

    #[test]
    fn test_oversized_limit_is_clamped() {
        let config = EngineConfig {
            max_insights: 10,
            ..Default::default()
        };
        let mut engine = InsightEngine::with_config(config);
        engine.register(Box::new(FixedAnalyzer(vec![
            finding(InsightKind::StrongDay, Priority::High);
            8
        ])));

        let insights = engine.generate_insights_at(&StatisticsSummary::default(), &[], fixed_now());
        assert_eq!(insights.len(), MAX_INSIGHTS);
        assert_eq!(engine.config().max_insights, 10);
    }

    #[test]
    fn test_non_finite_rate_only_drops_that_analyzer() {
        let mut stats = StatisticsSummary::default();
        stats.today.completion_rate = f64::NAN;
        stats.today.due = 3;

        let insights = InsightEngine::new().generate_insights_at(&stats, &[], fixed_now());
        assert!(insights.iter().any(|i| i.kind == InsightKind::NoOverdue));
        assert!(!insights
            .iter()
            .any(|i| matches!(i.kind, InsightKind::StrongDay | InsightKind::LowCompletionToday)));
    }

    #[test]
    fn test_ids_unique_within_generation() {
        let stats = stats_with_daily(&[50.0; 7]);
        let todos = todos(50, 3);
        let insights = InsightEngine::new().generate_insights_at(&stats, &todos, fixed_now());

        let ids: HashSet<_> = insights.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids.len(), insights.len());
        assert!(insights.iter().all(|i| i.generated_at == fixed_now()));
    }

    #[test]
    fn test_full_snapshot_ranking() {
        let mut stats = stats_with_daily(&[40.0, 40.0, 40.0, 70.0, 70.0, 70.0]);
        stats.today = today(85.0, 5, 5);
        stats.overdue.total = 0;
        stats.categories = vec![category("Work", 90.0, 10), category("Errands", 30.0, 5)];
        let todos = todos(55, 5);

        let insights = InsightEngine::new().generate_insights_at(&stats, &todos, fixed_now());

        let kinds: Vec<_> = insights.iter().map(|i| i.kind).collect();
        assert_eq!(
            kinds,
            vec![
                InsightKind::ImprovingTrend,
                InsightKind::StrongDay,
                InsightKind::MasteryMilestone,
                InsightKind::NoOverdue,
                InsightKind::TopCategory,
            ]
        );
    }

    #[test]
    fn test_weekly_patterns_run_separately() {
        // Sunday-anchored fortnight with strong Mondays and weak Fridays
        let rates = [
            60.0, 95.0, 60.0, 60.0, 60.0, 20.0, 60.0, 60.0, 95.0, 60.0, 60.0, 60.0, 20.0, 60.0,
        ];
        let stats = stats_with_daily(&rates);
        let engine = InsightEngine::new();

        let main = engine.generate_insights_at(&stats, &[], fixed_now());
        assert!(!main.iter().any(|i| i.kind == InsightKind::WeeklyPattern));

        let weekly = engine.analyze_weekly_patterns_at(&stats, fixed_now());
        assert_eq!(weekly.len(), 1);
        assert_eq!(weekly[0].kind, InsightKind::WeeklyPattern);
    }

    mod properties {
        use super::*;
        use crate::models::StatisticsSummary;
        use proptest::prelude::*;

        fn arb_stats() -> impl Strategy<Value = StatisticsSummary> {
            (
                0.0..=100.0f64,
                0u32..10,
                0u32..10,
                0u32..20,
                prop::collection::vec((0.0..=100.0f64, 0u32..20), 0..6),
                prop::collection::vec(0.0..=100.0f64, 0..15),
            )
                .prop_map(|(rate, due, done, overdue, cats, daily)| {
                    let mut stats = stats_with_daily(&daily);
                    stats.today = today(rate, due, done.min(due));
                    stats.overdue.total = overdue;
                    stats.categories = cats
                        .into_iter()
                        .enumerate()
                        .map(|(i, (rate, tasks))| category(&format!("Cat{}", i), rate, tasks))
                        .collect();
                    stats
                })
        }

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(200))]

            /// Output is capped and never ranks a lower priority above a higher one
            #[test]
            fn prop_output_bounded_and_sorted(
                stats in arb_stats(),
                completed in 0usize..80,
                weekly in any::<bool>(),
            ) {
                let config = EngineConfig {
                    include_weekly_patterns: weekly,
                    ..Default::default()
                };
                let engine = InsightEngine::with_config(config);
                let todos = todos(completed, 3);

                let insights = engine.generate_insights_at(&stats, &todos, fixed_now());

                prop_assert!(insights.len() <= 5);
                for pair in insights.windows(2) {
                    prop_assert!(pair[0].priority.weight() >= pair[1].priority.weight());
                }
            }
        }
    }
}
