//! Trend Insight
//!
//! Compares the most recent window of daily completion rates against the
//! window before it (momentum), and checks how steady completion rates are
//! across the whole trend (consistency). The two checks are independent.

use crate::error::Result;
use crate::models::DailyTrend;

use super::engine::{finite, AnalysisContext, Analyzer};
use super::types::{ActionType, AnalyzerId, Finding, InsightKind, InsightType, Priority};

/// Analyzer for momentum and consistency across daily trends
pub struct TrendAnalyzer;

impl TrendAnalyzer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TrendAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer for TrendAnalyzer {
    fn id(&self) -> AnalyzerId {
        AnalyzerId::Trend
    }

    fn name(&self) -> &'static str {
        "Trend"
    }

    fn analyze(&self, ctx: &AnalysisContext<'_>) -> Result<Vec<Finding>> {
        let t = ctx.thresholds;
        let rates = completion_rates(&ctx.stats.trends.daily)?;
        let window = t.momentum_span();
        let mut findings = Vec::new();

        let momentum = if rates.len() >= t.momentum_min_entries() {
            window_averages(&rates, window)
        } else {
            None
        };

        if let Some((recent, previous)) = momentum {
            if recent - previous > t.momentum_delta {
                findings.push(Finding::new(
                    InsightKind::ImprovingTrend,
                    InsightType::Achievement,
                    Priority::High,
                    "Productivity Rising",
                    format!(
                        "Your completion rate is up {:.0}% over the last {} days. Keep the momentum going!",
                        (recent - previous).round(),
                        window
                    ),
                ));
            } else if previous - recent > t.momentum_delta {
                findings.push(
                    Finding::new(
                        InsightKind::DecliningTrend,
                        InsightType::Weakness,
                        Priority::High,
                        "Productivity Slipping",
                        format!(
                            "Your completion rate dropped {:.0}% over the last {} days. Try setting fewer, smaller goals.",
                            (previous - recent).round(),
                            window
                        ),
                    )
                    .with_action(ActionType::Function, "Reset goals"),
                );
            }
        }

        if population_variance(&rates) < t.consistency_variance {
            findings.push(Finding::new(
                InsightKind::ConsistentPerformance,
                InsightType::Strength,
                Priority::Medium,
                "Consistent Performance",
                "You're completing tasks at a steady rate day after day.",
            ));
        }

        Ok(findings)
    }
}

fn completion_rates(daily: &[DailyTrend]) -> Result<Vec<f64>> {
    daily
        .iter()
        .map(|d| finite(&format!("completion rate for {}", d.date), d.completion_rate))
        .collect()
}

/// Mean of the last `window` rates and of the `window` rates before those.
///
/// Returns `None` when there are fewer than `2 * window` rates.
pub fn window_averages(rates: &[f64], window: usize) -> Option<(f64, f64)> {
    if window == 0 || rates.len() < window * 2 {
        return None;
    }

    let end = rates.len();
    let recent = mean(&rates[end - window..]);
    let previous = mean(&rates[end - window * 2..end - window]);
    Some((recent, previous))
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Mean of squared deviations from the mean; 0 for an empty slice
pub fn population_variance(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let avg = mean(values);
    values.iter().map(|v| (v - avg).powi(2)).sum::<f64>() / values.len() as f64
}
