//! Weekly Pattern Insight
//!
//! Averages completion rates per day of the week and, when the best and worst
//! days are far apart, suggests scheduling important work on the best day.
//! Not part of the default battery; callers opt in.

use crate::error::Result;
use crate::models::DailyTrend;

use super::engine::{finite, AnalysisContext, Analyzer};
use super::types::{ActionType, AnalyzerId, Finding, InsightKind, InsightType, Priority};

const DAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Average completion rate for one day of the week
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeekdayAverage {
    /// 0 = Sunday through 6 = Saturday
    pub weekday: usize,
    pub average: f64,
}

impl WeekdayAverage {
    pub fn day_name(&self) -> &'static str {
        DAY_NAMES[self.weekday % 7]
    }
}

/// Analyzer for best and worst days of the week
pub struct WeeklyPatternAnalyzer;

impl WeeklyPatternAnalyzer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for WeeklyPatternAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer for WeeklyPatternAnalyzer {
    fn id(&self) -> AnalyzerId {
        AnalyzerId::WeeklyPattern
    }

    fn name(&self) -> &'static str {
        "Weekly Pattern"
    }

    fn analyze(&self, ctx: &AnalysisContext<'_>) -> Result<Vec<Finding>> {
        let t = ctx.thresholds;
        let daily = &ctx.stats.trends.daily;

        if daily.len() < t.weekly_min_entries {
            return Ok(vec![]);
        }

        let averages = weekday_averages(daily)?;
        let (Some(best), Some(worst)) = (best_day(&averages), worst_day(&averages)) else {
            return Ok(vec![]);
        };

        if best.average - worst.average <= t.weekly_gap {
            return Ok(vec![]);
        }

        let finding = Finding::new(
            InsightKind::WeeklyPattern,
            InsightType::Suggestion,
            Priority::Medium,
            format!("{}s Are Your Best Day", best.day_name()),
            format!(
                "You complete {:.0}% of tasks on {}s but only {:.0}% on {}s. Schedule important work for {}.",
                best.average.round(),
                best.day_name(),
                worst.average.round(),
                worst.day_name(),
                best.day_name()
            ),
        )
        .with_action(ActionType::Navigate, format!("Plan {}", best.day_name()));

        Ok(vec![finding])
    }
}

/// Average completion rate per weekday, Sunday first, for the days present
pub fn weekday_averages(daily: &[DailyTrend]) -> Result<Vec<WeekdayAverage>> {
    let mut sums = [0.0_f64; 7];
    let mut counts = [0_usize; 7];

    for entry in daily {
        let rate = finite(
            &format!("completion rate for {}", entry.date),
            entry.completion_rate,
        )?;
        let day = entry.weekday_index();
        sums[day] += rate;
        counts[day] += 1;
    }

    Ok((0..7)
        .filter(|&day| counts[day] > 0)
        .map(|day| WeekdayAverage {
            weekday: day,
            average: sums[day] / counts[day] as f64,
        })
        .collect())
}

fn best_day(averages: &[WeekdayAverage]) -> Option<WeekdayAverage> {
    averages.iter().copied().fold(None, |best, d| match best {
        Some(b) if d.average <= b.average => Some(b),
        _ => Some(d),
    })
}

fn worst_day(averages: &[WeekdayAverage]) -> Option<WeekdayAverage> {
    averages.iter().copied().fold(None, |worst, d| match worst {
        Some(w) if d.average >= w.average => Some(w),
        _ => Some(d),
    })
}
