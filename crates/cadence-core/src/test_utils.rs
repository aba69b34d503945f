//! Test utilities for building statistics snapshots and task lists
//!
//! Enabled for unit tests and for downstream crates via the `test-utils` feature.

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};

use crate::models::{CategoryStats, DailyTrend, StatisticsSummary, TodayStats, Todo};

/// Fixed generation time for deterministic insight ids
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 18, 12, 0, 0)
        .single()
        .expect("valid timestamp")
}

/// First day of every generated series (a Sunday)
pub fn series_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 4).expect("valid date")
}

/// Consecutive daily trend entries starting on a Sunday, one per rate
pub fn trend_series(rates: &[f64]) -> Vec<DailyTrend> {
    rates
        .iter()
        .enumerate()
        .map(|(i, &rate)| DailyTrend {
            date: series_start() + Duration::days(i as i64),
            completion_rate: rate,
            total_tasks: 10,
            completed_tasks: (rate / 10.0).round() as u32,
            overdue_count: 0,
        })
        .collect()
}

/// Snapshot with only a daily trend filled in
pub fn stats_with_daily(rates: &[f64]) -> StatisticsSummary {
    let mut stats = StatisticsSummary::default();
    stats.trends.daily = trend_series(rates);
    stats
}

pub fn today(completion_rate: f64, due: u32, due_completed: u32) -> TodayStats {
    TodayStats {
        total: due,
        completed: due_completed,
        due,
        due_completed,
        overdue: 0,
        completion_rate,
    }
}

pub fn category(name: &str, completion_rate: f64, total_tasks: u32) -> CategoryStats {
    CategoryStats {
        id: name.to_lowercase(),
        name: name.to_string(),
        total_tasks,
        completed_tasks: ((total_tasks as f64) * completion_rate / 100.0).round() as u32,
        completion_rate,
        average_duration: None,
    }
}

/// `completed` finished todos followed by `open` unfinished ones
pub fn todos(completed: usize, open: usize) -> Vec<Todo> {
    let created = fixed_now() - Duration::days(30);
    (0..completed + open)
        .map(|i| {
            let done = i < completed;
            Todo {
                id: format!("todo-{}", i),
                title: format!("Task {}", i),
                completed: done,
                importance: (i % 5) as u8 + 1,
                category_id: None,
                due_date: None,
                completed_at: done.then(|| created + Duration::days(1)),
                created_at: created,
                updated_at: created,
            }
        })
        .collect()
}
