//! Cadence Core Library
//!
//! Productivity insight engine for task lists:
//! - Data model for statistics snapshots and task records
//! - Independent analyzers (trend, today, overdue, category, milestone, weekly pattern)
//! - Insight engine that ranks findings and returns the top few
//! - Threshold configuration with embedded defaults and file overrides
//!
//! The engine performs no I/O. Snapshots are produced elsewhere and passed in.

pub mod config;
pub mod error;
pub mod insights;
pub mod models;

/// Test utilities for building snapshots
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use config::{EngineConfig, Thresholds, MAX_INSIGHTS};
pub use error::{Error, Result};
pub use insights::{
    ActionType, Analyzer, InsightEngine, InsightKind, InsightType, Priority, ProductivityInsight,
};
pub use models::{CategoryStats, DailyTrend, OverdueStats, StatisticsSummary, TodayStats, Todo};
