//! Insight Engine - Productivity Insights
//!
//! The Insight Engine turns a statistics snapshot and the raw task list into a
//! short, ranked list of observations about how the user is working. Each
//! analyzer is independent; the engine runs them all, ranks their findings by
//! priority, and keeps the top few.
//!
//! ## Analyzers
//!
//! - **Trend** - Momentum between recent windows, and day-to-day consistency
//! - **Today** - Strong day, or tasks still due
//! - **Overdue** - No overdue tasks, or a buildup
//! - **Category** - Best and worst categories
//! - **Milestone** - Total completed tasks
//! - **Weekly Pattern** - Best and worst weekday (opt-in)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use cadence_core::insights::InsightEngine;
//!
//! let engine = InsightEngine::new();
//! let insights = engine.generate_insights(&stats, &todos);
//! ```

pub mod category;
pub mod engine;
pub mod milestone;
pub mod overdue;
pub mod today;
pub mod trend;
pub mod types;
pub mod weekly;

pub use category::CategoryAnalyzer;
pub use engine::{rank_findings, AnalysisContext, Analyzer, InsightEngine};
pub use milestone::MilestoneAnalyzer;
pub use overdue::OverdueAnalyzer;
pub use today::TodayAnalyzer;
pub use trend::TrendAnalyzer;
pub use types::{
    ActionType, AnalyzerId, Finding, InsightAction, InsightKind, InsightType, Priority,
    ProductivityInsight,
};
pub use weekly::{WeekdayAverage, WeeklyPatternAnalyzer};
