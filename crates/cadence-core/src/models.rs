//! Domain models for Cadence
//!
//! These are the already-normalized records handed to the engine by the
//! statistics and task-list providers. Field names serialize in camelCase to
//! match the JSON the rest of the application exchanges.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Snapshot of task activity the insight analyzers read from
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsSummary {
    #[serde(default)]
    pub today: TodayStats,
    #[serde(default)]
    pub overdue: OverdueStats,
    #[serde(default)]
    pub categories: Vec<CategoryStats>,
    #[serde(default)]
    pub trends: TrendStats,
}

impl StatisticsSummary {
    /// Parse a snapshot from its JSON representation
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Counts for the current day
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodayStats {
    pub total: u32,
    pub completed: u32,
    /// Tasks with a due date of today
    pub due: u32,
    /// Of the tasks due today, how many are done
    pub due_completed: u32,
    pub overdue: u32,
    /// Percentage in [0, 100]
    pub completion_rate: f64,
}

impl TodayStats {
    /// Tasks due today that are still open
    pub fn due_remaining(&self) -> u32 {
        self.due.saturating_sub(self.due_completed)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverdueStats {
    pub total: u32,
    #[serde(default)]
    pub items: Vec<OverdueItem>,
}

/// A single task past its due date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverdueItem {
    pub id: String,
    pub title: String,
    pub due_date: NaiveDate,
    pub days_overdue: u32,
}

/// Aggregates for one task category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryStats {
    pub id: String,
    pub name: String,
    pub total_tasks: u32,
    pub completed_tasks: u32,
    /// Percentage in [0, 100]
    pub completion_rate: f64,
    /// Average time to complete, in minutes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_duration: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendStats {
    /// Ordered oldest to newest
    #[serde(default)]
    pub daily: Vec<DailyTrend>,
}

/// One day's aggregated completion statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyTrend {
    pub date: NaiveDate,
    /// Percentage in [0, 100]
    pub completion_rate: f64,
    pub total_tasks: u32,
    pub completed_tasks: u32,
    pub overdue_count: u32,
}

impl DailyTrend {
    /// Day of week with 0 = Sunday through 6 = Saturday
    pub fn weekday_index(&self) -> usize {
        self.date.weekday().num_days_from_sunday() as usize
    }
}

/// An individual task record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: String,
    #[serde(default)]
    pub title: String,
    pub completed: bool,
    /// 1 (lowest) to 5 (highest)
    pub importance: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Todo {
    /// Parse a list of todos from its JSON representation
    pub fn list_from_json(json: &str) -> Result<Vec<Self>> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Number of completed todos across the whole list
pub fn completed_count(todos: &[Todo]) -> usize {
    todos.iter().filter(|t| t.completed).count()
}
