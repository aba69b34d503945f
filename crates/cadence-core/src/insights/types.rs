//! Core types for the Insight Engine

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifies a registered analyzer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalyzerId {
    /// Momentum and consistency across daily trends
    Trend,
    /// Today's completion rate
    Today,
    /// Overdue task buildup
    Overdue,
    /// Best and worst categories
    Category,
    /// Completed-task milestones
    Milestone,
    /// Best and worst day of the week
    WeeklyPattern,
}

impl AnalyzerId {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalyzerId::Trend => "trend",
            AnalyzerId::Today => "today",
            AnalyzerId::Overdue => "overdue",
            AnalyzerId::Category => "category",
            AnalyzerId::Milestone => "milestone",
            AnalyzerId::WeeklyPattern => "weekly_pattern",
        }
    }
}

impl fmt::Display for AnalyzerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Broad category of an insight, used by the UI for styling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightType {
    /// Something the user accomplished
    Achievement,
    /// A pattern worth keeping
    Strength,
    /// A pattern that is hurting productivity
    Weakness,
    /// A concrete next step
    Suggestion,
}

impl InsightType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InsightType::Achievement => "achievement",
            InsightType::Strength => "strength",
            InsightType::Weakness => "weakness",
            InsightType::Suggestion => "suggestion",
        }
    }
}

impl fmt::Display for InsightType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for InsightType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "achievement" => Ok(InsightType::Achievement),
            "strength" => Ok(InsightType::Strength),
            "weakness" => Ok(InsightType::Weakness),
            "suggestion" => Ok(InsightType::Suggestion),
            _ => Err(format!("Unknown insight type: {}", s)),
        }
    }
}

/// The rule that produced an insight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightKind {
    ImprovingTrend,
    DecliningTrend,
    ConsistentPerformance,
    StrongDay,
    LowCompletionToday,
    NoOverdue,
    OverdueBuildup,
    TopCategory,
    StrugglingCategory,
    WeeklyPattern,
    MasteryMilestone,
    SteadyMilestone,
}

impl InsightKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            InsightKind::ImprovingTrend => "improving_trend",
            InsightKind::DecliningTrend => "declining_trend",
            InsightKind::ConsistentPerformance => "consistent_performance",
            InsightKind::StrongDay => "strong_day",
            InsightKind::LowCompletionToday => "low_completion_today",
            InsightKind::NoOverdue => "no_overdue",
            InsightKind::OverdueBuildup => "overdue_buildup",
            InsightKind::TopCategory => "top_category",
            InsightKind::StrugglingCategory => "struggling_category",
            InsightKind::WeeklyPattern => "weekly_pattern",
            InsightKind::MasteryMilestone => "mastery_milestone",
            InsightKind::SteadyMilestone => "steady_milestone",
        }
    }
}

impl fmt::Display for InsightKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for InsightKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "improving_trend" => Ok(InsightKind::ImprovingTrend),
            "declining_trend" => Ok(InsightKind::DecliningTrend),
            "consistent_performance" => Ok(InsightKind::ConsistentPerformance),
            "strong_day" => Ok(InsightKind::StrongDay),
            "low_completion_today" => Ok(InsightKind::LowCompletionToday),
            "no_overdue" => Ok(InsightKind::NoOverdue),
            "overdue_buildup" => Ok(InsightKind::OverdueBuildup),
            "top_category" => Ok(InsightKind::TopCategory),
            "struggling_category" => Ok(InsightKind::StrugglingCategory),
            "weekly_pattern" => Ok(InsightKind::WeeklyPattern),
            "mastery_milestone" => Ok(InsightKind::MasteryMilestone),
            "steady_milestone" => Ok(InsightKind::SteadyMilestone),
            _ => Err(format!("Unknown insight kind: {}", s)),
        }
    }
}

/// How urgent an insight is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    /// Numeric weight for ranking (higher = shown first)
    pub fn weight(&self) -> u8 {
        match self {
            Priority::Low => 1,
            Priority::Medium => 2,
            Priority::High => 3,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            _ => Err(format!("Unknown priority: {}", s)),
        }
    }
}

/// Hint for how the UI should dispatch an actionable insight.
/// The engine never interprets it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionType {
    Navigate,
    Modal,
    Function,
}

impl ActionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionType::Navigate => "navigate",
            ActionType::Modal => "modal",
            ActionType::Function => "function",
        }
    }
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ActionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "navigate" => Ok(ActionType::Navigate),
            "modal" => Ok(ActionType::Modal),
            "function" => Ok(ActionType::Function),
            _ => Err(format!("Unknown action type: {}", s)),
        }
    }
}

/// A call to action attached to a finding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsightAction {
    pub text: String,
    pub action_type: ActionType,
}

/// A finding produced by an analyzer (before the engine stamps it)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    /// Rule that generated this finding
    pub kind: InsightKind,
    pub insight_type: InsightType,
    pub priority: Priority,
    /// Short title (e.g., "Great Progress")
    pub title: String,
    /// Human-readable message including the computed numbers
    pub message: String,
    pub action: Option<InsightAction>,
}

impl Finding {
    /// Create a new finding with no action attached
    pub fn new(
        kind: InsightKind,
        insight_type: InsightType,
        priority: Priority,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            insight_type,
            priority,
            title: title.into(),
            message: message.into(),
            action: None,
        }
    }

    /// Mark the finding actionable
    pub fn with_action(mut self, action_type: ActionType, text: impl Into<String>) -> Self {
        self.action = Some(InsightAction {
            text: text.into(),
            action_type,
        });
        self
    }

    pub fn is_actionable(&self) -> bool {
        self.action.is_some()
    }

    /// Stamp the finding with an id and generation time
    pub fn into_insight(self, sequence: usize, generated_at: DateTime<Utc>) -> ProductivityInsight {
        let id = format!(
            "{}-{}-{}",
            self.kind.as_str(),
            generated_at.timestamp_millis(),
            sequence
        );
        let actionable = self.is_actionable();
        let (action_text, action_type) = match self.action {
            Some(action) => (Some(action.text), Some(action.action_type)),
            None => (None, None),
        };

        ProductivityInsight {
            id,
            insight_type: self.insight_type,
            kind: self.kind,
            title: self.title,
            message: self.message,
            actionable,
            action_text,
            action_type,
            priority: self.priority,
            generated_at,
        }
    }
}

/// An insight as handed to the presentation layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductivityInsight {
    /// Display/debugging key, unique within one generation
    pub id: String,
    #[serde(rename = "type")]
    pub insight_type: InsightType,
    pub kind: InsightKind,
    pub title: String,
    pub message: String,
    pub actionable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_type: Option<ActionType>,
    pub priority: Priority,
    pub generated_at: DateTime<Utc>,
}
