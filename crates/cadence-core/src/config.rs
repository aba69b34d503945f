//! Engine configuration
//!
//! Every threshold the analyzers use is a fixed, hand-tuned constant. They are
//! collected here so an installation can adjust them without a rebuild.
//!
//! ## Configuration Resolution
//!
//! Config is loaded with a two-layer resolution:
//! 1. Check for override in data dir (~/.local/share/cadence/config/insights.toml)
//! 2. Fall back to embedded defaults (compiled into binary)

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};

/// Embedded default config (compiled into binary)
const DEFAULT_CONFIG: &str = include_str!("../../../config/insights.toml");

/// Upper bound on insights returned per generation
pub const MAX_INSIGHTS: usize = 5;

/// Smallest momentum window; two windows need at least six trend entries
pub const MIN_MOMENTUM_WINDOW: usize = 3;

/// Thresholds used by the individual analyzers
#[derive(Debug, Clone, PartialEq)]
pub struct Thresholds {
    /// Entries in each momentum window
    pub momentum_window: usize,
    /// Strict percentage-point change needed to report a trend
    pub momentum_delta: f64,
    /// Variance below which performance is consistent
    pub consistency_variance: f64,
    pub today_strong_rate: f64,
    pub today_low_rate: f64,
    /// Overdue count above which a buildup is reported
    pub overdue_buildup: u32,
    pub category_strong_rate: f64,
    pub category_weak_rate: f64,
    /// A weak category needs strictly more tasks than this
    pub category_min_tasks: u32,
    pub weekly_min_entries: usize,
    /// Strict gap between best and worst weekday averages
    pub weekly_gap: f64,
    pub mastery_completed: usize,
    pub steady_completed: usize,
}

impl Thresholds {
    /// Momentum window actually used, never below [`MIN_MOMENTUM_WINDOW`]
    pub fn momentum_span(&self) -> usize {
        self.momentum_window.max(MIN_MOMENTUM_WINDOW)
    }

    /// Trend entries needed before momentum is evaluated
    pub fn momentum_min_entries(&self) -> usize {
        self.momentum_span() * 2
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            momentum_window: 3,
            momentum_delta: 10.0,
            consistency_variance: 100.0,
            today_strong_rate: 80.0,
            today_low_rate: 30.0,
            overdue_buildup: 5,
            category_strong_rate: 80.0,
            category_weak_rate: 50.0,
            category_min_tasks: 2,
            weekly_min_entries: 7,
            weekly_gap: 20.0,
            mastery_completed: 50,
            steady_completed: 20,
        }
    }
}

/// Top-level engine configuration
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Maximum insights returned per generation
    pub max_insights: usize,
    /// Append the day-of-week analyzer to the main battery
    pub include_weekly_patterns: bool,
    pub thresholds: Thresholds,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_insights: 5,
            include_weekly_patterns: false,
            thresholds: Thresholds::default(),
        }
    }
}

impl EngineConfig {
    /// Load from the default override location, falling back to embedded defaults
    pub fn load() -> Result<Self> {
        load_config(None)
    }

    /// Load from an explicit path, falling back to embedded defaults if it doesn't exist
    pub fn load_from(path: &Path) -> Result<Self> {
        load_config(Some(path))
    }

    /// Parse config from TOML content
    pub fn from_toml(content: &str) -> Result<Self> {
        parse_config(content)
    }
}

/// Default config override path
pub fn default_config_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join("cadence").join("config").join("insights.toml"))
}

fn load_config(override_path: Option<&Path>) -> Result<EngineConfig> {
    let path = match override_path {
        Some(path) => Some(path.to_path_buf()),
        None => default_config_path(),
    };

    let content = match path {
        Some(path) if path.exists() => {
            tracing::debug!(path = %path.display(), "Loading insight config override");
            fs::read_to_string(&path)?
        }
        _ => DEFAULT_CONFIG.to_string(),
    };

    parse_config(&content)
}

/// Raw config structure for TOML parsing
#[derive(Debug, Deserialize)]
struct RawConfig {
    engine: Option<RawEngine>,
    trend: Option<RawTrend>,
    today: Option<RawRates>,
    overdue: Option<RawOverdue>,
    category: Option<RawCategory>,
    weekly: Option<RawWeekly>,
    milestone: Option<RawMilestone>,
}

#[derive(Debug, Deserialize)]
struct RawEngine {
    max_insights: Option<usize>,
    include_weekly_patterns: Option<bool>,
}

#[derive(Debug, Deserialize)]
struct RawTrend {
    momentum_window: Option<usize>,
    momentum_delta: Option<f64>,
    consistency_variance: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct RawRates {
    strong_rate: Option<f64>,
    low_rate: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct RawOverdue {
    buildup_count: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct RawCategory {
    strong_rate: Option<f64>,
    weak_rate: Option<f64>,
    min_tasks: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct RawWeekly {
    min_entries: Option<usize>,
    gap: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct RawMilestone {
    mastery: Option<usize>,
    steady: Option<usize>,
}

fn parse_config(content: &str) -> Result<EngineConfig> {
    let raw: RawConfig = toml::from_str(content)
        .map_err(|e| Error::Config(format!("Invalid config TOML: {}", e)))?;

    let mut config = EngineConfig::default();
    let t = &mut config.thresholds;

    if let Some(engine) = raw.engine {
        if let Some(max) = engine.max_insights {
            config.max_insights = max;
        }
        if let Some(include) = engine.include_weekly_patterns {
            config.include_weekly_patterns = include;
        }
    }

    if let Some(trend) = raw.trend {
        if let Some(window) = trend.momentum_window {
            t.momentum_window = window;
        }
        if let Some(delta) = trend.momentum_delta {
            t.momentum_delta = delta;
        }
        if let Some(variance) = trend.consistency_variance {
            t.consistency_variance = variance;
        }
    }

    if let Some(today) = raw.today {
        if let Some(rate) = today.strong_rate {
            t.today_strong_rate = rate;
        }
        if let Some(rate) = today.low_rate {
            t.today_low_rate = rate;
        }
    }

    if let Some(overdue) = raw.overdue {
        if let Some(count) = overdue.buildup_count {
            t.overdue_buildup = count;
        }
    }

    if let Some(category) = raw.category {
        if let Some(rate) = category.strong_rate {
            t.category_strong_rate = rate;
        }
        if let Some(rate) = category.weak_rate {
            t.category_weak_rate = rate;
        }
        if let Some(min) = category.min_tasks {
            t.category_min_tasks = min;
        }
    }

    if let Some(weekly) = raw.weekly {
        if let Some(min) = weekly.min_entries {
            t.weekly_min_entries = min;
        }
        if let Some(gap) = weekly.gap {
            t.weekly_gap = gap;
        }
    }

    if let Some(milestone) = raw.milestone {
        if let Some(mastery) = milestone.mastery {
            t.mastery_completed = mastery;
        }
        if let Some(steady) = milestone.steady {
            t.steady_completed = steady;
        }
    }

    validate(&config)?;
    Ok(config)
}

fn validate(config: &EngineConfig) -> Result<()> {
    let t = &config.thresholds;

    if !(1..=MAX_INSIGHTS).contains(&config.max_insights) {
        return Err(Error::Config(format!(
            "engine.max_insights must be between 1 and {}",
            MAX_INSIGHTS
        )));
    }
    if t.momentum_window < MIN_MOMENTUM_WINDOW {
        return Err(Error::Config(format!(
            "trend.momentum_window must be at least {}",
            MIN_MOMENTUM_WINDOW
        )));
    }
    if t.weekly_min_entries == 0 {
        return Err(Error::Config("weekly.min_entries must be at least 1".into()));
    }
    if t.steady_completed > t.mastery_completed {
        return Err(Error::Config(format!(
            "milestone.steady ({}) must not exceed milestone.mastery ({})",
            t.steady_completed, t.mastery_completed
        )));
    }

    let rates = [
        ("trend.momentum_delta", t.momentum_delta),
        ("trend.consistency_variance", t.consistency_variance),
        ("today.strong_rate", t.today_strong_rate),
        ("today.low_rate", t.today_low_rate),
        ("category.strong_rate", t.category_strong_rate),
        ("category.weak_rate", t.category_weak_rate),
        ("weekly.gap", t.weekly_gap),
    ];
    for (key, value) in rates {
        if !value.is_finite() {
            return Err(Error::Config(format!("{} must be a finite number", key)));
        }
    }

    Ok(())
}
