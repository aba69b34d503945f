//! Shared loaders used by the other commands

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use cadence_core::{EngineConfig, StatisticsSummary, Todo};

/// Load thresholds from an explicit path or the default override location
pub fn load_engine_config(config_path: Option<&Path>) -> Result<EngineConfig> {
    let config = match config_path {
        Some(path) => EngineConfig::load_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => EngineConfig::load().context("Failed to load config")?,
    };
    Ok(config)
}

/// Read a statistics snapshot from a JSON file
pub fn load_stats(path: &Path) -> Result<StatisticsSummary> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read statistics from {}", path.display()))?;
    StatisticsSummary::from_json(&content)
        .with_context(|| format!("Invalid statistics snapshot in {}", path.display()))
}

/// Read a task list from a JSON file; no path means no tasks
pub fn load_todos(path: Option<&Path>) -> Result<Vec<Todo>> {
    let Some(path) = path else {
        return Ok(vec![]);
    };

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read todos from {}", path.display()))?;
    let todos = Todo::list_from_json(&content)
        .with_context(|| format!("Invalid todo list in {}", path.display()))?;

    tracing::debug!(count = todos.len(), "Loaded todos");
    Ok(todos)
}
