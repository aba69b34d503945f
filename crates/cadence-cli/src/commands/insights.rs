//! Insight command implementations

use std::path::Path;

use anyhow::Result;
use cadence_core::{InsightEngine, Priority, ProductivityInsight, MAX_INSIGHTS};

use super::{load_engine_config, load_stats, load_todos, truncate};

pub fn cmd_insights(
    config_path: Option<&Path>,
    stats_path: &Path,
    todos_path: Option<&Path>,
    limit: Option<usize>,
    weekly: bool,
    json: bool,
) -> Result<()> {
    let mut config = load_engine_config(config_path)?;
    if let Some(limit) = limit {
        if !(1..=MAX_INSIGHTS).contains(&limit) {
            anyhow::bail!("--limit must be between 1 and {}", MAX_INSIGHTS);
        }
        config.max_insights = limit;
    }
    if weekly {
        config.include_weekly_patterns = true;
    }

    let stats = load_stats(stats_path)?;
    let todos = load_todos(todos_path)?;

    let engine = InsightEngine::with_config(config);
    let insights = engine.generate_insights(&stats, &todos);
    tracing::info!(
        count = insights.len(),
        limit = engine.config().max_insights,
        "Generated insights"
    );

    print_insights("💡 Insights", &insights, json)
}

pub fn cmd_patterns(config_path: Option<&Path>, stats_path: &Path, json: bool) -> Result<()> {
    let config = load_engine_config(config_path)?;
    let stats = load_stats(stats_path)?;

    let engine = InsightEngine::with_config(config);
    let insights = engine.analyze_weekly_patterns(&stats);

    print_insights("📅 Weekly Patterns", &insights, json)
}

fn print_insights(heading: &str, insights: &[ProductivityInsight], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(insights)?);
        return Ok(());
    }

    println!();
    println!("{}", heading);
    println!("   ─────────────────────────────────────────────────────────────");

    if insights.is_empty() {
        println!("   Nothing notable right now.");
        println!();
        return Ok(());
    }

    for insight in insights {
        for line in format_insight(insight) {
            println!("   {}", line);
        }
        println!();
    }

    Ok(())
}

fn priority_icon(priority: Priority) -> &'static str {
    match priority {
        Priority::High => "🔴",
        Priority::Medium => "🟡",
        Priority::Low => "⚪",
    }
}

/// Render one insight as display lines (header, message, optional action)
pub fn format_insight(insight: &ProductivityInsight) -> Vec<String> {
    let mut lines = vec![
        format!(
            "{} {:6} │ {:11} │ {}",
            priority_icon(insight.priority),
            insight.priority.as_str(),
            insight.insight_type.as_str(),
            truncate(&insight.title, 40)
        ),
        format!("   {}", insight.message),
    ];

    if let (Some(text), Some(action_type)) = (&insight.action_text, insight.action_type) {
        lines.push(format!("   → {} ({})", text, action_type));
    }

    lines
}
