//! Config command implementation

use std::path::Path;

use anyhow::Result;
use cadence_core::config::default_config_path;

use super::load_engine_config;

pub fn cmd_config(config_path: Option<&Path>, path_only: bool) -> Result<()> {
    let override_path = config_path
        .map(Path::to_path_buf)
        .or_else(default_config_path);

    if path_only {
        match override_path {
            Some(path) => println!("{}", path.display()),
            None => println!("(no data directory available)"),
        }
        return Ok(());
    }

    let config = load_engine_config(config_path)?;
    let t = &config.thresholds;

    let source = match &override_path {
        Some(path) if path.exists() => path.display().to_string(),
        _ => "built-in defaults".to_string(),
    };

    println!();
    println!("⚙️  Insight Configuration");
    println!("   Source: {}", source);
    println!("   ─────────────────────────────────────────────────────────────");
    println!("   Max insights:             {}", config.max_insights);
    println!(
        "   Weekly patterns:          {}",
        if config.include_weekly_patterns {
            "included"
        } else {
            "opt-in"
        }
    );
    println!();
    println!(
        "   Momentum:                 {} day windows, change > {}",
        t.momentum_window, t.momentum_delta
    );
    println!("   Consistency:              variance < {}", t.consistency_variance);
    println!(
        "   Today:                    strong ≥ {}, low < {}",
        t.today_strong_rate, t.today_low_rate
    );
    println!("   Overdue buildup:          > {}", t.overdue_buildup);
    println!(
        "   Category:                 strong ≥ {}, weak < {} with > {} tasks",
        t.category_strong_rate, t.category_weak_rate, t.category_min_tasks
    );
    println!(
        "   Weekly pattern:           ≥ {} days, gap > {}",
        t.weekly_min_entries, t.weekly_gap
    );
    println!(
        "   Milestones:               steady ≥ {}, mastery ≥ {}",
        t.steady_completed, t.mastery_completed
    );
    println!();

    Ok(())
}
