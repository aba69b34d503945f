//! Cadence CLI - Productivity insights from task statistics
//!
//! Usage:
//!   cadence insights --stats stats.json --todos todos.json
//!   cadence patterns --stats stats.json
//!   cadence config

mod cli;
mod commands;


use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    match cli.command {
        Commands::Insights {
            stats,
            todos,
            limit,
            weekly,
            json,
        } => commands::cmd_insights(
            cli.config.as_deref(),
            &stats,
            todos.as_deref(),
            limit,
            weekly,
            json,
        ),
        Commands::Patterns { stats, json } => {
            commands::cmd_patterns(cli.config.as_deref(), &stats, json)
        }
        Commands::Config { path } => commands::cmd_config(cli.config.as_deref(), path),
    }
}
