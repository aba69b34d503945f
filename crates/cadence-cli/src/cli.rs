//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Cadence - Insights about how you get things done
#[derive(Parser)]
#[command(name = "cadence")]
#[command(about = "Productivity insights from task statistics", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Threshold config file (defaults to the data dir override, then built-in values)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate ranked insights from a statistics snapshot
    Insights {
        /// Statistics snapshot (JSON)
        #[arg(short, long)]
        stats: PathBuf,

        /// Task list (JSON array); milestones are skipped when omitted
        #[arg(short, long)]
        todos: Option<PathBuf>,

        /// Maximum number of insights, 1 to 5 (overrides config)
        #[arg(short, long)]
        limit: Option<usize>,

        /// Include the day-of-week analyzer
        #[arg(long)]
        weekly: bool,

        /// Print insights as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show best and worst weekdays from the daily trend
    Patterns {
        /// Statistics snapshot (JSON)
        #[arg(short, long)]
        stats: PathBuf,

        /// Print insights as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the effective threshold configuration
    Config {
        /// Only print the override file location
        #[arg(long)]
        path: bool,
    },
}
