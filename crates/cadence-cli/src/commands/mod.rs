//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `config` - Effective configuration display
//! - `insights` - Insight generation and weekday patterns
//! - `loaders` - Shared loaders (config, statistics snapshot, task list)

pub mod config;
pub mod insights;
pub mod loaders;

// Re-export command functions for main.rs
pub use config::*;
pub use insights::*;
pub use loaders::*;

/// Truncate a string to a maximum length, adding "..." if truncated
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
