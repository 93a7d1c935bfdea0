//! Student Database CLI
//!
//! Text menu over the record store, plus configuration and logging setup.

pub mod cli;
pub mod config;
pub mod menu;

pub use cli::CommandLine;
pub use config::AppConfig;
pub use menu::{Menu, MenuChoice};

use anyhow::Context;
use std::str::FromStr;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::FmtSubscriber;

/// Initialize logging to stderr at the given max level
pub fn init_logging(level: &str) -> anyhow::Result<()> {
    let max_level = LevelFilter::from_str(level)
        .with_context(|| format!("Invalid log level '{}'", level))?;

    let subscriber = FmtSubscriber::builder()
        .with_max_level(max_level)
        .with_target(true)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")
}
