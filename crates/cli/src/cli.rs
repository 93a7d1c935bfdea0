//! Command-line arguments

use clap::Parser;
use std::path::PathBuf;

/// Student Database Management System
#[derive(Debug, Default, Parser)]
#[command(version, about)]
pub struct CommandLine {
    /// Backing data file (overrides configuration)
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Configuration file to read instead of ./studentdb.toml
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Skip loading the data file at startup
    #[arg(long)]
    pub no_load: bool,

    /// Log level: off, error, warn, info, debug or trace
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,
}
