//! Student Database - Main Entry Point

use anyhow::Context;
use clap::Parser;
use record_store::RecordStore;
use student_db_cli::{init_logging, AppConfig, CommandLine, Menu};
use tracing::info;

fn main() -> anyhow::Result<()> {
    let args = CommandLine::parse();
    let config = AppConfig::load(args.config.as_deref())
        .context("Failed to load configuration")?
        .with_overrides(&args);

    init_logging(&config.log_level)?;
    info!("=== Student Database v{} ===", env!("CARGO_PKG_VERSION"));
    info!("Using data file {}", config.data_file.display());

    let mut store = RecordStore::new();
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut menu = Menu::new(stdin.lock(), stdout.lock(), config.data_file.clone());

    if config.load_on_startup {
        menu.load_startup(&mut store)?;
    }
    menu.run(&mut store)?;

    store.destroy();
    Ok(())
}
