//! Application configuration

use crate::cli::CommandLine;
use config::{Config, ConfigError, Environment, File};
use record_store::DEFAULT_DATA_FILE;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file looked up in the working directory (any supported extension)
pub const DEFAULT_CONFIG_NAME: &str = "studentdb";

/// Prefix for environment overrides, e.g. `STUDENTDB_DATA_FILE`
pub const ENV_PREFIX: &str = "STUDENTDB";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Backing file for save and startup load
    pub data_file: PathBuf,

    /// Load the backing file before showing the menu
    pub load_on_startup: bool,

    /// Max log level written to stderr
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            load_on_startup: true,
            log_level: "warn".to_string(),
        }
    }
}

impl AppConfig {
    /// Read defaults, then the config file, then `STUDENTDB_*` variables.
    ///
    /// An explicit `path` must exist; the default file is optional.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_with_env(path, Environment::with_prefix(ENV_PREFIX))
    }

    fn load_with_env(path: Option<&Path>, env: Environment) -> Result<Self, ConfigError> {
        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::with_name(DEFAULT_CONFIG_NAME).required(false),
        };

        Config::builder()
            .add_source(file)
            .add_source(env)
            .build()?
            .try_deserialize()
    }

    /// Apply command line overrides
    pub fn with_overrides(mut self, args: &CommandLine) -> Self {
        if let Some(file) = &args.file {
            self.data_file = file.clone();
        }
        if args.no_load {
            self.load_on_startup = false;
        }
        if let Some(level) = &args.log_level {
            self.log_level = level.clone();
        }
        self
    }
}
