//! TOML configuration file parsing and loading
//!
//! This module handles loading of the optional TOML configuration file,
//! including default config file discovery. Keys use kebab-case:
//!
//! ```toml
//! scanner = "/opt/rna/bin/rna"
//! max-results = 100
//! capacity-macro = "MAX_NUM_RESULTS_PER_TEST"
//! indent = "    "
//! jobs = 4
//! log-level = "info"
//! log-format = "ext"
//! log-file = "/tmp/scan-fixtures.log"
//! color = false
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Directory name under the platform config directory
pub const CONFIG_DIR_NAME: &str = "ScanFixtures";

/// File name of the default configuration file
pub const CONFIG_FILE_NAME: &str = "scan-fixtures.toml";

/// Settings that may come from the configuration file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FileConfig {
    pub scanner: Option<PathBuf>,
    pub max_results: Option<usize>,
    pub capacity_macro: Option<String>,
    pub indent: Option<String>,
    pub jobs: Option<usize>,
    pub log_level: Option<String>,
    pub log_format: Option<String>,
    pub log_file: Option<PathBuf>,
    pub color: Option<bool>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("The specified configuration file does not exist: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("Error reading configuration file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error parsing configuration file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl crate::core::error_handling::ContextualError for ConfigError {
    fn is_user_actionable(&self) -> bool {
        true
    }

    fn user_message(&self) -> Option<String> {
        Some(self.to_string())
    }
}

/// Default configuration file location, whether or not it exists
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

impl FileConfig {
    /// Parse configuration from TOML text
    pub fn from_toml(path: &Path, contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load and parse a configuration file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(path, &contents)
    }

    /// Load the configuration for this run.
    ///
    /// A file given explicitly must exist. Otherwise the default location
    /// is used when it exists, and an empty configuration when it does not.
    pub fn discover(config_file: Option<&Path>) -> Result<Self, ConfigError> {
        let config_path = match config_file {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::NotFound {
                        path: path.to_path_buf(),
                    });
                }
                Some(path.to_path_buf())
            }
            None => default_config_path().filter(|path| path.exists()),
        };

        match config_path {
            Some(path) => Self::load(&path),
            None => Ok(Self::default()),
        }
    }
}
