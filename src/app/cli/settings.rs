//! Resolved run settings
//!
//! The result of merging defaults, the configuration file and the command
//! line. Everything downstream of startup works from these values only.

use crate::fixture::FixtureSettings;
use std::path::PathBuf;

/// Logging setup for the run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    /// Base level before -v/-q are applied
    pub level: String,
    pub format: String,
    pub file: Option<PathBuf>,
    /// None means color when standard error is a terminal
    pub color: Option<bool>,
    pub verbosity: i8,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: "text".to_string(),
            file: None,
            color: None,
            verbosity: 0,
        }
    }
}

/// Everything needed to generate fixtures for one corpus
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSettings {
    pub corpus: PathBuf,
    pub scanner: PathBuf,
    pub fixture: FixtureSettings,
    pub jobs: usize,
    /// None writes to standard output
    pub output: Option<PathBuf>,
    pub logging: LogSettings,
}
