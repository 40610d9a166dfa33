//! Argument and configuration validation
//!
//! Merges command-line values over configuration file values over defaults
//! and checks the result.

use super::args::Args;
use super::config::FileConfig;
use super::settings::{LogSettings, RunSettings};
use crate::core::validation::{
    validate_identifier, validate_indent, validate_positive, ValidationError,
};
use crate::fixture::{DEFAULT_CAPACITY_MACRO, DEFAULT_INDENT, DEFAULT_MAX_RESULTS};
use crate::scanner::api::DEFAULT_SCANNER_PROGRAM;
use std::path::PathBuf;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];
const LOG_FORMATS: &[&str] = &["text", "ext", "json"];

impl Args {
    /// Resolve the final run settings, command line first, then config file, then defaults
    pub fn resolve(&self, config: &FileConfig) -> Result<RunSettings, ValidationError> {
        let max_results = validate_positive(
            "max-results",
            self.max_results
                .or(config.max_results)
                .unwrap_or(DEFAULT_MAX_RESULTS),
        )?;
        let jobs = validate_positive("jobs", self.jobs.or(config.jobs).unwrap_or(1))?;
        let capacity_macro = validate_identifier(
            "capacity-macro",
            self.capacity_macro
                .as_deref()
                .or(config.capacity_macro.as_deref())
                .unwrap_or(DEFAULT_CAPACITY_MACRO),
        )?;
        let indent = validate_indent(
            self.indent
                .as_deref()
                .or(config.indent.as_deref())
                .unwrap_or(DEFAULT_INDENT),
        )?;

        let scanner = self
            .scanner
            .clone()
            .or_else(|| config.scanner.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SCANNER_PROGRAM));
        if scanner.as_os_str().is_empty() {
            return Err(ValidationError::new("scanner program path cannot be empty"));
        }

        let logging = self.resolve_logging(config)?;

        Ok(RunSettings {
            corpus: self.corpus.clone(),
            scanner,
            fixture: crate::fixture::FixtureSettings {
                indent,
                max_results,
                capacity_macro,
            },
            jobs,
            output: self.output.clone(),
            logging,
        })
    }

    fn resolve_logging(&self, config: &FileConfig) -> Result<LogSettings, ValidationError> {
        let defaults = LogSettings::default();

        let level = self
            .log_level
            .clone()
            .or_else(|| config.log_level.clone())
            .unwrap_or(defaults.level);
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ValidationError::new(&format!(
                "Invalid log-level '{}': expected one of {}",
                level,
                LOG_LEVELS.join(", ")
            )));
        }

        let format = self
            .log_format
            .clone()
            .or_else(|| config.log_format.clone())
            .unwrap_or(defaults.format);
        if !LOG_FORMATS.contains(&format.as_str()) {
            return Err(ValidationError::new(&format!(
                "Invalid log-format '{}': expected one of {}",
                format,
                LOG_FORMATS.join(", ")
            )));
        }

        Ok(LogSettings {
            level,
            format,
            file: self.log_file.clone().or_else(|| config.log_file.clone()),
            color: self.color_override().or(config.color),
            verbosity: self.verbosity(),
        })
    }
}
