//! CLI module containing argument parsing, configuration and validation

pub mod args;
pub mod config;
pub mod settings;
pub mod validation;

pub use args::Args;
pub use config::{ConfigError, FileConfig};
pub use settings::{LogSettings, RunSettings};

#[cfg(test)]
mod tests;
