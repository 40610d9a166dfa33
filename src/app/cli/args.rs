//! Core CLI arguments structure
//!
//! This module contains the Args struct definition. Configuration loading
//! and validation are handled by the `config` and `validation` modules.

use clap::{ArgAction, Parser};
use std::path::PathBuf;

// Command-line arguments
//
// Every optional setting here can also come from the TOML configuration
// file; a value given on the command line always wins.
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "scan-fixtures")]
#[command(about = "Generate regression-test fixtures by running the sequence scanner over a test corpus")]
#[command(version)]
#[command(
    after_help = "The corpus holds one test case per three lines: structure pattern, \
                  position variables and sequence. Blank lines may separate test cases."
)]
pub struct Args {
    /// Corpus file with the test cases
    #[arg(value_name = "CORPUS")]
    pub corpus: PathBuf,

    /// Scanner program to run for each test case [default: ./rna]
    #[arg(short = 's', long = "scanner", value_name = "PROGRAM")]
    pub scanner: Option<PathBuf>,

    /// Maximum results per test case [default: 100]
    #[arg(short = 'm', long = "max-results", value_name = "COUNT")]
    pub max_results: Option<usize>,

    /// Macro named in the emitted capacity assertion [default: MAX_NUM_RESULTS_PER_TEST]
    #[arg(long = "capacity-macro", value_name = "NAME")]
    pub capacity_macro: Option<String>,

    /// Indentation of emitted lines [default: four spaces]
    #[arg(long = "indent", value_name = "TEXT")]
    pub indent: Option<String>,

    /// Number of scans to run concurrently; output order is unaffected [default: 1]
    #[arg(short = 'j', long = "jobs", value_name = "COUNT")]
    pub jobs: Option<usize>,

    /// Write fixtures to FILE instead of standard output
    #[arg(short = 'O', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Configuration file path
    #[arg(short = 'c', long = "config-file", value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Force colored log output
    #[arg(long = "color", conflicts_with = "no_color")]
    pub color: bool,

    /// Disable colored log output
    #[arg(long = "no-color", conflicts_with = "color")]
    pub no_color: bool,

    /// Log level
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = ["trace", "debug", "info", "warn", "error", "off"])]
    pub log_level: Option<String>,

    /// Log output format
    #[arg(short = 'o', long = "log-format", value_name = "FORMAT", value_parser = ["text", "ext", "json"])]
    pub log_format: Option<String>,

    /// Log file path (logs go to standard error otherwise)
    #[arg(short = 'f', long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// More log output (repeatable)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Less log output (repeatable)
    #[arg(short = 'q', long = "quiet", action = ArgAction::Count)]
    pub quiet: u8,
}

impl Args {
    /// Color override from --color/--no-color; None means detect the terminal
    pub fn color_override(&self) -> Option<bool> {
        match (self.color, self.no_color) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }

    /// Net verbosity: positive for -v, negative for -q
    pub fn verbosity(&self) -> i8 {
        (self.verbose.min(i8::MAX as u8) as i8) - (self.quiet.min(i8::MAX as u8) as i8)
    }
}
