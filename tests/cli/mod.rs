//! CLI integration test modules

mod argument_parsing;
mod config_file;
mod generation;
