//! Scanner result parsing
//!
//! Turns the scanner's loosely formatted text output into typed hits.

pub mod error;
pub mod parser;
pub mod types;

pub use error::{ResultParseError, ResultParseResult};
pub use parser::{parse_hits, parse_result_line};
pub use types::Hit;
