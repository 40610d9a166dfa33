//! Fixture generation pipeline
//!
//! Reads test cases from the corpus, scans each one, parses the hits and
//! streams fixture blocks in corpus order.

pub mod error;
pub mod generate;

pub use error::{GenerateError, GenerateResult};
pub use generate::{GenerationSummary, Pipeline};
