//! Corpus reading
//!
//! Splits a line-oriented corpus into three-line test cases.

pub mod error;
pub mod reader;
pub mod types;

pub use error::{CorpusError, CorpusResult};
pub use reader::Triplets;
pub use types::Triplet;
