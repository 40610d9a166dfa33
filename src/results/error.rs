//! Result Parser Error Types

use std::num::ParseIntError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResultParseError {
    #[error("Scanner output line {line_number} is not a result line: {line:?}")]
    Malformed { line_number: usize, line: String },

    #[error("Scanner output line {line_number} has an invalid position ({source}): {line:?}")]
    Position {
        line_number: usize,
        line: String,
        #[source]
        source: ParseIntError,
    },
}

impl ResultParseError {
    /// 1-based line number within the scanner output
    pub fn line_number(&self) -> usize {
        match self {
            ResultParseError::Malformed { line_number, .. }
            | ResultParseError::Position { line_number, .. } => *line_number,
        }
    }
}

impl crate::core::error_handling::ContextualError for ResultParseError {
    fn is_user_actionable(&self) -> bool {
        true // The operator has to look at the scanner or the test case
    }

    fn user_message(&self) -> Option<String> {
        Some(self.to_string())
    }
}

/// Result type for result parsing
pub type ResultParseResult<T> = Result<T, ResultParseError>;
