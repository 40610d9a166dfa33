//! Pipeline Error Types

use crate::core::error_handling::ContextualError;
use crate::corpus::CorpusError;
use crate::fixture::FixtureError;
use crate::results::ResultParseError;
use crate::scanner::ScanError;

/// Any failure that aborts fixture generation
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error(transparent)]
    Corpus(#[from] CorpusError),

    #[error("Test {index}: {source}")]
    Scan {
        index: usize,
        #[source]
        source: ScanError,
    },

    #[error("Test {index}: {source}")]
    Parse {
        index: usize,
        #[source]
        source: ResultParseError,
    },

    #[error(transparent)]
    Fixture(#[from] FixtureError),

    #[error("Failed to start scan workers: {0}")]
    Runtime(#[source] std::io::Error),

    #[error("Scan worker for test {index} stopped unexpectedly: {message}")]
    Worker { index: usize, message: String },
}

impl ContextualError for GenerateError {
    fn is_user_actionable(&self) -> bool {
        match self {
            GenerateError::Corpus(_) => true, // Bad encoding or unreadable corpus file
            GenerateError::Scan { source, .. } => source.is_user_actionable(),
            GenerateError::Parse { source, .. } => source.is_user_actionable(),
            GenerateError::Fixture(source) => source.is_user_actionable(),
            GenerateError::Runtime(_) | GenerateError::Worker { .. } => false,
        }
    }

    fn user_message(&self) -> Option<String> {
        match self {
            GenerateError::Scan { index, source } => source
                .user_message()
                .map(|msg| format!("Test {}: {}", index, msg)),
            GenerateError::Parse { index, source } => source
                .user_message()
                .map(|msg| format!("Test {}: {}", index, msg)),
            GenerateError::Fixture(source) => source.user_message(),
            GenerateError::Corpus(source) => Some(source.to_string()),
            GenerateError::Runtime(_) | GenerateError::Worker { .. } => None,
        }
    }
}

/// Result type for pipeline operations
pub type GenerateResult<T> = Result<T, GenerateError>;
