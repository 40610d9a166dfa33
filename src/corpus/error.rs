//! Corpus Error Types

#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    #[error("Failed to read corpus at line {line}: {source}")]
    Read {
        line: usize,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for corpus operations
pub type CorpusResult<T> = Result<T, CorpusError>;
