//! Fixture Error Types

#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    #[error("Test {index} has {hits} results, more than the capacity of {capacity}")]
    CapacityExceeded {
        index: usize,
        hits: usize,
        capacity: usize,
    },

    #[error("Failed to write fixtures: {0}")]
    Write(#[from] std::io::Error),
}

impl crate::core::error_handling::ContextualError for FixtureError {
    fn is_user_actionable(&self) -> bool {
        match self {
            FixtureError::CapacityExceeded { .. } => true, // Raise max-results or split the test
            FixtureError::Write(_) => false,
        }
    }

    fn user_message(&self) -> Option<String> {
        match self {
            FixtureError::CapacityExceeded { .. } => Some(format!(
                "{}; the scanner output changed or max-results is too small",
                self
            )),
            FixtureError::Write(_) => None,
        }
    }
}

/// Result type for fixture operations
pub type FixtureResult<T> = Result<T, FixtureError>;
