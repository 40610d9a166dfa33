//! Scanner Error Types

use std::process::ExitStatus;

/// Scanner invocation errors. All of them are fatal for the run.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    /// The program could not be started at all
    #[error("Failed to start scanner '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The program ran but reported failure
    #[error("Scanner '{program}' failed with {status}: {stderr}")]
    ExitStatus {
        program: String,
        status: ExitStatus,
        stderr: String,
    },

    /// The program's output could not be decoded
    #[error("Scanner '{program}' produced unreadable output: {reason}")]
    Output { program: String, reason: String },
}

impl crate::core::error_handling::ContextualError for ScanError {
    fn is_user_actionable(&self) -> bool {
        match self {
            ScanError::Spawn { .. } => true, // Wrong --scanner path
            ScanError::ExitStatus { .. } => true, // Usually a bad test case
            ScanError::Output { .. } => false,
        }
    }

    fn user_message(&self) -> Option<String> {
        match self {
            ScanError::Spawn { program, source } => Some(format!(
                "Cannot run scanner '{}' ({}); check the --scanner setting",
                program, source
            )),
            ScanError::ExitStatus { .. } => Some(self.to_string()),
            ScanError::Output { .. } => None,
        }
    }
}

/// Result type for scanner operations
pub type ScanResult<T> = Result<T, ScanError>;
