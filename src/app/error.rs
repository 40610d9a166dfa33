//! Application Error Types

use super::cli::ConfigError;
use crate::core::error_handling::ContextualError;
use crate::core::validation::ValidationError;
use crate::pipeline::GenerateError;
use std::path::PathBuf;

/// Failures between argument parsing and the end of a run
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Cannot open corpus {}: {source}", .path.display())]
    OpenCorpus {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot create output file {}: {source}", .path.display())]
    CreateOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Generate(#[from] GenerateError),
}

impl ContextualError for AppError {
    fn is_user_actionable(&self) -> bool {
        match self {
            AppError::Config(e) => e.is_user_actionable(),
            AppError::Validation(e) => e.is_user_actionable(),
            AppError::OpenCorpus { .. } | AppError::CreateOutput { .. } => true,
            AppError::Generate(e) => e.is_user_actionable(),
        }
    }

    fn user_message(&self) -> Option<String> {
        match self {
            AppError::Config(e) => e.user_message(),
            AppError::Validation(e) => e.user_message(),
            AppError::OpenCorpus { .. } | AppError::CreateOutput { .. } => Some(self.to_string()),
            AppError::Generate(e) => e.user_message(),
        }
    }
}
