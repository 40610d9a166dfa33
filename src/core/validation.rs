//! Validation utilities for configuration and CLI values

use crate::core::error_handling::ContextualError;
use std::fmt;

/// A configuration or argument value the operator has to fix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ValidationError {}

impl ContextualError for ValidationError {
    fn is_user_actionable(&self) -> bool {
        true
    }

    fn user_message(&self) -> Option<String> {
        Some(self.message.clone())
    }
}

/// Validate that a count is greater than zero
pub fn validate_positive(name: &str, value: usize) -> Result<usize, ValidationError> {
    if value == 0 {
        return Err(ValidationError::new(&format!(
            "{} must be greater than 0",
            name
        )));
    }
    Ok(value)
}

/// Validate a C identifier (used for the capacity macro name)
pub fn validate_identifier(name: &str, value: &str) -> Result<String, ValidationError> {
    let mut chars = value.chars();
    let valid = match chars.next() {
        Some(first) if first == '_' || first.is_ascii_alphabetic() => {
            chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
        }
        _ => false,
    };

    if valid {
        Ok(value.to_string())
    } else {
        Err(ValidationError::new(&format!(
            "{} '{}' is not a valid identifier",
            name, value
        )))
    }
}

/// Validate fixture indentation: spaces and tabs only
pub fn validate_indent(value: &str) -> Result<String, ValidationError> {
    if value.chars().all(|c| c == ' ' || c == '\t') {
        Ok(value.to_string())
    } else {
        Err(ValidationError::new(
            "indent may only contain spaces and tabs",
        ))
    }
}
