//! Generic error handling utilities
//!
//! Provides unified fatal-error reporting across the different module error
//! types while keeping each module's own notion of what the operator can fix.

/// Trait for errors that can distinguish between user-actionable and system errors
///
/// User-actionable errors (a bad config value, a scanner path that does not
/// exist, a malformed scanner result line) show their own message. System
/// errors (I/O failures) show the operation context, with the details logged
/// at debug level.
///
/// When `is_user_actionable()` returns `true`, `user_message()` should return
/// `Some(message)`. When it returns `false`, `user_message()` should return `None`.
pub trait ContextualError: std::error::Error {
    /// Returns true if this error carries a message the operator can act on
    fn is_user_actionable(&self) -> bool;

    /// The operator-facing message for user-actionable errors
    fn user_message(&self) -> Option<String>;
}

/// Build the primary fatal line for an error
///
/// ```rust
/// # use scan_fixtures::core::error_handling::fatal_message;
/// # use scan_fixtures::core::validation::ValidationError;
/// let err = ValidationError::new("max-results must be greater than 0");
/// assert_eq!(
///     fatal_message(&err, "Loading configuration"),
///     "FATAL: max-results must be greater than 0"
/// );
/// ```
pub fn fatal_message<E: ContextualError + ?Sized>(error: &E, operation_context: &str) -> String {
    match error.user_message() {
        Some(user_msg) if error.is_user_actionable() => format!("FATAL: {}", user_msg),
        _ => format!("FATAL: {} (use -v for details)", operation_context),
    }
}

/// Log errors with appropriate detail level based on error specificity
///
/// # Arguments
/// * `error` - The error to handle (must implement ContextualError)
/// * `operation_context` - Human-readable description of the operation that failed
pub fn log_error_with_context<E: ContextualError + std::fmt::Debug + ?Sized>(
    error: &E,
    operation_context: &str,
) {
    log::error!("{}", fatal_message(error, operation_context));
    log::debug!("DETAIL: {}", error);
    log::debug!("DEBUG_DETAILS: {:?}", error);
}
