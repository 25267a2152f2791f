//! Request validation error types.

/// Rejected request with source location.
///
/// Raised before any upstream call is made, so a validation failure
/// never consumes provider resources.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Why the request was rejected
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ValidationError {
    /// Create a new ValidationError with the given message at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use scrivano_error::ValidationError;
    ///
    /// let err = ValidationError::new("The prompt field cannot be empty.");
    /// assert!(err.message.contains("prompt"));
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Validation Error: {} at line {} in {}",
            self.message, self.line, self.file
        )
    }
}

impl std::error::Error for ValidationError {}
