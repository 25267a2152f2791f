//! HTTP error types.

/// HTTP failure on either leg of the relay, with source location.
///
/// Covers the server leg (the listener cannot bind, serving fails) and
/// client legs that cannot reach their peer.
#[derive(Debug, Clone)]
pub struct HttpError {
    /// What failed
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl HttpError {
    /// Create a new HttpError with the given message at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use scrivano_error::HttpError;
    ///
    /// let err = HttpError::new("Failed to bind 127.0.0.1:8080: address in use");
    /// assert!(err.message.contains("bind"));
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

impl std::fmt::Display for HttpError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "HTTP Error: {} at line {} in {}",
            self.message, self.line, self.file
        )
    }
}

impl std::error::Error for HttpError {}
