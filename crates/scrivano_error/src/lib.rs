//! Error types for the Scrivano relay.
//!
//! This crate provides the foundation error types used throughout the
//! Scrivano workspace. Each error struct records the source location of
//! its construction via `#[track_caller]`.

mod config;
mod http;
mod validation;

pub use config::ConfigError;
pub use http::HttpError;
pub use validation::ValidationError;

/// Crate-level error variants.
#[derive(Debug, Clone, derive_more::From)]
pub enum ScrivanoErrorKind {
    /// HTTP error
    Http(HttpError),
    /// Configuration error
    Config(ConfigError),
    /// Request rejected before reaching the upstream provider
    Validation(ValidationError),
}

impl std::fmt::Display for ScrivanoErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScrivanoErrorKind::Http(e) => write!(f, "{}", e),
            ScrivanoErrorKind::Config(e) => write!(f, "{}", e),
            ScrivanoErrorKind::Validation(e) => write!(f, "{}", e),
        }
    }
}

/// Scrivano error with kind discrimination.
#[derive(Debug, Clone)]
pub struct ScrivanoError(Box<ScrivanoErrorKind>);

impl ScrivanoError {
    /// Create a new error from a kind.
    pub fn new(kind: ScrivanoErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ScrivanoErrorKind {
        &self.0
    }
}

impl std::fmt::Display for ScrivanoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Scrivano Error: {}", self.0)
    }
}

impl std::error::Error for ScrivanoError {}

// Generic From implementation for any type that converts to ScrivanoErrorKind
impl<T> From<T> for ScrivanoError
where
    T: Into<ScrivanoErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Scrivano operations.
pub type ScrivanoResult<T> = std::result::Result<T, ScrivanoError>;
