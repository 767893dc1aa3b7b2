//! Error types for sqlbuilder

use thiserror::Error;

/// Result type alias for sqlbuilder operations
pub type BuilderResult<T> = Result<T, BuilderError>;

/// Errors reported by configuration and command checks.
///
/// The fluent operations themselves never fail: malformed input produces
/// malformed SQL text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BuilderError {
    /// Invalid configuration input (e.g. a schema name that is not an identifier)
    #[error("Validation error: {0}")]
    Validation(String),

    /// A placeholder in the command text has no bound parameter
    #[error("Unbound placeholder: {0}")]
    UnboundPlaceholder(String),

    /// A bound parameter has no placeholder in the command text
    #[error("Unused parameter: {0}")]
    UnusedParameter(String),
}

impl BuilderError {
    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this error reports a placeholder/parameter mismatch
    pub fn is_mismatch(&self) -> bool {
        matches!(self, Self::UnboundPlaceholder(_) | Self::UnusedParameter(_))
    }
}
