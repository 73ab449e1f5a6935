//! Core error types and traits for sag

use thiserror::Error;

/// Result type alias for sag operations
pub type SagResult<T> = Result<T, SagError>;

/// Unified error trait that all sag errors implement.
pub trait UnifiedError: std::error::Error + Send + Sync {
    /// Get the error code for programmatic handling
    fn error_code(&self) -> &str;

    /// Get the human-readable error message
    fn message(&self) -> &str;

    /// Get optional context about the error
    fn context(&self) -> Option<&str> {
        None
    }
}

/// Main error type for sag
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SagError {
    /// No credential source produced an API key
    #[error("No API key configured (checked {})", .checked.join(", "))]
    MissingCredential {
        /// Names of the sources that were consulted, in order
        checked: Vec<String>,
    },

    /// A configured key file could not be read
    #[error("Failed to read API key from {source_name} ({path}): {message}")]
    CredentialSourceUnreadable {
        /// Flag or environment variable that named the file
        source_name: String,
        /// Path as it was read (after `~` expansion)
        path: String,
        /// Underlying I/O error
        message: String,
    },

    /// IO errors
    #[error("IO error: {message}")]
    Io {
        message: String,
        context: Option<String>,
    },

    /// JSON serialization errors
    #[error("JSON error: {message}")]
    Json {
        message: String,
        context: Option<String>,
    },
}
