//! User-friendly error messages and classification
//!
//! Provides human-readable error messages and suggestions for the errors
//! sag can surface before any request is made.

use super::types::{SagError, UnifiedError};
use crate::config::credential::{
    API_KEY_ENV_VARS, API_KEY_FILE_ENV_VARS, CLI_API_KEY_ARG, CLI_API_KEY_FILE_ARG,
};

/// Error category for user-facing messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Credentials missing or unusable
    Authentication,
    /// File system related errors
    FileSystem,
    /// Internal system errors
    Internal,
}

impl ErrorCategory {
    /// Get a user-friendly category name
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Authentication => "Authentication Error",
            Self::FileSystem => "File System Error",
            Self::Internal => "Internal Error",
        }
    }
}

/// User-friendly error information
#[derive(Debug, Clone)]
pub struct UserFriendlyError {
    /// The error category
    pub category: ErrorCategory,
    /// User-friendly title/summary
    pub title: String,
    /// Detailed user-friendly message
    pub message: String,
    /// Suggested actions to resolve the error
    pub suggestions: Vec<String>,
    /// Original technical error code
    pub error_code: String,
}

impl UserFriendlyError {
    /// Create a new user-friendly error
    pub fn new(
        category: ErrorCategory,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            category,
            title: title.into(),
            message: message.into(),
            suggestions: Vec::new(),
            error_code: String::new(),
        }
    }

    /// Add a suggestion
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    /// Set the technical error code
    pub fn with_error_code(mut self, code: impl Into<String>) -> Self {
        self.error_code = code.into();
        self
    }

    /// Format the error for display
    pub fn format_display(&self) -> String {
        let mut output = format!(
            "{}: {}\n\n{}",
            self.category.display_name(),
            self.title,
            self.message
        );

        if !self.suggestions.is_empty() {
            output.push_str("\n\nSuggested actions:");
            for (i, suggestion) in self.suggestions.iter().enumerate() {
                output.push_str(&format!("\n  {}. {}", i + 1, suggestion));
            }
        }

        output
    }
}

impl From<&SagError> for UserFriendlyError {
    fn from(error: &SagError) -> Self {
        let friendly = match error {
            SagError::MissingCredential { .. } => UserFriendlyError::new(
                ErrorCategory::Authentication,
                "No API key found",
                error.to_string(),
            )
            .with_suggestion(format!(
                "Export {} (or {}) with your ElevenLabs API key",
                API_KEY_ENV_VARS[0], API_KEY_ENV_VARS[1]
            ))
            .with_suggestion(format!(
                "Point {} (or {}) at a file containing the key",
                API_KEY_FILE_ENV_VARS[0], API_KEY_FILE_ENV_VARS[1]
            ))
            .with_suggestion(format!(
                "Pass {} <KEY> or {} <PATH> on the command line",
                CLI_API_KEY_ARG, CLI_API_KEY_FILE_ARG
            )),

            SagError::CredentialSourceUnreadable {
                source_name, path, ..
            } => UserFriendlyError::new(
                ErrorCategory::FileSystem,
                format!("Cannot read API key file from {}", source_name),
                error.to_string(),
            )
            .with_suggestion(format!("Check that {} exists and is readable", path))
            .with_suggestion(format!(
                "Unset {} to fall back to the next credential source",
                source_name
            )),

            SagError::Io { .. } => UserFriendlyError::new(
                ErrorCategory::Internal,
                "I/O error",
                contextual_message(error),
            ),

            SagError::Json { .. } => UserFriendlyError::new(
                ErrorCategory::Internal,
                "Data format error",
                contextual_message(error),
            ),
        };

        friendly.with_error_code(error.error_code())
    }
}

/// The error message, prefixed with what was being done when it happened
fn contextual_message(error: &SagError) -> String {
    match error.context() {
        Some(context) => format!("{}: {}", context, error.message()),
        None => error.message().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_credential_suggests_every_source() {
        let error = SagError::missing_credential(["--api-key"]);
        let friendly = UserFriendlyError::from(&error);

        assert_eq!(friendly.category, ErrorCategory::Authentication);
        assert_eq!(friendly.error_code, "SAG_MISSING_CREDENTIAL");

        let display = friendly.format_display();
        for name in [
            "ELEVENLABS_API_KEY",
            "SAG_API_KEY",
            "ELEVENLABS_API_KEY_FILE",
            "SAG_API_KEY_FILE",
            "--api-key",
            "--api-key-file",
        ] {
            assert!(display.contains(name), "missing {name} in:\n{display}");
        }
        assert!(display.contains("Suggested actions:"));
    }

    #[test]
    fn test_unreadable_names_the_path() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "No such file or directory");
        let error = SagError::credential_unreadable("ELEVENLABS_API_KEY_FILE", "/nope/key", &io);
        let friendly = UserFriendlyError::from(&error);

        assert_eq!(friendly.category, ErrorCategory::FileSystem);
        assert!(friendly.title.contains("ELEVENLABS_API_KEY_FILE"));
        assert!(friendly.message.contains("No such file or directory"));
        assert!(friendly.suggestions[0].contains("/nope/key"));
    }

    #[test]
    fn test_io_message_keeps_context() {
        let error = SagError::io("broken pipe").with_context("Writing prompting guide");
        let friendly = UserFriendlyError::from(&error);

        assert_eq!(friendly.category, ErrorCategory::Internal);
        assert_eq!(friendly.message, "Writing prompting guide: broken pipe");
        assert_eq!(friendly.error_code, "SAG_IO");

        let bare = UserFriendlyError::from(&SagError::json("expected value"));
        assert_eq!(bare.message, "expected value");
    }

    #[test]
    fn test_format_without_suggestions() {
        let friendly = UserFriendlyError::new(ErrorCategory::Internal, "I/O error", "broken pipe");
        assert_eq!(
            friendly.format_display(),
            "Internal Error: I/O error\n\nbroken pipe"
        );
    }
}
