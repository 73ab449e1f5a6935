//! Constructor methods for SagError

use super::types::SagError;

impl SagError {
    /// Create a missing-credential error listing the sources that were checked
    pub fn missing_credential<I, S>(checked: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::MissingCredential {
            checked: checked.into_iter().map(Into::into).collect(),
        }
    }

    /// Create an error for a key file that could not be read
    pub fn credential_unreadable(
        source_name: impl Into<String>,
        path: impl Into<String>,
        error: &std::io::Error,
    ) -> Self {
        Self::CredentialSourceUnreadable {
            source_name: source_name.into(),
            path: path.into(),
            message: error.to_string(),
        }
    }

    /// Create a new IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
            context: None,
        }
    }

    /// Create a new JSON error
    pub fn json(message: impl Into<String>) -> Self {
        Self::Json {
            message: message.into(),
            context: None,
        }
    }

    /// Attach context to errors that carry it; other variants pass through unchanged
    pub fn with_context(self, ctx: impl Into<String>) -> Self {
        match self {
            Self::Io { message, .. } => Self::Io {
                message,
                context: Some(ctx.into()),
            },
            Self::Json { message, .. } => Self::Json {
                message,
                context: Some(ctx.into()),
            },
            other => other,
        }
    }
}
