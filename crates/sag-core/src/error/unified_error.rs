//! UnifiedError trait implementation for SagError

use super::types::{SagError, UnifiedError};

impl UnifiedError for SagError {
    fn error_code(&self) -> &str {
        match self {
            Self::MissingCredential { .. } => "SAG_MISSING_CREDENTIAL",
            Self::CredentialSourceUnreadable { .. } => "SAG_CREDENTIAL_UNREADABLE",
            Self::Io { .. } => "SAG_IO",
            Self::Json { .. } => "SAG_JSON",
        }
    }

    fn message(&self) -> &str {
        match self {
            Self::MissingCredential { .. } => "No API key configured",
            Self::CredentialSourceUnreadable { message, .. } => message,
            Self::Io { message, .. } => message,
            Self::Json { message, .. } => message,
        }
    }

    fn context(&self) -> Option<&str> {
        match self {
            Self::MissingCredential { .. } => None,
            Self::CredentialSourceUnreadable { source_name, .. } => Some(source_name),
            Self::Io { context, .. } => context.as_deref(),
            Self::Json { context, .. } => context.as_deref(),
        }
    }
}
