//! Resolved credential with source tracking

use super::source::{CredentialPriority, CredentialSource};
use serde::Serialize;
use std::fmt;

/// An API key together with the source it was resolved from
///
/// The raw value never appears in `Debug`, `Display` or serialized output;
/// use [`masked_value`](Self::masked_value) for anything user-visible.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedCredential {
    #[serde(skip)]
    value: String,

    /// Where this credential came from
    pub source: CredentialSource,
}

impl ResolvedCredential {
    pub fn new(value: impl Into<String>, source: CredentialSource) -> Self {
        Self {
            value: value.into(),
            source,
        }
    }

    /// Get the credential value
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Get the priority of this credential's source
    pub fn priority(&self) -> CredentialPriority {
        self.source.priority()
    }

    /// Create a masked version for display (e.g., "sk_...9f2a")
    pub fn masked_value(&self) -> String {
        let chars: Vec<char> = self.value.chars().collect();
        if chars.len() > 8 {
            let prefix: String = chars[..3].iter().collect();
            let suffix: String = chars[chars.len() - 4..].iter().collect();
            format!("{}...{}", prefix, suffix)
        } else {
            "*".repeat(chars.len())
        }
    }
}

impl fmt::Display for ResolvedCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.masked_value(), self.source.priority().name())
    }
}

impl fmt::Debug for ResolvedCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedCredential")
            .field("value", &self.masked_value())
            .field("source", &self.source)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_masked_value_long_key() {
        let credential =
            ResolvedCredential::new("sk_0123456789abcdef", CredentialSource::env("SAG_API_KEY"));
        assert_eq!(credential.masked_value(), "sk_...cdef");
    }

    #[test]
    fn test_masked_value_short_key() {
        let credential = ResolvedCredential::new("env-key", CredentialSource::cli());
        assert_eq!(credential.masked_value(), "*******");
    }

    #[test]
    fn test_masked_value_multibyte() {
        let credential = ResolvedCredential::new("ключ-ключ-ключ", CredentialSource::cli());
        assert_eq!(credential.masked_value(), "клю...ключ");
    }

    #[test]
    fn test_value_never_rendered() {
        let credential = ResolvedCredential::new(
            "sk_super_secret_value",
            CredentialSource::env("ELEVENLABS_API_KEY"),
        );

        assert!(!credential.to_string().contains("sk_super_secret_value"));
        assert!(!format!("{:?}", credential).contains("sk_super_secret_value"));

        let json = serde_json::to_string(&credential).unwrap();
        assert!(!json.contains("sk_super_secret_value"));
        assert!(json.contains("ELEVENLABS_API_KEY"));
    }

    #[test]
    fn test_value_and_priority() {
        let credential = ResolvedCredential::new("cli-key", CredentialSource::cli());
        assert_eq!(credential.priority(), CredentialPriority::CliArgument);
        assert_eq!(credential.value(), "cli-key");
    }
}
