//! Runtime configuration shared by every sag command

use std::fmt;
use std::path::{Path, PathBuf};

/// Runtime configuration for sag
///
/// The CLI layer fills this from its flags and hands it to the credential
/// resolver, which stores the winning key in `api_key`. Empty strings are
/// treated the same as unset values.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// API key, either passed directly or filled in by resolution
    pub api_key: Option<String>,
    /// Path to a file whose contents are the API key
    pub api_key_file: Option<PathBuf>,
}

impl Config {
    /// Create an empty config
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_api_key_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.api_key_file = Some(path.into());
        self
    }

    /// The API key, if one is set and non-empty
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|key| !key.is_empty())
    }

    /// The key file path, if one is set and non-empty
    pub fn api_key_file(&self) -> Option<&Path> {
        self.api_key_file
            .as_deref()
            .filter(|path| !path.as_os_str().is_empty())
    }
}

// Keeps the key out of `{:?}` output and debug logs.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &self.api_key().map(|_| "<redacted>"))
            .field("api_key_file", &self.api_key_file)
            .finish()
    }
}
