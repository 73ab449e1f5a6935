//! Credential source definitions with priority-based resolution
//!
//! Each source records exactly where a key came from so the CLI can tell the
//! user which of the overlapping settings is in effect.

use super::{CLI_API_KEY_ARG, CLI_API_KEY_FILE_ARG};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Priority level for credential sources (lower number = higher priority)
///
/// The priority order is:
/// 1. `--api-key`
/// 2. `--api-key-file`
/// 3. Key file named by an environment variable
/// 4. Key held directly in an environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum CredentialPriority {
    /// CLI argument: --api-key
    CliArgument = 1,
    /// CLI argument: --api-key-file
    CliFile = 2,
    /// Environment variables: ELEVENLABS_API_KEY_FILE, SAG_API_KEY_FILE
    EnvironmentFile = 3,
    /// Environment variables: ELEVENLABS_API_KEY, SAG_API_KEY
    Environment = 4,
}

impl CredentialPriority {
    /// Get the human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            CredentialPriority::CliArgument => "CLI argument",
            CredentialPriority::CliFile => "CLI key file",
            CredentialPriority::EnvironmentFile => "Environment key file",
            CredentialPriority::Environment => "Environment variable",
        }
    }
}

impl fmt::Display for CredentialPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The source of a credential with additional metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CredentialSource {
    /// From the --api-key argument
    CliArgument {
        /// The argument name
        arg_name: String,
    },
    /// From the file named by --api-key-file
    CliFile {
        /// The argument name
        arg_name: String,
        /// Path to the key file
        path: PathBuf,
    },
    /// From a file named by an environment variable
    EnvironmentFile {
        /// The environment variable name
        var_name: String,
        /// Path to the key file
        path: PathBuf,
    },
    /// From an environment variable holding the key
    Environment {
        /// The environment variable name
        var_name: String,
    },
}

impl CredentialSource {
    /// Create a source for `--api-key`
    pub fn cli() -> Self {
        CredentialSource::CliArgument {
            arg_name: CLI_API_KEY_ARG.to_string(),
        }
    }

    /// Create a source for `--api-key-file`
    pub fn cli_file(path: impl Into<PathBuf>) -> Self {
        CredentialSource::CliFile {
            arg_name: CLI_API_KEY_FILE_ARG.to_string(),
            path: path.into(),
        }
    }

    /// Create a source for a key file named by an environment variable
    pub fn env_file(var_name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        CredentialSource::EnvironmentFile {
            var_name: var_name.into(),
            path: path.into(),
        }
    }

    /// Create an environment variable source
    pub fn env(var_name: impl Into<String>) -> Self {
        CredentialSource::Environment {
            var_name: var_name.into(),
        }
    }

    /// Get the priority of this source
    pub fn priority(&self) -> CredentialPriority {
        match self {
            CredentialSource::CliArgument { .. } => CredentialPriority::CliArgument,
            CredentialSource::CliFile { .. } => CredentialPriority::CliFile,
            CredentialSource::EnvironmentFile { .. } => CredentialPriority::EnvironmentFile,
            CredentialSource::Environment { .. } => CredentialPriority::Environment,
        }
    }

    /// The flag or environment variable that configured this source
    pub fn setting_name(&self) -> &str {
        match self {
            CredentialSource::CliArgument { arg_name }
            | CredentialSource::CliFile { arg_name, .. } => arg_name,
            CredentialSource::EnvironmentFile { var_name, .. }
            | CredentialSource::Environment { var_name } => var_name,
        }
    }

    /// Path of the key file, for file-based sources
    pub fn path(&self) -> Option<&Path> {
        match self {
            CredentialSource::CliFile { path, .. }
            | CredentialSource::EnvironmentFile { path, .. } => Some(path),
            _ => None,
        }
    }

    /// Get a description of where this credential came from
    pub fn description(&self) -> String {
        match self {
            CredentialSource::CliArgument { arg_name } => {
                format!("CLI argument: {}", arg_name)
            }
            CredentialSource::CliFile { arg_name, path } => {
                format!("CLI argument: {} {}", arg_name, path.display())
            }
            CredentialSource::EnvironmentFile { var_name, path } => {
                format!("Environment: ${} -> {}", var_name, path.display())
            }
            CredentialSource::Environment { var_name } => {
                format!("Environment: ${}", var_name)
            }
        }
    }
}

impl fmt::Display for CredentialSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

#[cfg(test)]
#[path = "source_tests.rs"]
mod source_tests;
