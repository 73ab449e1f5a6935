//! Credential resolver for multi-source API key loading
//!
//! Checks every source in priority order and stops at the first one that
//! yields a non-empty key.

use super::env::{Environment, ProcessEnv};
use super::resolved::ResolvedCredential;
use super::source::CredentialSource;
use super::{API_KEY_ENV_VARS, API_KEY_FILE_ENV_VARS, CLI_API_KEY_ARG, CLI_API_KEY_FILE_ARG};
use crate::config::Config;
use crate::error::{SagError, SagResult};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Credential resolver that loads the API key from multiple sources
pub struct CredentialResolver<E = ProcessEnv> {
    env: E,
}

impl CredentialResolver<ProcessEnv> {
    /// Create a resolver that reads the process environment
    pub fn from_process_env() -> Self {
        Self::with_env(ProcessEnv)
    }
}

impl<E: Environment> CredentialResolver<E> {
    /// Create a resolver over a custom environment
    pub fn with_env(env: E) -> Self {
        Self { env }
    }

    /// Every setting consulted during resolution, highest priority first
    pub fn checked_sources() -> Vec<&'static str> {
        let mut sources = vec![CLI_API_KEY_ARG, CLI_API_KEY_FILE_ARG];
        sources.extend(API_KEY_FILE_ENV_VARS);
        sources.extend(API_KEY_ENV_VARS);
        sources
    }

    /// Find the API key without modifying `config`
    pub fn resolve(&self, config: &Config) -> SagResult<ResolvedCredential> {
        // 1. --api-key (highest priority)
        if let Some(key) = config.api_key() {
            debug!("Found API key from CLI argument {}", CLI_API_KEY_ARG);
            return Ok(ResolvedCredential::new(key, CredentialSource::cli()));
        }

        // 2. --api-key-file
        if let Some(path) = config.api_key_file() {
            let source = CredentialSource::cli_file(expand_path(path));
            if let Some(credential) = read_key_file(source)? {
                return Ok(credential);
            }
        }

        // 3. Key files named by environment variables
        for var_name in API_KEY_FILE_ENV_VARS {
            if let Some(path) = self.env.non_empty_var(var_name) {
                let source = CredentialSource::env_file(var_name, expand_path(Path::new(&path)));
                if let Some(credential) = read_key_file(source)? {
                    return Ok(credential);
                }
            }
        }

        // 4. Keys held directly in environment variables, used verbatim
        for var_name in API_KEY_ENV_VARS {
            if let Some(key) = self.env.non_empty_var(var_name) {
                debug!("Found API key from environment variable {}", var_name);
                return Ok(ResolvedCredential::new(key, CredentialSource::env(var_name)));
            }
        }

        debug!("No API key found in any source");
        Err(SagError::missing_credential(Self::checked_sources()))
    }

    /// Resolve the API key and store it in `config.api_key`
    ///
    /// On error `config` is left exactly as it was.
    pub fn ensure_api_key(&self, config: &mut Config) -> SagResult<ResolvedCredential> {
        let credential = self.resolve(config)?;
        config.api_key = Some(credential.value().to_string());
        Ok(credential)
    }
}

/// Resolve the API key from the process environment into `config`
pub fn ensure_api_key(config: &mut Config) -> SagResult<ResolvedCredential> {
    CredentialResolver::from_process_env().ensure_api_key(config)
}

/// Read a key file, trimming surrounding whitespace
///
/// Returns `Ok(None)` when the file is readable but holds nothing usable.
fn read_key_file(source: CredentialSource) -> SagResult<Option<ResolvedCredential>> {
    let Some(path) = source.path() else {
        return Ok(None);
    };

    let contents = fs::read_to_string(path).map_err(|e| {
        SagError::credential_unreadable(source.setting_name(), path.display().to_string(), &e)
    })?;

    let key = contents.trim();
    if key.is_empty() {
        warn!(
            "API key file {} from {} is empty, trying next source",
            path.display(),
            source.setting_name()
        );
        return Ok(None);
    }

    debug!(
        "Found API key from {} ({})",
        source.setting_name(),
        path.display()
    );
    Ok(Some(ResolvedCredential::new(key, source)))
}

/// Expand a leading `~` to the home directory
fn expand_path(path: &Path) -> PathBuf {
    match path.to_str() {
        Some(raw) if raw.starts_with('~') => PathBuf::from(shellexpand::tilde(raw).into_owned()),
        _ => path.to_path_buf(),
    }
}
