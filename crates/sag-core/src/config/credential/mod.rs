//! API key resolution
//!
//! The ElevenLabs API key can come from six places. They are checked in this
//! order and the first non-empty value wins:
//!
//! 1. `--api-key`
//! 2. `--api-key-file` (file contents, trimmed)
//! 3. `ELEVENLABS_API_KEY_FILE` (file contents, trimmed)
//! 4. `SAG_API_KEY_FILE` (file contents, trimmed)
//! 5. `ELEVENLABS_API_KEY` (verbatim)
//! 6. `SAG_API_KEY` (verbatim)
//!
//! A key file that is configured but cannot be read stops resolution with
//! [`SagError::CredentialSourceUnreadable`](crate::error::SagError). When no
//! source yields a key the error is `SagError::MissingCredential`.
//!
//! # Example
//!
//! ```no_run
//! use sag_core::config::Config;
//! use sag_core::config::credential::CredentialResolver;
//!
//! let mut config = Config::new();
//! let resolver = CredentialResolver::from_process_env();
//! let credential = resolver.ensure_api_key(&mut config)?;
//! println!("Using key {} ({})", credential.masked_value(), credential.source);
//! # Ok::<(), sag_core::error::SagError>(())
//! ```

mod env;
mod resolved;
mod resolver;
mod source;

pub use env::{Environment, ProcessEnv};
pub use resolved::ResolvedCredential;
pub use resolver::{CredentialResolver, ensure_api_key};
pub use source::{CredentialPriority, CredentialSource};

/// Flag that passes the key directly
pub const CLI_API_KEY_ARG: &str = "--api-key";

/// Flag that passes a path to a key file
pub const CLI_API_KEY_FILE_ARG: &str = "--api-key-file";

/// Environment variables naming a key file, highest priority first
pub const API_KEY_FILE_ENV_VARS: [&str; 2] = ["ELEVENLABS_API_KEY_FILE", "SAG_API_KEY_FILE"];

/// Environment variables holding the key itself, highest priority first
pub const API_KEY_ENV_VARS: [&str; 2] = ["ELEVENLABS_API_KEY", "SAG_API_KEY"];
