//! sag core library
//!
//! Configuration and credential handling shared by the `sag` command-line
//! tool: the runtime [`Config`], API key resolution across CLI flags, key
//! files and environment variables, and the error types surfaced to users.

pub mod config;
pub mod error;

// Re-export commonly used types
pub use config::Config;
pub use config::credential::{
    CredentialResolver, CredentialSource, ResolvedCredential, ensure_api_key,
};
pub use error::{SagError, SagResult};
