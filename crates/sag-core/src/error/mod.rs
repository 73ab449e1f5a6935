//! Error types for sag
//!
//! All errors implement the `UnifiedError` trait which provides:
//! - error_code: A unique identifier for programmatic error handling
//! - message: Human-readable error message
//! - context: Optional additional context about where/why the error occurred
//!
//! `UserFriendlyError` turns any `SagError` into a titled message with
//! suggested actions, which is what the CLI prints.

mod constructors;
mod conversions;
mod types;
mod unified_error;
mod user_messages;

pub use types::{SagError, SagResult, UnifiedError};
pub use user_messages::{ErrorCategory, UserFriendlyError};
