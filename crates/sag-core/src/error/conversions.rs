//! From trait implementations for SagError conversions

use super::types::SagError;

impl From<std::io::Error> for SagError {
    fn from(error: std::io::Error) -> Self {
        Self::io(error.to_string())
    }
}

impl From<serde_json::Error> for SagError {
    fn from(error: serde_json::Error) -> Self {
        Self::json(error.to_string())
    }
}
