//! Type Conversions for MetaError
//!
//! This module contains From trait implementations for converting
//! common error types into MetaError.

use super::types::MetaError;

impl From<serde_json::Error> for MetaError {
    fn from(err: serde_json::Error) -> Self {
        Self::JsonError(err.to_string())
    }
}
