//! Error types for apimeta

use thiserror::Error;

/// Errors that can occur when working with API metadata
#[derive(Error, Debug)]
pub enum MetaError {
    /// A dotted parameter path could not be parsed
    #[error("Invalid parameter path: {0:?}")]
    InvalidPath(String),

    /// Required parameters with no assigned value
    #[error("required parameters not assigned: {}", .0.join(", "))]
    RequiredParametersNotAssigned(Vec<String>),

    /// Metadata (de)serialization error
    #[error("JSON error: {0}")]
    JsonError(String),
}

/// Result type for apimeta operations
pub type Result<T> = std::result::Result<T, MetaError>;
