//! apimeta
//!
//! Spec-level metadata types for HTTP API definitions: an [`Api`] descriptor
//! composed of recursively nested [`Parameter`] descriptors, plus the
//! parameter tree resolver (dotted-path lookup, rename/normalize traversal,
//! required-parameter validation).
//!
//! This crate intentionally contains only *spec-level* types and pure tree
//! utilities. Request signing, HTTP transport, retries, and CLI/config
//! loading live with the callers that consume this metadata.
#![deny(unsafe_code)]

pub mod error;
pub mod path;
pub mod types;

pub use error::{MetaError, Result};
pub use path::{ParamPath, PathSegment};
pub use types::{Api, Parameter, Product, TYPE_REPEAT, TYPE_REPEAT_LIST, required_first};
