//! Product descriptors.

use serde::{Deserialize, Serialize};

/// A product owning a family of APIs
///
/// Shared (not owned) by the [`crate::Api`] values generated for it; used
/// when building documentation links.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Product {
    /// Product code, used as the path segment in documentation links
    pub code: String,

    /// Human-readable product name
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,

    /// Metadata version this product was generated from
    #[serde(skip_serializing_if = "String::is_empty")]
    pub version: String,

    /// Names of the APIs published under this product
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub api_names: Vec<String>,
}
