//! Error handling types for apimeta.
//!
//! This module is intentionally dependency-light and shared across the crate.

mod conversions;
pub mod types;

pub use types::*;
