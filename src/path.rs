//! Typed dotted parameter paths.
//!
//! A path like `instance.1.zone_id` addresses a node in a parameter tree: a
//! purely numeric segment is a positional index into a repeating parameter,
//! every other segment is a structural field name. Parsing paths into typed
//! segments up front keeps the repeating-vs-exact match rules as comparisons
//! over segments rather than substring trimming.

use std::fmt;
use std::str::FromStr;

use crate::error::MetaError;

/// One segment of a dotted parameter path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// Structural field name
    Name(String),
    /// Positional index into a repeating parameter (1-based in rendered paths)
    Index(u32),
}

impl PathSegment {
    /// Get the field name if this is a Name segment
    pub fn as_name(&self) -> Option<&str> {
        match self {
            Self::Name(name) => Some(name),
            Self::Index(_) => None,
        }
    }

    /// Check if this is an Index segment
    pub fn is_index(&self) -> bool {
        matches!(self, Self::Index(_))
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => f.write_str(name),
            Self::Index(idx) => write!(f, "{idx}"),
        }
    }
}

/// A parsed dotted path addressing a parameter in a tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamPath {
    segments: Vec<PathSegment>,
}

impl ParamPath {
    /// The typed segments, in path order
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Leading field name, if the path starts with a Name segment
    pub fn first_name(&self) -> Option<&str> {
        self.segments.first().and_then(PathSegment::as_name)
    }
}

impl FromStr for ParamPath {
    type Err = MetaError;

    /// Parse a dotted path. The path must be non-empty and every segment
    /// between dots must be non-empty; segments that parse as `u32` become
    /// [`PathSegment::Index`], everything else [`PathSegment::Name`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(MetaError::InvalidPath(s.to_string()));
        }
        let mut segments = Vec::new();
        for part in s.split('.') {
            if part.is_empty() {
                return Err(MetaError::InvalidPath(s.to_string()));
            }
            match part.parse::<u32>() {
                Ok(idx) => segments.push(PathSegment::Index(idx)),
                Err(_) => segments.push(PathSegment::Name(part.to_string())),
            }
        }
        Ok(Self { segments })
    }
}

impl fmt::Display for ParamPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}
