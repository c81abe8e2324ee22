//! Domain identifier types.
//!
//! Upstream identifiers arrive as JSON numbers or strings depending on the
//! endpoint. Both are normalized to their string form so `12` and `"12"`
//! refer to the same property.

use std::fmt;

use serde::Serialize;

/// Property identifier - newtype for type safety.
///
/// The inner String is private to ensure all construction goes through
/// the defined constructors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct PropertyId(String);

impl PropertyId {
    /// Create a new PropertyId, trimming surrounding whitespace.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into().trim().to_string())
    }

    /// Get the property ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PropertyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for PropertyId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for PropertyId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<i64> for PropertyId {
    fn from(n: i64) -> Self {
        Self(n.to_string())
    }
}

/// Identifier of a booking, block or pricing rule row.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for RecordId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<i64> for RecordId {
    fn from(n: i64) -> Self {
        Self(n.to_string())
    }
}
