//! Stored item record

use std::fmt;

/// A single inventory record
///
/// Immutable once built. No field is validated; empty strings are allowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredItem {
    id: String,
    description: String,
    location: String,
}

impl StoredItem {
    pub fn new(
        id: impl Into<String>,
        description: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            location: location.into(),
        }
    }

    /// Unique key
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Sort key for listings (not unique)
    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn location(&self) -> &str {
        &self.location
    }
}

impl fmt::Display for StoredItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.description, self.location)
    }
}
