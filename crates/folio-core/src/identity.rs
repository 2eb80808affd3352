//! # Collection Identity
//!
//! `CollectionName` is the registry key. Lookups by `&str` work through
//! `Borrow<str>`, so callers holding a bare name never need to allocate.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::FolioError;

/// Unique name of a content collection (e.g. `"blog"`).
///
/// Rejects the empty string and names with leading or trailing whitespace.
/// Ordering, equality and hashing are those of the inner string.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CollectionName(String);

impl CollectionName {
    /// Create a collection name, validating it.
    pub fn new(name: impl Into<String>) -> Result<Self, FolioError> {
        let name = name.into();
        if name.is_empty() {
            return Err(FolioError::InvalidCollectionName {
                name,
                reason: "must not be empty",
            });
        }
        if name.trim() != name {
            return Err(FolioError::InvalidCollectionName {
                name,
                reason: "must not have surrounding whitespace",
            });
        }
        Ok(Self(name))
    }

    /// Access the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CollectionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for CollectionName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for CollectionName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for CollectionName {
    type Error = FolioError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for CollectionName {
    type Error = FolioError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CollectionName> for String {
    fn from(value: CollectionName) -> Self {
        value.0
    }
}
