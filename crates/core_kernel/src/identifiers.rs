//! Strongly-typed identifiers for remote CRM entities
//!
//! The remote CRM owns every identifier. These newtypes keep collection names
//! and record ids from being mixed up with arbitrary strings, and make sure an
//! object type can be dropped into a URL path without escaping.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// Collection name of the built-in contacts object
pub const CONTACTS_OBJECT_TYPE: &str = "contacts";

/// Name of a CRM object collection
///
/// Examples: `contacts`, `solicitudes`, `p1234_solicitudes`, `2-1234567`.
/// Always a single, non-empty URL path segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ObjectType(String);

impl ObjectType {
    /// Parses an object type, trimming surrounding whitespace
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if the value is empty or contains
    /// anything other than ASCII letters, digits, `-`, `_` or `.`, or if it
    /// is made only of dots.
    pub fn new(value: impl Into<String>) -> Result<Self, CoreError> {
        let value = value.into();
        let trimmed = value.trim();

        if trimmed.is_empty() {
            return Err(CoreError::validation("object type must not be empty"));
        }

        if let Some(invalid) = trimmed
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.')))
        {
            return Err(CoreError::validation(format!(
                "object type '{}' contains invalid character {:?}",
                trimmed, invalid
            )));
        }

        if trimmed.chars().all(|c| c == '.') {
            return Err(CoreError::validation(format!(
                "object type '{}' is not a collection name",
                trimmed
            )));
        }

        Ok(Self(trimmed.to_string()))
    }

    /// The built-in contacts collection
    pub fn contacts() -> Self {
        Self(CONTACTS_OBJECT_TYPE.to_string())
    }

    /// Returns the collection name
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Path of the collection endpoint on the CRM v3 objects API
    pub fn collection_path(&self) -> String {
        format!("/crm/v3/objects/{}", self.0)
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ObjectType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for ObjectType {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ObjectType> for String {
    fn from(object_type: ObjectType) -> String {
        object_type.0
    }
}

/// Identifier assigned to a record by the remote CRM
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for RecordId {
    fn from(value: String) -> Self {
        Self(value)
    }
}
