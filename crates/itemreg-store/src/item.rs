use std::fmt;

use serde::{Deserialize, Serialize};

/// Store-assigned item identifier. Unique for the lifetime of a database;
/// identifiers of deleted items are never reused.
pub type ItemId = i64;

/// A stored item record.
///
/// Serialized field names are camelCase to match the service's wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Identifier assigned by the store on insert. Immutable.
    pub id: ItemId,
    /// Display name. Required, non-blank.
    pub name: String,
    /// Optional free-form description. Omitted from JSON when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Milliseconds since the Unix epoch, set by the store on insert.
    pub created_at: u64,
    /// Milliseconds since the Unix epoch, set by the store on write.
    pub updated_at: u64,
}

/// A client-submitted item, validated before it reaches a backend.
///
/// The only validation rule in the system: `name` must be present and
/// non-blank. Everything else is accepted as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItem {
    pub name: String,
    pub description: Option<String>,
}

impl NewItem {
    /// Build a validated record from a name and optional description.
    pub fn new(
        name: impl Into<String>,
        description: Option<String>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::MissingName);
        }
        Ok(Self { name, description })
    }

    /// Build from optional raw fields, as they arrive off the wire.
    pub fn from_parts(
        name: Option<String>,
        description: Option<String>,
    ) -> Result<Self, ValidationError> {
        match name {
            Some(name) => Self::new(name, description),
            None => Err(ValidationError::MissingName),
        }
    }
}

/// Rejection of a client-submitted record at the service boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The required `name` field is absent or blank.
    MissingName,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingName => write!(f, "item validation failed: name is required"),
        }
    }
}

impl std::error::Error for ValidationError {}
