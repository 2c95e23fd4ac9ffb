//! Common types for the shared crate
//!
//! Utility types used across the workspace

use serde::{Deserialize, Serialize};

/// Timestamp type (Unix milliseconds)
pub type Timestamp = i64;

/// Reference to a named entity as returned by the API
///
/// List endpoints return bare ids; detail endpoints populate the
/// reference with display fields. Exactly one shape is present.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum EntityRef {
    /// Bare string id
    Id(String),
    /// Populated reference
    Expanded(NamedRef),
}

/// Populated entity reference carrying display fields
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NamedRef {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl EntityRef {
    /// Resolve the canonical string id regardless of shape
    pub fn id(&self) -> &str {
        match self {
            EntityRef::Id(id) => id,
            EntityRef::Expanded(r) => &r.id,
        }
    }
}

impl From<&str> for EntityRef {
    fn from(id: &str) -> Self {
        EntityRef::Id(id.to_string())
    }
}

impl From<String> for EntityRef {
    fn from(id: String) -> Self {
        EntityRef::Id(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_ref_resolves_both_shapes() {
        let bare = EntityRef::Id("abc123".to_string());
        assert_eq!(bare.id(), "abc123");

        let expanded = EntityRef::Expanded(NamedRef {
            id: "abc123".to_string(),
            name: "Table 5".to_string(),
            email: None,
        });
        assert_eq!(expanded.id(), "abc123");
    }

    #[test]
    fn test_entity_ref_deserializes_untagged() {
        let bare: EntityRef = serde_json::from_str(r#""abc123""#).unwrap();
        assert_eq!(bare, EntityRef::Id("abc123".to_string()));

        let expanded: EntityRef =
            serde_json::from_str(r#"{"_id":"abc123","name":"Table 5"}"#).unwrap();
        assert_eq!(expanded.id(), "abc123");
    }
}
