//! The catalog entity and its create-request shape.

use serde::{Deserialize, Serialize};

/// A stored catalog row. `id` is assigned by the database on insert and
/// never reused or mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mountain {
    pub id: i64,
    pub name: String,
    pub height: i32,
    /// Empty string means "no local name"; the schema makes no
    /// null/empty distinction.
    #[serde(default)]
    pub local_name: String,
}

/// Create-request body. Any `id` field in the payload is ignored; the
/// database assigns one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewMountain {
    pub name: String,
    pub height: i32,
    #[serde(default)]
    pub local_name: String,
}

impl NewMountain {
    /// Rejects entities the store must never hold: a row without a name.
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("name must not be empty".to_owned());
        }
        Ok(())
    }

    /// The stored row this input becomes once storage assigns `id`.
    pub fn into_mountain(self, id: i64) -> Mountain {
        Mountain { id, name: self.name, height: self.height, local_name: self.local_name }
    }
}
