use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::ItemType;

/// Free-form, type-specific fields kept in the `attributes` JSON column.
pub type Attributes = serde_json::Map<String, serde_json::Value>;

/// A row of the `items` table.
///
/// `item_type` stays a raw string here: the table does not constrain it, and
/// the mapper is where an unknown discriminator is detected.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct StoredItem {
    pub id: i64,
    #[serde(rename = "type")]
    pub item_type: String,
    pub parent_id: Option<i64>,
    pub title: String,
    pub description: String,
    pub attributes: Attributes,
    pub created_at: DateTime<Utc>,
}

/// Insert payload for a new row. `id` and `created_at` are assigned by the store.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewItem {
    #[serde(rename = "type", default)]
    pub item_type: ItemType,
    #[serde(default)]
    pub parent_id: Option<i64>,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub attributes: Attributes,
}

impl NewItem {
    #[must_use]
    pub fn new(item_type: ItemType, title: impl Into<String>) -> Self {
        Self {
            item_type,
            title: title.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn parent(mut self, parent_id: i64) -> Self {
        self.parent_id = Some(parent_id);
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn attribute(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.attributes.insert(key.into(), value);
        self
    }
}
