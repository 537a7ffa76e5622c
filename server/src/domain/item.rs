//! Shopping Item Entity
//!
//! A single shopping-list entry. Field names serialize as camelCase to match
//! the JSON contract the client expects.

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::entity::Entity;

/// A shopping-list item
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingItem {
    /// Server-generated UUID, immutable once assigned
    pub id: String,
    pub item_name: String,
    pub description: String,
    /// String-encoded quantity, validated client-side to 1-10
    pub quantity: String,
    pub purchased: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Creation payload: the item shape minus server-assigned fields
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewItem {
    pub item_name: String,
    #[serde(default)]
    pub description: String,
    pub quantity: String,
    #[serde(default)]
    pub purchased: bool,
}

/// Partial-update payload: only present fields are written
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemChanges {
    pub item_name: Option<String>,
    pub description: Option<String>,
    pub quantity: Option<String>,
    pub purchased: Option<bool>,
}

impl ShoppingItem {
    /// Build a persisted item from a creation payload, assigning id and timestamps
    pub fn from_new(new: NewItem) -> Self {
        // Microsecond precision, matching what the database stores
        let now = Utc::now().trunc_subsecs(6);
        Self {
            id: Uuid::new_v4().to_string(),
            item_name: new.item_name,
            description: new.description,
            quantity: new.quantity,
            purchased: new.purchased,
            created_at: now,
            updated_at: now,
        }
    }
}

impl Entity for ShoppingItem {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_new_assigns_id_and_timestamps() {
        let item = ShoppingItem::from_new(NewItem {
            item_name: "Milk".to_string(),
            description: String::new(),
            quantity: "2".to_string(),
            purchased: false,
        });
        assert!(!item.id.is_empty());
        assert_eq!(item.item_name, "Milk");
        assert!(!item.purchased);
        assert_eq!(item.created_at, item.updated_at);
    }

    #[test]
    fn test_new_item_defaults() {
        let new: NewItem = serde_json::from_str(r#"{"itemName":"Eggs","quantity":"1"}"#).unwrap();
        assert_eq!(new.description, "");
        assert!(!new.purchased);
    }

    #[test]
    fn test_camel_case_wire_format() {
        let item = ShoppingItem::from_new(NewItem {
            item_name: "Bread".to_string(),
            description: "Rye".to_string(),
            quantity: "1".to_string(),
            purchased: true,
        });
        let json = serde_json::to_value(&item).unwrap();
        assert!(json.get("itemName").is_some());
        assert!(json.get("createdAt").is_some());
        assert!(json.get("item_name").is_none());
    }
}
