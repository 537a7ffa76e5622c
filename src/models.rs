//! Frontend Models
//!
//! Data structures matching the backend wire format (camelCase JSON).

use serde::{Deserialize, Serialize};

/// Shopping item as the server returns it. Timestamps stay opaque strings on
/// the client side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingItem {
    pub id: String,
    pub item_name: String,
    pub description: String,
    pub quantity: String,
    pub purchased: bool,
    pub created_at: String,
    pub updated_at: String,
}

/// Validated form payload for create and update requests
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemFormData {
    pub item_name: String,
    pub description: String,
    pub quantity: String,
    pub purchased: bool,
}

impl ItemFormData {
    /// Pre-fill the form from an existing item (edit mode)
    pub fn from_item(item: &ShoppingItem) -> Self {
        Self {
            item_name: item.item_name.clone(),
            description: item.description.clone(),
            quantity: item.quantity.clone(),
            purchased: item.purchased,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_wire_format_round_trips() {
        let json = r#"{"id":"abc","itemName":"Milk","description":"Whole","quantity":"2","purchased":false,"createdAt":"2026-01-01T00:00:00Z","updatedAt":"2026-01-01T00:00:00Z"}"#;
        let item: ShoppingItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.item_name, "Milk");

        let value = serde_json::to_value(&item).unwrap();
        assert!(value.get("itemName").is_some());
        assert!(value.get("item_name").is_none());
    }

    #[test]
    fn test_form_data_pre_fills_from_item() {
        let item = ShoppingItem {
            id: "abc".to_string(),
            item_name: "Milk".to_string(),
            description: String::new(),
            quantity: "2".to_string(),
            purchased: true,
            created_at: "2026-01-01T00:00:00Z".to_string(),
            updated_at: "2026-01-01T00:00:00Z".to_string(),
        };
        let form = ItemFormData::from_item(&item);
        assert_eq!(form.item_name, "Milk");
        assert_eq!(form.quantity, "2");
        assert!(form.purchased);
    }
}
