//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The mutation
//! layer applies optimistic edits here first, then reconciles with the
//! server response. The reconciliation itself is plain-vector logic so it
//! can be unit tested without a reactive runtime.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::ShoppingItem;

/// Prefix used for locally synthesized records awaiting a server id
pub const TEMP_ID_PREFIX: &str = "temp-";

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Local reflection of the server's item collection
    pub items: Vec<ShoppingItem>,
    /// True while the list read is in flight
    pub is_loading: bool,
    /// True when the last list read failed
    pub load_failed: bool,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the whole collection with server truth
pub fn store_set_items(store: &AppStore, items: Vec<ShoppingItem>) {
    *store.items().write() = items;
}

/// Append an item (optimistic create)
pub fn store_add_item(store: &AppStore, item: ShoppingItem) {
    store.items().write().push(item);
}

/// Update an item in the store by ID
pub fn store_update_item(store: &AppStore, updated_item: ShoppingItem) {
    update_item_in(&mut store.items().write(), updated_item);
}

/// Remove an item from the store by ID
pub fn store_remove_item(store: &AppStore, item_id: &str) {
    store.items().write().retain(|item| item.id != item_id);
}

/// Flip an item's purchased flag locally
pub fn store_toggle_purchased(store: &AppStore, item_id: &str) {
    toggle_purchased_in(&mut store.items().write(), item_id);
}

/// Swap temporary records for the server-confirmed item
pub fn store_replace_temp_items(store: &AppStore, created: ShoppingItem) {
    replace_temp_items_in(&mut store.items().write(), created);
}

/// Drop temporary records after a failed create
pub fn store_discard_temp_items(store: &AppStore) {
    store
        .items()
        .write()
        .retain(|item| !item.id.starts_with(TEMP_ID_PREFIX));
}

// ========================
// Reconciliation Logic
// ========================

pub fn update_item_in(items: &mut Vec<ShoppingItem>, updated_item: ShoppingItem) {
    if let Some(item) = items.iter_mut().find(|item| item.id == updated_item.id) {
        *item = updated_item;
    }
}

pub fn toggle_purchased_in(items: &mut [ShoppingItem], item_id: &str) {
    if let Some(item) = items.iter_mut().find(|item| item.id == item_id) {
        item.purchased = !item.purchased;
    }
}

pub fn replace_temp_items_in(items: &mut Vec<ShoppingItem>, created: ShoppingItem) {
    for item in items.iter_mut() {
        if item.id.starts_with(TEMP_ID_PREFIX) {
            *item = created.clone();
        }
    }
}
