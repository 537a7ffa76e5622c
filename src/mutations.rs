//! Optimistic Mutation Flows
//!
//! Each flow applies the change to the local store first, issues the request,
//! then reconciles with the server response or rolls back on failure. Every
//! flow bumps the reload generation after settling so the next list read is
//! authoritative.

use leptos::prelude::Write;

use crate::api;
use crate::context::AppContext;
use crate::models::{ItemFormData, ShoppingItem};
use crate::store::{
    store_add_item, store_discard_temp_items, store_remove_item, store_replace_temp_items,
    store_toggle_purchased, store_update_item, AppStateStoreFields, AppStore, TEMP_ID_PREFIX,
};

/// Browser-local ISO timestamp for optimistic records
fn now_iso() -> String {
    js_sys::Date::new_0().to_iso_string().into()
}

fn temp_id() -> String {
    format!("{}{}", TEMP_ID_PREFIX, js_sys::Date::now() as u64)
}

/// Create: synthesize a temporary record, then swap in the server's item
pub async fn create_item(store: AppStore, ctx: AppContext, data: ItemFormData) -> Result<(), String> {
    let now = now_iso();
    store_add_item(
        &store,
        ShoppingItem {
            id: temp_id(),
            item_name: data.item_name.clone(),
            description: data.description.clone(),
            quantity: data.quantity.clone(),
            purchased: data.purchased,
            created_at: now.clone(),
            updated_at: now,
        },
    );

    let result = api::create_item(&data).await;
    match &result {
        Ok(created) => store_replace_temp_items(&store, created.clone()),
        Err(_) => store_discard_temp_items(&store),
    }

    ctx.reload();
    result.map(|_| ())
}

/// Update: merge form data into the local record, then reconcile
pub async fn update_item(
    store: AppStore,
    ctx: AppContext,
    id: String,
    data: ItemFormData,
) -> Result<(), String> {
    {
        let items_field = store.items();
        let mut items = items_field.write();
        if let Some(item) = items.iter_mut().find(|item| item.id == id) {
            item.item_name = data.item_name.clone();
            item.description = data.description.clone();
            item.quantity = data.quantity.clone();
            item.purchased = data.purchased;
            item.updated_at = now_iso();
        }
    }

    let result = api::update_item(&id, &data).await;
    if let Ok(updated) = &result {
        store_update_item(&store, updated.clone());
    }

    ctx.reload();
    result.map(|_| ())
}

/// Toggle: flip locally, reconcile with the server item. No toast; a failed
/// toggle is undone by the follow-up read.
pub async fn toggle_purchased(store: AppStore, ctx: AppContext, id: String) {
    store_toggle_purchased(&store, &id);

    match api::toggle_purchased(&id).await {
        Ok(updated) => store_update_item(&store, updated),
        Err(e) => {
            web_sys::console::warn_1(&format!("[MUTATION] toggle failed: {}", e).into());
        }
    }

    ctx.reload();
}

/// Delete: remove locally, then confirm with the server
pub async fn delete_item(store: AppStore, ctx: AppContext, id: String) -> Result<(), String> {
    store_remove_item(&store, &id);

    let result = api::delete_item(&id).await;

    ctx.reload();
    result
}
