//! Shopping Item Card Component
//!
//! One row in the list: purchase checkbox, name, description, edit and
//! delete actions. Purchased items render struck through.

use leptos::prelude::*;

use crate::models::ShoppingItem;

#[component]
pub fn ItemCard(
    item: ShoppingItem,
    #[prop(into)] on_toggle: Callback<String>,
    #[prop(into)] on_edit: Callback<ShoppingItem>,
    #[prop(into)] on_delete: Callback<String>,
) -> impl IntoView {
    let toggle_id = item.id.clone();
    let delete_id = item.id.clone();
    let edit_item = item.clone();
    let purchased = item.purchased;
    let name = item.item_name.clone();
    let description = item.description.clone();

    let text_class = move || {
        if purchased {
            "item-text purchased"
        } else {
            "item-text"
        }
    };

    view! {
        <div class="item-card">
            <input
                type="checkbox"
                class="purchase-checkbox"
                prop:checked=purchased
                on:change=move |_| on_toggle.run(toggle_id.clone())
            />
            <div class="item-body">
                <p class=text_class>{name}</p>
                <p class=text_class>{description}</p>
            </div>
            <button
                type="button"
                class="edit-btn"
                aria-label="Edit item"
                on:click=move |_| on_edit.run(edit_item.clone())
            >
                "Edit"
            </button>
            <button
                type="button"
                class="delete-btn"
                aria-label="Delete item"
                on:click=move |_| on_delete.run(delete_id.clone())
            >
                "Delete"
            </button>
        </div>
    }
}
