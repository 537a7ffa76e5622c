//! Item Modal Component
//!
//! One modal for both add and edit: pre-filled from the item under edit,
//! validated before submission, per-field error messages.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::context::AppContext;
use crate::models::ItemFormData;
use crate::mutations;
use crate::store::use_app_store;
use crate::validate::{validate_item_form, FormErrors};

#[component]
pub fn ItemModal() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let (item_name, set_item_name) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (quantity, set_quantity) = signal(String::new());
    let (purchased, set_purchased) = signal(false);
    let (errors, set_errors) = signal(FormErrors::default());
    let (pending, set_pending) = signal(false);

    // Reset the form each time the modal opens, pre-filled in edit mode
    Effect::new(move |_| {
        if ctx.item_modal_open.get() {
            let initial = ctx
                .editing_item
                .get()
                .map(|item| ItemFormData::from_item(&item))
                .unwrap_or_default();
            set_item_name.set(initial.item_name);
            set_description.set(initial.description);
            set_quantity.set(initial.quantity);
            set_purchased.set(initial.purchased);
            set_errors.set(FormErrors::default());
        }
    });

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if pending.get() {
            return;
        }

        let data = ItemFormData {
            item_name: item_name.get(),
            description: description.get(),
            quantity: quantity.get(),
            purchased: purchased.get(),
        };

        let data = match validate_item_form(&data) {
            Ok(data) => data,
            Err(field_errors) => {
                set_errors.set(field_errors);
                return;
            }
        };

        set_errors.set(FormErrors::default());
        set_pending.set(true);
        let editing = ctx.editing_item.get_untracked();

        spawn_local(async move {
            let result = match &editing {
                Some(item) => mutations::update_item(store, ctx, item.id.clone(), data).await,
                None => mutations::create_item(store, ctx, data).await,
            };
            set_pending.set(false);

            match result {
                Ok(()) => {
                    ctx.close_item_modal();
                    ctx.toast_success(if editing.is_some() {
                        "Item updated successfully!"
                    } else {
                        "Item added successfully!"
                    });
                }
                Err(_) => {
                    ctx.toast_error(if editing.is_some() {
                        "Failed to update item. Please try again."
                    } else {
                        "Failed to add item. Please try again."
                    });
                }
            }
        });
    };

    view! {
        <Show when=move || ctx.item_modal_open.get()>
            <div class="modal-backdrop" on:click=move |_| ctx.close_item_modal()>
                <div class="modal" on:click=|ev| ev.stop_propagation()>
                    <h2>
                        {move || if ctx.editing_item.get().is_some() { "Edit Item" } else { "Add Item" }}
                    </h2>

                    <form class="item-form" on:submit=submit>
                        <label>
                            "Item Name"
                            <input
                                type="text"
                                placeholder="Item Name"
                                prop:value=move || item_name.get()
                                on:input=move |ev| {
                                    let target = ev.target().unwrap();
                                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                    set_item_name.set(input.value());
                                }
                            />
                        </label>
                        {move || errors.get().item_name.map(|msg| view! {
                            <p class="field-error">{msg}</p>
                        })}

                        <label>
                            "Description"
                            <input
                                type="text"
                                placeholder="Description"
                                prop:value=move || description.get()
                                on:input=move |ev| {
                                    let target = ev.target().unwrap();
                                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                    set_description.set(input.value());
                                }
                            />
                        </label>
                        {move || errors.get().description.map(|msg| view! {
                            <p class="field-error">{msg}</p>
                        })}

                        <label>
                            "How many?"
                            <select
                                prop:value=move || quantity.get()
                                on:change=move |ev| {
                                    let target = ev.target().unwrap();
                                    let select = target.dyn_ref::<web_sys::HtmlSelectElement>().unwrap();
                                    set_quantity.set(select.value());
                                }
                            >
                                <option value="">"Select quantity"</option>
                                {(1..=10).map(|n| view! {
                                    <option value=n.to_string()>{n}</option>
                                }).collect_view()}
                            </select>
                        </label>
                        {move || errors.get().quantity.map(|msg| view! {
                            <p class="field-error">{msg}</p>
                        })}

                        <label class="purchased-row">
                            <input
                                type="checkbox"
                                prop:checked=move || purchased.get()
                                on:change=move |ev| {
                                    let target = ev.target().unwrap();
                                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                    set_purchased.set(input.checked());
                                }
                            />
                            "Purchased?"
                        </label>

                        <div class="modal-actions">
                            <button type="button" class="cancel-btn" on:click=move |_| ctx.close_item_modal()>
                                "Cancel"
                            </button>
                            <button type="submit" class="submit-btn" disabled=move || pending.get()>
                                {move || {
                                    if pending.get() {
                                        "Saving..."
                                    } else if ctx.editing_item.get().is_some() {
                                        "Save Changes"
                                    } else {
                                        "Add Item"
                                    }
                                }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}
