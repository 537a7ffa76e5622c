//! Delete Confirmation Modal Component
//!
//! Confirms a pending delete. The modal closes as soon as the user confirms;
//! the optimistic flow and toast settle afterwards.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::AppContext;
use crate::mutations;
use crate::store::use_app_store;

#[component]
pub fn DeleteConfirmModal() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let confirm = move |_| {
        let Some(id) = ctx.delete_target.get_untracked() else {
            return;
        };
        ctx.close_delete_modal();

        spawn_local(async move {
            match mutations::delete_item(store, ctx, id).await {
                Ok(()) => ctx.toast_success("Item deleted successfully!"),
                Err(_) => ctx.toast_error("Failed to delete item. Please try again."),
            }
        });
    };

    view! {
        <Show when=move || ctx.delete_target.get().is_some()>
            <div class="modal-backdrop" on:click=move |_| ctx.close_delete_modal()>
                <div class="modal" on:click=|ev| ev.stop_propagation()>
                    <h2>"Delete Item?"</h2>
                    <p>"Are you sure you want to delete this item? This can not be undone."</p>
                    <div class="modal-actions">
                        <button type="button" class="cancel-btn" on:click=move |_| ctx.close_delete_modal()>
                            "Cancel"
                        </button>
                        <button type="button" class="confirm-btn" on:click=confirm>
                            "Delete"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
