//! Shopping List Frontend App
//!
//! Page shell: loads the item collection, renders the loading / error /
//! empty / list states, and hosts the modals and toast banner.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{DeleteConfirmModal, EmptyState, ItemCard, ItemModal, ToastBanner};
use crate::context::AppContext;
use crate::models::ShoppingItem;
use crate::store::AppStateStoreFields;
use crate::store::{store_set_items, AppState, AppStore};

#[component]
pub fn App() -> impl IntoView {
    let store = AppStore::new(AppState::default());
    let ctx = AppContext::new();
    provide_context(store);
    provide_context(ctx);

    // Load items whenever the reload generation changes. A newer read
    // supersedes this one: stale responses are dropped.
    Effect::new(move |_| {
        let generation = ctx.reload_trigger.get();
        *store.is_loading().write() = true;
        spawn_local(async move {
            let result = api::fetch_items().await;
            if ctx.reload_trigger.get_untracked() != generation {
                return;
            }
            match result {
                Ok(items) => {
                    web_sys::console::log_1(&format!("[APP] Loaded {} items", items.len()).into());
                    store_set_items(&store, items);
                    *store.load_failed().write() = false;
                }
                Err(e) => {
                    web_sys::console::warn_1(&format!("[APP] Load failed: {}", e).into());
                    *store.load_failed().write() = true;
                }
            }
            *store.is_loading().write() = false;
        });
    });

    let ready = move || !store.is_loading().get() && !store.load_failed().get();

    view! {
        <div class="page">
            <header class="app-header">
                <h1>"SHOPPING LIST"</h1>
            </header>

            <main class="content">
                <Show when=move || store.is_loading().get()>
                    <div class="spinner">"Loading..."</div>
                </Show>

                <Show when=move || !store.is_loading().get() && store.load_failed().get()>
                    <p class="load-error">"Error loading items. Please try again."</p>
                </Show>

                <Show when=move || ready() && store.items().read().is_empty()>
                    <EmptyState on_add=move |_| ctx.open_item_modal(None) />
                </Show>

                <Show when=move || ready() && !store.items().read().is_empty()>
                    <div class="list-header">
                        <h2>"Your Items"</h2>
                        <button type="button" class="add-btn" on:click=move |_| ctx.open_item_modal(None)>
                            "Add Item"
                        </button>
                    </div>

                    {move || store.items().get().into_iter().map(|item| view! {
                        <ItemCard
                            item=item
                            on_toggle=move |id: String| {
                                spawn_local(crate::mutations::toggle_purchased(store, ctx, id));
                            }
                            on_edit=move |item: ShoppingItem| ctx.open_item_modal(Some(item))
                            on_delete=move |id: String| ctx.open_delete_modal(id)
                        />
                    }).collect_view()}
                </Show>
            </main>

            <ItemModal />
            <DeleteConfirmModal />
            <ToastBanner />
        </div>
    }
}
