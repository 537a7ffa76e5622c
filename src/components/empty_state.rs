//! Empty State Component

use leptos::prelude::*;

/// Shown when the list loads successfully but has no items
#[component]
pub fn EmptyState(#[prop(into)] on_add: Callback<()>) -> impl IntoView {
    view! {
        <div class="empty-state">
            <p>"Your shopping list is empty :("</p>
            <button type="button" class="add-btn" on:click=move |_| on_add.run(())>
                "Add your first item"
            </button>
        </div>
    }
}
