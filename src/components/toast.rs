//! Toast Banner Component
//!
//! Success/error feedback for mutations. Auto-dismisses after 4 seconds; the
//! toast id keeps a stale timer from clearing a newer toast.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::{AppContext, ToastSeverity};

const DISMISS_AFTER_MS: u32 = 4_000;

#[component]
pub fn ToastBanner() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    Effect::new(move |_| {
        if let Some(toast) = ctx.toast.get() {
            let id = toast.id;
            spawn_local(async move {
                TimeoutFuture::new(DISMISS_AFTER_MS).await;
                ctx.dismiss_toast(id);
            });
        }
    });

    view! {
        {move || ctx.toast.get().map(|toast| {
            let id = toast.id;
            let class = match toast.severity {
                ToastSeverity::Success => "toast success",
                ToastSeverity::Error => "toast error",
            };
            view! {
                <div class=class role="alert">
                    <span>{toast.message.clone()}</span>
                    <button type="button" class="toast-close" on:click=move |_| ctx.dismiss_toast(id)>
                        "×"
                    </button>
                </div>
            }
        })}
    }
}
