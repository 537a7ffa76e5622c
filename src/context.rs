//! Application Context
//!
//! Shared state provided via Leptos Context API: the reload generation for
//! list reads, modal state, and the toast banner.

use leptos::prelude::*;

use crate::models::ShoppingItem;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastSeverity {
    Success,
    Error,
}

/// One toast banner; `id` lets the auto-dismiss timer ignore stale toasts
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub message: String,
    pub severity: ToastSeverity,
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Generation counter for list reads; a bump supersedes in-flight reads
    pub reload_trigger: ReadSignal<u32>,
    set_reload_trigger: WriteSignal<u32>,
    /// Item modal: open flag plus the item under edit (None = add mode)
    pub item_modal_open: ReadSignal<bool>,
    set_item_modal_open: WriteSignal<bool>,
    pub editing_item: ReadSignal<Option<ShoppingItem>>,
    set_editing_item: WriteSignal<Option<ShoppingItem>>,
    /// Id awaiting delete confirmation (None = modal closed)
    pub delete_target: ReadSignal<Option<String>>,
    set_delete_target: WriteSignal<Option<String>>,
    /// Current toast banner
    pub toast: ReadSignal<Option<Toast>>,
    set_toast: WriteSignal<Option<Toast>>,
    next_toast_id: RwSignal<u32>,
}

impl AppContext {
    pub fn new() -> Self {
        let (reload_trigger, set_reload_trigger) = signal(0u32);
        let (item_modal_open, set_item_modal_open) = signal(false);
        let (editing_item, set_editing_item) = signal(None);
        let (delete_target, set_delete_target) = signal(None);
        let (toast, set_toast) = signal(None);

        Self {
            reload_trigger,
            set_reload_trigger,
            item_modal_open,
            set_item_modal_open,
            editing_item,
            set_editing_item,
            delete_target,
            set_delete_target,
            toast,
            set_toast,
            next_toast_id: RwSignal::new(0),
        }
    }

    /// Trigger a reload of items
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    /// Open the item modal; `Some(item)` switches it to edit mode
    pub fn open_item_modal(&self, item: Option<ShoppingItem>) {
        self.set_editing_item.set(item);
        self.set_item_modal_open.set(true);
    }

    pub fn close_item_modal(&self) {
        self.set_item_modal_open.set(false);
        self.set_editing_item.set(None);
    }

    pub fn open_delete_modal(&self, id: String) {
        self.set_delete_target.set(Some(id));
    }

    pub fn close_delete_modal(&self) {
        self.set_delete_target.set(None);
    }

    pub fn toast_success(&self, message: &str) {
        self.show_toast(message, ToastSeverity::Success);
    }

    pub fn toast_error(&self, message: &str) {
        self.show_toast(message, ToastSeverity::Error);
    }

    fn show_toast(&self, message: &str, severity: ToastSeverity) {
        let id = self.next_toast_id.get_untracked() + 1;
        self.next_toast_id.set(id);
        self.set_toast.set(Some(Toast {
            id,
            message: message.to_string(),
            severity,
        }));
    }

    /// Clear the toast, but only if it is still the one the caller saw
    pub fn dismiss_toast(&self, id: u32) {
        self.set_toast.update(|toast| {
            if toast.as_ref().is_some_and(|t| t.id == id) {
                *toast = None;
            }
        });
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}
