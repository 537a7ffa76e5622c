//! UI Components
//!
//! Reusable Leptos components.

mod delete_confirm_modal;
mod empty_state;
mod item_card;
mod item_modal;
mod toast;

pub use delete_confirm_modal::DeleteConfirmModal;
pub use empty_state::EmptyState;
pub use item_card::ItemCard;
pub use item_modal::ItemModal;
pub use toast::ToastBanner;
