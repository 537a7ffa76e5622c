//! Backend API Bindings
//!
//! HTTP calls to the shopping-list server. Any non-ok status maps to a
//! generic `Err(String)` which the mutation layer turns into a rollback and
//! a toast.

mod items;

pub use items::{
    create_item, delete_item, fetch_items, toggle_purchased, update_item, API_URL,
};
