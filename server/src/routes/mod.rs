//! HTTP Route Handlers
//!
//! Maps the /api surface onto the repository layer.

mod items;

#[cfg(test)]
mod tests;

pub use items::{
    create_item, delete_item, get_item, health_handler, hello_handler, list_items,
    toggle_purchased, update_item,
};
