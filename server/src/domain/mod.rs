//! Domain Layer
//!
//! Contains the domain entities and core abstractions.
//! This layer has no HTTP or database dependencies.

mod entity;
mod item;

pub use entity::{DomainError, DomainResult, Entity};
pub use item::{ItemChanges, NewItem, ShoppingItem};
