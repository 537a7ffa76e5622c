//! Repository Layer
//!
//! Data access abstractions and implementations.

mod db;
mod item_repo;
mod traits;


pub use db::init_db;
pub use item_repo::ItemRepository;
pub use traits::Repository;
