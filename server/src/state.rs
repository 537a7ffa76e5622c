use std::sync::Arc;

use libsql::Connection;
use tokio::sync::Mutex;

use crate::repository::ItemRepository;

/// Application state shared across handlers
pub struct AppState {
    pub items: ItemRepository,
}

impl AppState {
    pub fn new(conn: Connection) -> Arc<Self> {
        Arc::new(Self {
            items: ItemRepository::new(Arc::new(Mutex::new(conn))),
        })
    }
}
