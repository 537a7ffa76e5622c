//! Database Connection and Setup
//!
//! Manages the SQLite database connection and migrations.

use libsql::{Builder, Connection};

use crate::domain::{DomainError, DomainResult};

/// Open (or create) the local database and run migrations
pub async fn init_db(db_path: &str) -> DomainResult<Connection> {
    let db = Builder::new_local(db_path)
        .build()
        .await
        .map_err(|e| DomainError::Internal(format!("failed to build db: {}", e)))?;

    let conn = db
        .connect()
        .map_err(|e| DomainError::Internal(format!("failed to connect: {}", e)))?;

    run_migrations(&conn).await?;

    Ok(conn)
}

/// Run database migrations
async fn run_migrations(conn: &Connection) -> DomainResult<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS shopping_items (
            id TEXT PRIMARY KEY,
            item_name TEXT NOT NULL,
            description TEXT NOT NULL DEFAULT '',
            quantity TEXT NOT NULL,
            purchased INTEGER NOT NULL DEFAULT 0,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )",
        (),
    )
    .await
    .map_err(|e| DomainError::Internal(e.to_string()))?;

    // Listing is always ordered by creation time
    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_shopping_items_created ON shopping_items(created_at)",
        (),
    )
    .await
    .map_err(|e| DomainError::Internal(e.to_string()))?;

    Ok(())
}
