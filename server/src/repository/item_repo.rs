//! Item Repository - CRUD Operations
//!
//! SQLite-backed implementation for ShoppingItem CRUD operations.
//! Timestamps are stored as RFC 3339 text so lexicographic order matches
//! chronological order.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use libsql::Connection;
use tokio::sync::Mutex;

use super::traits::Repository;
use crate::domain::{DomainError, DomainResult, ItemChanges, ShoppingItem};

const ITEM_COLUMNS: &str =
    "id, item_name, description, quantity, purchased, created_at, updated_at";

/// SQLite implementation of the ShoppingItem repository
pub struct ItemRepository {
    conn: Arc<Mutex<Connection>>,
}

impl ItemRepository {
    pub fn new(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    /// Apply a partial update, then re-read the row.
    ///
    /// Mirrors the collection contract: the update itself does not verify the
    /// id exists, so an unknown id yields `Ok(None)` rather than an error.
    pub async fn update_fields(
        &self,
        id: &str,
        changes: &ItemChanges,
    ) -> DomainResult<Option<ShoppingItem>> {
        {
            let conn = self.conn.lock().await;
            let purchased = changes.purchased.map(|p| if p { 1 } else { 0 });
            conn.execute(
                "UPDATE shopping_items SET
                    item_name = COALESCE(?, item_name),
                    description = COALESCE(?, description),
                    quantity = COALESCE(?, quantity),
                    purchased = COALESCE(?, purchased),
                    updated_at = ?
                 WHERE id = ?",
                libsql::params![
                    changes.item_name.clone(),
                    changes.description.clone(),
                    changes.quantity.clone(),
                    purchased,
                    encode_time(Utc::now()),
                    id
                ],
            )
            .await
            .map_err(|e| DomainError::Internal(e.to_string()))?;
        }

        self.find_by_id(&id.to_string()).await
    }
}

#[async_trait]
impl Repository<ShoppingItem> for ItemRepository {
    async fn create(&self, entity: &ShoppingItem) -> DomainResult<ShoppingItem> {
        let conn = self.conn.lock().await;

        conn.execute(
            "INSERT INTO shopping_items (id, item_name, description, quantity, purchased, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
            libsql::params![
                entity.id.clone(),
                entity.item_name.clone(),
                entity.description.clone(),
                entity.quantity.clone(),
                if entity.purchased { 1 } else { 0 },
                encode_time(entity.created_at),
                encode_time(entity.updated_at)
            ],
        )
        .await
        .map_err(|e| DomainError::Internal(e.to_string()))?;

        Ok(entity.clone())
    }

    async fn find_by_id(&self, id: &String) -> DomainResult<Option<ShoppingItem>> {
        let conn = self.conn.lock().await;

        let mut rows = conn
            .query(
                &format!("SELECT {ITEM_COLUMNS} FROM shopping_items WHERE id = ?"),
                libsql::params![id.clone()],
            )
            .await
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        if let Ok(Some(row)) = rows.next().await {
            Ok(Some(row_to_item(&row)?))
        } else {
            Ok(None)
        }
    }

    async fn list(&self) -> DomainResult<Vec<ShoppingItem>> {
        let conn = self.conn.lock().await;

        let mut rows = conn
            .query(
                &format!(
                    "SELECT {ITEM_COLUMNS} FROM shopping_items ORDER BY created_at DESC"
                ),
                (),
            )
            .await
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        let mut items = Vec::new();
        while let Ok(Some(row)) = rows.next().await {
            items.push(row_to_item(&row)?);
        }
        Ok(items)
    }

    async fn update(&self, entity: &ShoppingItem) -> DomainResult<ShoppingItem> {
        let conn = self.conn.lock().await;

        let now = Utc::now().trunc_subsecs(6);
        conn.execute(
            "UPDATE shopping_items SET item_name = ?, description = ?, quantity = ?, purchased = ?, updated_at = ? WHERE id = ?",
            libsql::params![
                entity.item_name.clone(),
                entity.description.clone(),
                entity.quantity.clone(),
                if entity.purchased { 1 } else { 0 },
                encode_time(now),
                entity.id.clone()
            ],
        )
        .await
        .map_err(|e| DomainError::Internal(e.to_string()))?;

        Ok(ShoppingItem {
            updated_at: now,
            ..entity.clone()
        })
    }

    async fn delete(&self, id: &String) -> DomainResult<()> {
        let conn = self.conn.lock().await;

        conn.execute(
            "DELETE FROM shopping_items WHERE id = ?",
            libsql::params![id.clone()],
        )
        .await
        .map_err(|e| DomainError::Internal(e.to_string()))?;

        Ok(())
    }
}

/// RFC 3339 with microseconds, so equal-second rows still sort by creation
fn encode_time(t: DateTime<Utc>) -> String {
    t.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn decode_time(s: &str) -> DomainResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| DomainError::Internal(format!("bad timestamp {:?}: {}", s, e)))
}

/// Convert a database row to a ShoppingItem
fn row_to_item(row: &libsql::Row) -> DomainResult<ShoppingItem> {
    let created: String = row
        .get(5)
        .map_err(|e| DomainError::Internal(e.to_string()))?;
    let updated: String = row
        .get(6)
        .map_err(|e| DomainError::Internal(e.to_string()))?;

    Ok(ShoppingItem {
        id: row
            .get::<String>(0)
            .map_err(|e| DomainError::Internal(e.to_string()))?,
        item_name: row
            .get::<String>(1)
            .map_err(|e| DomainError::Internal(e.to_string()))?,
        description: row
            .get::<String>(2)
            .map_err(|e| DomainError::Internal(e.to_string()))?,
        quantity: row
            .get::<String>(3)
            .map_err(|e| DomainError::Internal(e.to_string()))?,
        purchased: row
            .get::<i32>(4)
            .map_err(|e| DomainError::Internal(e.to_string()))?
            != 0,
        created_at: decode_time(&created)?,
        updated_at: decode_time(&updated)?,
    })
}
