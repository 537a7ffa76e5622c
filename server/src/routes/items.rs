//! Item Collection Handlers
//!
//! Thin pass-through from HTTP to the repository. Non-2xx status is the only
//! error signal the client relies on.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use serde_json::json;
use tracing::info;

use crate::domain::{ItemChanges, NewItem, ShoppingItem};
use crate::error::AppError;
use crate::repository::Repository;
use crate::state::AppState;

pub async fn hello_handler() -> impl IntoResponse {
    (StatusCode::OK, "Shopping list backend is running")
}

pub async fn health_handler() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "message": "Backend is running",
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

/// List all items, newest first
pub async fn list_items(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ShoppingItem>>, AppError> {
    let items = state.items.list().await?;
    Ok(Json(items))
}

/// Get a single item; JSON null when the id is unknown
pub async fn get_item(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Option<ShoppingItem>>, AppError> {
    let item = state.items.find_by_id(&id).await?;
    Ok(Json(item))
}

/// Create an item with server-assigned id and timestamps
pub async fn create_item(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NewItem>,
) -> Result<(StatusCode, Json<ShoppingItem>), AppError> {
    let created = state.items.create(&ShoppingItem::from_new(payload)).await?;
    info!("created item {}", created.id);
    Ok((StatusCode::CREATED, Json(created)))
}

/// Partial update keyed by id.
///
/// The update is issued without checking the id first, so an unknown id
/// comes back as JSON null with 200 rather than an error. Callers that need
/// a not-found signal use the toggle endpoint semantics instead.
pub async fn update_item(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(changes): Json<ItemChanges>,
) -> Result<Json<Option<ShoppingItem>>, AppError> {
    let updated = state.items.update_fields(&id, &changes).await?;
    Ok(Json(updated))
}

/// Delete by id; idempotent, always 204
pub async fn delete_item(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    state.items.delete(&id).await?;
    info!("deleted item {}", id);
    Ok(StatusCode::NO_CONTENT)
}

/// Flip the purchased flag; 404 when the id is unknown
pub async fn toggle_purchased(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ShoppingItem>, AppError> {
    let mut item = state
        .items
        .find_by_id(&id)
        .await?
        .ok_or(AppError::NotFound)?;

    item.purchased = !item.purchased;

    let updated = state.items.update(&item).await?;
    Ok(Json(updated))
}
