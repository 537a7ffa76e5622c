//! Shopping List Backend
//!
//! Layered architecture:
//! - domain: Core entities and business rules
//! - repository: Data access abstractions and implementations
//! - routes: axum HTTP handlers
//!
//! The server is a stateless pass-through from HTTP to a single SQLite table
//! of shopping items.

use std::sync::Arc;

use axum::{
    routing::{get, patch},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod config;
pub mod domain;
pub mod error;
pub mod repository;
pub mod routes;
pub mod state;

use state::AppState;

/// Build the application router
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api", get(routes::hello_handler))
        .route("/api/health", get(routes::health_handler))
        .route(
            "/api/items",
            get(routes::list_items).post(routes::create_item),
        )
        .route(
            "/api/items/{id}",
            get(routes::get_item)
                .put(routes::update_item)
                .delete(routes::delete_item),
        )
        .route(
            "/api/items/{id}/toggle-purchased",
            patch(routes::toggle_purchased),
        )
        .layer(TraceLayer::new_for_http())
        // Browser client runs on a different origin
        .layer(CorsLayer::permissive())
        .with_state(state)
}
