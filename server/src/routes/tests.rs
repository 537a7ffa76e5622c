//! Handler Tests
//!
//! Exercises the /api surface end-to-end against an in-memory database.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use crate::repository::init_db;
use crate::state::AppState;

async fn test_app() -> Router {
    let conn = init_db(":memory:").await.expect("Failed to init test DB");
    crate::app(AppState::new(conn))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = match body {
        Some(json) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::String(
            String::from_utf8_lossy(&bytes).into_owned(),
        ))
    };
    (status, value)
}

async fn create(app: &Router, name: &str) -> Value {
    let (status, body) = send(
        app,
        Method::POST,
        "/api/items",
        Some(json!({ "itemName": name, "quantity": "1" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body
}

#[tokio::test]
async fn test_health() {
    let app = test_app().await;

    let (status, body) = send(&app, Method::GET, "/api/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_create_assigns_server_fields() {
    let app = test_app().await;

    let item = create(&app, "Milk").await;
    assert!(!item["id"].as_str().unwrap().is_empty());
    assert_eq!(item["itemName"], "Milk");
    assert_eq!(item["purchased"], false);
    assert!(item["createdAt"].is_string());
    assert!(item["updatedAt"].is_string());
}

#[tokio::test]
async fn test_create_rejects_missing_name() {
    let app = test_app().await;

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/items",
        Some(json!({ "quantity": "1" })),
    )
    .await;
    assert!(!status.is_success());
}

#[tokio::test]
async fn test_list_newest_first() {
    let app = test_app().await;

    let first = create(&app, "First").await;
    let second = create(&app, "Second").await;

    let (status, body) = send(&app, Method::GET, "/api/items", None).await;
    assert_eq!(status, StatusCode::OK);
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["id"], second["id"]);
    assert_eq!(items[1]["id"], first["id"]);
}

#[tokio::test]
async fn test_get_unknown_id_is_null() {
    let app = test_app().await;

    let (status, body) = send(&app, Method::GET, "/api/items/no-such-id", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_null());
}

#[tokio::test]
async fn test_partial_update() {
    let app = test_app().await;

    let item = create(&app, "Cheese").await;
    let id = item["id"].as_str().unwrap();

    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/api/items/{id}"),
        Some(json!({ "quantity": "7" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["quantity"], "7");
    assert_eq!(body["itemName"], "Cheese");
    assert_eq!(body["createdAt"], item["createdAt"]);
}

#[tokio::test]
async fn test_update_unknown_id_is_null() {
    let app = test_app().await;

    let (status, body) = send(
        &app,
        Method::PUT,
        "/api/items/no-such-id",
        Some(json!({ "itemName": "Ghost" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_null());
}

#[tokio::test]
async fn test_delete_removes_from_list() {
    let app = test_app().await;

    let item = create(&app, "Soap").await;
    let id = item["id"].as_str().unwrap();

    let (status, _) = send(&app, Method::DELETE, &format!("/api/items/{id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, body) = send(&app, Method::GET, "/api/items", None).await;
    assert!(body.as_array().unwrap().is_empty());

    // Idempotent
    let (status, _) = send(&app, Method::DELETE, &format!("/api/items/{id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_toggle_twice_round_trips() {
    let app = test_app().await;

    let item = create(&app, "Bread").await;
    let id = item["id"].as_str().unwrap();
    let uri = format!("/api/items/{id}/toggle-purchased");

    let (status, body) = send(&app, Method::PATCH, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["purchased"], true);

    let (status, body) = send(&app, Method::PATCH, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["purchased"], false);
}

#[tokio::test]
async fn test_toggle_unknown_id_is_404() {
    let app = test_app().await;

    let (status, _) = send(
        &app,
        Method::PATCH,
        "/api/items/no-such-id/toggle-purchased",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
