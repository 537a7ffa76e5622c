//! Item API Calls
//!
//! reqwest runs on the browser fetch backend under wasm32.

use reqwest::Client;

use crate::models::{ItemFormData, ShoppingItem};

/// Backend origin; overridable at build time
pub const API_URL: &str = match option_env!("API_URL") {
    Some(url) => url,
    None => "http://localhost:3001",
};

fn client() -> Client {
    Client::new()
}

pub async fn fetch_items() -> Result<Vec<ShoppingItem>, String> {
    let response = client()
        .get(format!("{API_URL}/api/items"))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !response.status().is_success() {
        return Err("Failed to fetch shopping items".to_string());
    }
    response.json().await.map_err(|e| e.to_string())
}

pub async fn create_item(data: &ItemFormData) -> Result<ShoppingItem, String> {
    let response = client()
        .post(format!("{API_URL}/api/items"))
        .json(data)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !response.status().is_success() {
        return Err("Failed to create shopping item".to_string());
    }
    response.json().await.map_err(|e| e.to_string())
}

pub async fn update_item(id: &str, data: &ItemFormData) -> Result<ShoppingItem, String> {
    let response = client()
        .put(format!("{API_URL}/api/items/{id}"))
        .json(data)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !response.status().is_success() {
        return Err("Failed to update shopping item".to_string());
    }
    response.json().await.map_err(|e| e.to_string())
}

pub async fn delete_item(id: &str) -> Result<(), String> {
    let response = client()
        .delete(format!("{API_URL}/api/items/{id}"))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !response.status().is_success() {
        return Err("Failed to delete shopping item".to_string());
    }
    Ok(())
}

pub async fn toggle_purchased(id: &str) -> Result<ShoppingItem, String> {
    let response = client()
        .patch(format!("{API_URL}/api/items/{id}/toggle-purchased"))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !response.status().is_success() {
        return Err("Failed to toggle purchased status".to_string());
    }
    response.json().await.map_err(|e| e.to_string())
}
