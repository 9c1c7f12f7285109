//! Catalog Commands

use rentit_core::domain::{Listing, ProfileRow};
use rentit_core::service;

use super::backend;

/// Active listings with owners; empty when the store is unreachable
pub async fn list_catalog() -> Vec<Listing> {
    let backend = backend();
    service::fetch_catalog(&*backend).await
}

pub async fn list_popular() -> Result<Vec<Listing>, String> {
    let backend = backend();
    service::fetch_popular(&*backend).await.map_err(|e| e.user_message())
}

pub async fn get_item(id: &str) -> Result<Option<Listing>, String> {
    let backend = backend();
    service::fetch_item_detail(&*backend, id).await.map_err(|e| e.user_message())
}

pub async fn list_owner_items(owner_id: &str, profile: Option<ProfileRow>) -> Result<Vec<Listing>, String> {
    let backend = backend();
    service::fetch_owner_listings(&*backend, owner_id, profile.as_ref())
        .await
        .map_err(|e| e.user_message())
}
