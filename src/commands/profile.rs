//! Profile Commands

use rentit_core::domain::{ProfileRow, ProfileUpdate};
use rentit_core::service::{self, RentalSummary};

use super::{backend, now_millis, read_photo};

pub async fn get_profile(user_id: &str) -> Result<Option<ProfileRow>, String> {
    let backend = backend();
    service::load_profile(&*backend, user_id).await.map_err(|e| e.user_message())
}

pub async fn save_contact(user_id: &str, name: &str, phone: &str) -> Result<ProfileUpdate, String> {
    let backend = backend();
    service::save_contact(&*backend, user_id, name, phone)
        .await
        .map_err(|e| e.user_message())
}

/// Upload `file` as the new avatar; returns its public URL
pub async fn upload_avatar(user_id: &str, file: &web_sys::File) -> Result<String, String> {
    let photo = read_photo(file).await?;
    let backend = backend();
    service::upload_avatar(&*backend, user_id, photo, now_millis())
        .await
        .map_err(|e| e.user_message())
}

pub async fn list_my_rentals(user_id: &str) -> Result<Vec<RentalSummary>, String> {
    let backend = backend();
    service::fetch_my_rentals(&*backend, user_id).await.map_err(|e| e.user_message())
}
