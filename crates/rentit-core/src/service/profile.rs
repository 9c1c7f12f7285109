//! Profile Flows
//!
//! Own profile row, contact edits, avatar upload and the renter's bookings.

use std::collections::HashMap;

use crate::domain::{format_rub, upload_path, DomainResult, ProfileRow, ProfileUpdate, RentalRow};
use crate::repository::{Bucket, ItemRepository, ObjectStorage, ProfileRepository, RentalRepository};
use super::listing::PhotoUpload;

pub async fn load_profile<B>(backend: &B, user_id: &str) -> DomainResult<Option<ProfileRow>>
where
    B: ProfileRepository + ?Sized,
{
    backend.find_by_user_id(user_id).await
}

/// Save name and phone; returns the applied update
pub async fn save_contact<B>(backend: &B, user_id: &str, name: &str, phone: &str) -> DomainResult<ProfileUpdate>
where
    B: ProfileRepository + ?Sized,
{
    let update = ProfileUpdate::contact(name, phone);
    backend.update(user_id, &update).await?;
    log::info!("profile of {} updated", user_id);
    Ok(update)
}

/// Upload a new avatar and point the profile at it; returns the public URL
pub async fn upload_avatar<B>(backend: &B, user_id: &str, photo: PhotoUpload, now_millis: i64) -> DomainResult<String>
where
    B: ProfileRepository + ObjectStorage + ?Sized,
{
    let path = upload_path(user_id, now_millis, &photo.file_name);
    backend
        .upload(Bucket::Avatars, &path, photo.bytes, &photo.content_type)
        .await?;
    let url = backend.public_url(Bucket::Avatars, &path);
    backend.update(user_id, &ProfileUpdate::avatar(url.clone())).await?;
    Ok(url)
}

/// One line of the "My rentals" tab
#[derive(Debug, Clone, PartialEq)]
pub struct RentalSummary {
    pub id: String,
    pub item_id: String,
    /// `None` when the item is gone
    pub item_title: Option<String>,
    /// Date range with the day count when the dates parse
    pub period: String,
    pub total: String,
    pub status_label: &'static str,
}

impl RentalSummary {
    fn new(rental: &RentalRow, item_title: Option<String>) -> Self {
        Self {
            id: rental.id.clone(),
            item_id: rental.item_id.clone(),
            item_title,
            period: match rental.days() {
                Some(days) => format!("{} · {} дн.", rental.period_label(), days),
                None => rental.period_label(),
            },
            total: format_rub(rental.total_price),
            status_label: rental.status.label(),
        }
    }
}

/// Bookings where the user is the renter, newest first, with item titles
pub async fn fetch_my_rentals<B>(backend: &B, user_id: &str) -> DomainResult<Vec<RentalSummary>>
where
    B: RentalRepository + ItemRepository + ?Sized,
{
    let rentals = backend.list_by_renter(user_id).await?;
    if rentals.is_empty() {
        return Ok(Vec::new());
    }
    let mut item_ids: Vec<String> = rentals.iter().map(|r| r.item_id.clone()).collect();
    item_ids.sort();
    item_ids.dedup();
    let titles: HashMap<String, String> = match backend.list_by_ids(&item_ids).await {
        Ok(items) => items.into_iter().map(|i| (i.id, i.title)).collect(),
        Err(e) => {
            log::warn!("rental items unavailable: {}", e);
            HashMap::new()
        }
    };
    Ok(rentals
        .iter()
        .map(|r| RentalSummary::new(r, titles.get(&r.item_id).cloned()))
        .collect())
}
