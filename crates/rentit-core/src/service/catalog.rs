//! Catalog Queries
//!
//! Active listings with their owners, the popular block, single-item detail
//! and an owner's own listings. Everything comes back already shaped.

use std::collections::{HashMap, HashSet};

use crate::config::POPULAR_LIMIT;
use crate::domain::{shape_listing, DomainError, DomainResult, ItemRow, Listing, OwnerFields, ProfileRow};
use crate::repository::{ItemRepository, ProfileRepository};

/// Active listings, newest first, with owner summaries.
///
/// Tries the embedded owner select first. When the store rejects it the
/// items are read on their own and owners are looked up in a second query.
/// If that also fails the catalog is simply empty.
pub async fn fetch_catalog<B>(backend: &B) -> Vec<Listing>
where
    B: ItemRepository + ProfileRepository + ?Sized,
{
    match backend.list_active_with_owner(None).await {
        Ok(rows) => rows
            .iter()
            .map(|row| shape_listing(&row.item, row.profiles.as_ref()))
            .collect(),
        Err(e) => {
            log::warn!("owner join failed, loading items and profiles separately: {}", e);
            match backend.list_active(None).await {
                Ok(items) => attach_owners(backend, &items).await,
                Err(e) => {
                    log::error!("catalog items query failed: {}", e);
                    Vec::new()
                }
            }
        }
    }
}

/// Latest active listings for the home page
pub async fn fetch_popular<B>(backend: &B) -> DomainResult<Vec<Listing>>
where
    B: ItemRepository + ProfileRepository + ?Sized,
{
    let items = backend.list_active(Some(POPULAR_LIMIT)).await?;
    Ok(attach_owners(backend, &items).await)
}

/// One listing by id, whatever its status.
///
/// An id the store rejects as malformed (400) reads as a missing item.
pub async fn fetch_item_detail<B>(backend: &B, id: &str) -> DomainResult<Option<Listing>>
where
    B: ItemRepository + ProfileRepository + ?Sized,
{
    let found = match backend.find_by_id(id).await {
        Err(DomainError::Backend { status: 400, message }) => {
            log::info!("item id {:?} rejected: {}", id, message);
            None
        }
        other => other?,
    };
    let Some(item) = found else {
        log::info!("item {} not found", id);
        return Ok(None);
    };
    let owner = match backend.find_by_user_id(&item.owner_id).await {
        Ok(profile) => profile.map(|p| p.owner_fields()),
        Err(e) => {
            log::warn!("owner profile of item {} unavailable: {}", id, e);
            None
        }
    };
    Ok(Some(shape_listing(&item, owner.as_ref())))
}

/// All listings of one owner, newest first, shown with the owner's profile
pub async fn fetch_owner_listings<B>(
    backend: &B,
    owner_id: &str,
    own_profile: Option<&ProfileRow>,
) -> DomainResult<Vec<Listing>>
where
    B: ItemRepository + ?Sized,
{
    let owner = own_profile.map(ProfileRow::owner_fields);
    let items = backend.list_by_owner(owner_id).await?;
    Ok(items.iter().map(|item| shape_listing(item, owner.as_ref())).collect())
}

/// Shape `items`, looking their owners up in one `user_id in (...)` query.
/// A failed lookup leaves every owner on the defaults.
async fn attach_owners<B>(backend: &B, items: &[ItemRow]) -> Vec<Listing>
where
    B: ProfileRepository + ?Sized,
{
    let owner_ids = distinct_owner_ids(items);
    let owners: HashMap<String, OwnerFields> = match backend.list_by_user_ids(&owner_ids).await {
        Ok(profiles) => profiles
            .into_iter()
            .map(|p| (p.user_id.clone(), p.owner_fields()))
            .collect(),
        Err(e) => {
            log::warn!("owner profiles unavailable: {}", e);
            HashMap::new()
        }
    };
    items
        .iter()
        .map(|item| shape_listing(item, owners.get(&item.owner_id)))
        .collect()
}

/// Owner ids in first-seen order, without repeats
fn distinct_owner_ids(items: &[ItemRow]) -> Vec<String> {
    let mut seen = HashSet::new();
    items
        .iter()
        .filter(|item| seen.insert(item.owner_id.as_str()))
        .map(|item| item.owner_id.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ItemStatus;

    fn row(id: &str, owner: &str) -> ItemRow {
        ItemRow {
            id: id.into(),
            owner_id: owner.into(),
            title: format!("item {}", id),
            category: "tools".into(),
            description: None,
            price_per_day: 100,
            deposit: 1000,
            min_days: 1,
            images: None,
            location: None,
            conditions: None,
            status: ItemStatus::Active,
            rating: None,
            reviews_count: None,
            views_count: None,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_distinct_owner_ids_keeps_first_seen_order() {
        let items = vec![row("1", "b"), row("2", "a"), row("3", "b")];
        assert_eq!(distinct_owner_ids(&items), vec!["b".to_string(), "a".to_string()]);
    }
}
