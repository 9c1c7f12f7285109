//! Table repositories over PostgREST

use async_trait::async_trait;
use reqwest::Method;

use super::{expect_first, Query, SupabaseClient};
use crate::domain::{
    DomainResult, ItemRow, ItemStatus, ItemWithOwnerRow, NewItem, ProfileRow, ProfileUpdate, RentalRow,
};
use crate::repository::{ItemRepository, ProfileRepository, RentalRepository};

/// Embedded owner columns through the items→profiles foreign key
const OWNER_JOIN: &str = "*, profiles!items_owner_id_fkey(name, avatar_url, rating, rentals_count)";

fn active_items(columns: &str, limit: Option<usize>) -> Query {
    Query::table("items")
        .select(columns)
        .eq("status", ItemStatus::Active.as_str())
        .order_desc("created_at")
        .limit(limit)
}

#[async_trait(?Send)]
impl ItemRepository for SupabaseClient {
    async fn list_active_with_owner(&self, limit: Option<usize>) -> DomainResult<Vec<ItemWithOwnerRow>> {
        self.select(&active_items(OWNER_JOIN, limit)).await
    }

    async fn list_active(&self, limit: Option<usize>) -> DomainResult<Vec<ItemRow>> {
        self.select(&active_items("*", limit)).await
    }

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<ItemRow>> {
        self.select_first(Query::table("items").select("*").eq("id", id)).await
    }

    async fn list_by_ids(&self, ids: &[String]) -> DomainResult<Vec<ItemRow>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        self.select(&Query::table("items").select("*").in_list("id", ids)).await
    }

    async fn list_by_owner(&self, owner_id: &str) -> DomainResult<Vec<ItemRow>> {
        let query = Query::table("items")
            .select("*")
            .eq("owner_id", owner_id)
            .order_desc("created_at");
        self.select(&query).await
    }

    async fn insert(&self, item: &NewItem) -> DomainResult<ItemRow> {
        let url = Query::table("items").url(&self.config);
        let request = self
            .request(Method::POST, &url)
            .header("Prefer", "return=representation")
            .json(&[item]);
        let rows: Vec<ItemRow> = self.send_json(request).await?;
        let created = expect_first(rows, "items insert")?;
        log::info!("listing {} created by {}", created.id, created.owner_id);
        Ok(created)
    }
}

#[async_trait(?Send)]
impl ProfileRepository for SupabaseClient {
    async fn find_by_user_id(&self, user_id: &str) -> DomainResult<Option<ProfileRow>> {
        self.select_first(Query::table("profiles").select("*").eq("user_id", user_id)).await
    }

    async fn list_by_user_ids(&self, user_ids: &[String]) -> DomainResult<Vec<ProfileRow>> {
        if user_ids.is_empty() {
            return Ok(Vec::new());
        }
        self.select(&Query::table("profiles").select("*").in_list("user_id", user_ids)).await
    }

    async fn update(&self, user_id: &str, update: &ProfileUpdate) -> DomainResult<()> {
        let url = Query::table("profiles").eq("user_id", user_id).url(&self.config);
        let request = self
            .request(Method::PATCH, &url)
            .header("Prefer", "return=minimal")
            .json(update);
        self.send(request).await?;
        Ok(())
    }
}

#[async_trait(?Send)]
impl RentalRepository for SupabaseClient {
    async fn list_by_renter(&self, renter_id: &str) -> DomainResult<Vec<RentalRow>> {
        let query = Query::table("rentals")
            .select("*")
            .eq("renter_id", renter_id)
            .order_desc("created_at");
        self.select(&query).await
    }
}
