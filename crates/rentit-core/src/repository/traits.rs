//! Repository Layer - Core Traits
//!
//! Abstract interfaces over the hosted backend: tables, auth and object
//! storage. Implementations: `SupabaseClient` (HTTP) and `MemoryBackend`.
//!
//! Futures are `?Send` because the browser runtime is single-threaded.

use async_trait::async_trait;

use crate::domain::{
    DomainResult, ItemRow, ItemWithOwnerRow, NewItem, ProfileRow, ProfileUpdate, RentalRow, Session,
};

/// Reads and writes against the `items` table
#[async_trait(?Send)]
pub trait ItemRepository {
    /// Active items, newest first, with the owner profile embedded through
    /// the `items_owner_id_fkey` relation. Fails when the relation is absent.
    async fn list_active_with_owner(&self, limit: Option<usize>) -> DomainResult<Vec<ItemWithOwnerRow>>;

    /// Active items, newest first
    async fn list_active(&self, limit: Option<usize>) -> DomainResult<Vec<ItemRow>>;

    /// Single item by id, any status
    async fn find_by_id(&self, id: &str) -> DomainResult<Option<ItemRow>>;

    /// Items with the given ids, in no particular order
    async fn list_by_ids(&self, ids: &[String]) -> DomainResult<Vec<ItemRow>>;

    /// All items of one owner, newest first
    async fn list_by_owner(&self, owner_id: &str) -> DomainResult<Vec<ItemRow>>;

    async fn insert(&self, item: &NewItem) -> DomainResult<ItemRow>;
}

/// Reads and writes against the `profiles` table
#[async_trait(?Send)]
pub trait ProfileRepository {
    async fn find_by_user_id(&self, user_id: &str) -> DomainResult<Option<ProfileRow>>;

    /// Profiles whose `user_id` is in `user_ids`
    async fn list_by_user_ids(&self, user_ids: &[String]) -> DomainResult<Vec<ProfileRow>>;

    async fn update(&self, user_id: &str, update: &ProfileUpdate) -> DomainResult<()>;
}

/// Reads against the `rentals` table
#[async_trait(?Send)]
pub trait RentalRepository {
    /// Rentals where the user is the renter, newest first
    async fn list_by_renter(&self, renter_id: &str) -> DomainResult<Vec<RentalRow>>;
}

/// Session calls against the auth provider
#[async_trait(?Send)]
pub trait AuthProvider {
    async fn sign_in(&self, email: &str, password: &str) -> DomainResult<Session>;

    /// Register with `name` in user metadata. Returns a session only when the
    /// provider confirms the account immediately.
    async fn sign_up(&self, email: &str, password: &str, name: &str) -> DomainResult<Option<Session>>;

    async fn sign_out(&self) -> DomainResult<()>;

    /// Attach (or drop) the access token used by later calls
    fn set_session(&self, session: Option<&Session>);
}

/// Storage buckets used by the client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bucket {
    ItemImages,
    Avatars,
}

impl Bucket {
    pub fn as_str(&self) -> &'static str {
        match self {
            Bucket::ItemImages => "item-images",
            Bucket::Avatars => "avatars",
        }
    }
}

/// Object uploads and public URLs
#[async_trait(?Send)]
pub trait ObjectStorage {
    async fn upload(&self, bucket: Bucket, path: &str, bytes: Vec<u8>, content_type: &str) -> DomainResult<()>;

    fn public_url(&self, bucket: Bucket, path: &str) -> String;
}

/// Everything the client needs from the hosted backend
pub trait MarketBackend: ItemRepository + ProfileRepository + RentalRepository + AuthProvider + ObjectStorage {}

impl<T> MarketBackend for T where T: ItemRepository + ProfileRepository + RentalRepository + AuthProvider + ObjectStorage {}
