//! In-Memory Backend
//!
//! Implements every backend trait over plain vectors. Used when no hosted
//! project is configured (demo mode) and by the repository tests.
//!
//! Mirrors the hosted rules the client relies on: new accounts get a
//! profile row, only the signed-in owner may insert items or edit a profile,
//! and uploads need a session.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use async_trait::async_trait;
use base64::Engine;

use crate::domain::{
    AuthUser, DomainError, DomainResult, Entity, ItemRow, ItemStatus, ItemWithOwnerRow, NewItem, ProfileRow,
    ProfileUpdate, RentalRow, RentalStatus, Session, UserMetadata, PLACEHOLDER_IMAGE,
};
use super::traits::{AuthProvider, Bucket, ItemRepository, ObjectStorage, ProfileRepository, RentalRepository};

/// Demo account available in a seeded backend
pub const DEMO_EMAIL: &str = "demo@rentit.ru";
pub const DEMO_PASSWORD: &str = "demo123";

struct Account {
    email: String,
    password: String,
    user: AuthUser,
}

struct StoredObject {
    content_type: String,
    bytes: Vec<u8>,
}

#[derive(Default)]
struct MemoryState {
    /// Newest first
    items: Vec<ItemRow>,
    profiles: Vec<ProfileRow>,
    /// Newest first
    rentals: Vec<RentalRow>,
    accounts: Vec<Account>,
    objects: HashMap<String, StoredObject>,
    session: Option<Session>,
    next_id: u64,
}

impl MemoryState {
    fn next_id(&mut self, prefix: &str) -> String {
        self.next_id += 1;
        format!("{}-{}", prefix, self.next_id)
    }

    fn session_user(&self) -> DomainResult<&AuthUser> {
        self.session
            .as_ref()
            .map(|s| &s.user)
            .ok_or_else(|| DomainError::Unauthorized("no session".to_string()))
    }

    fn profile(&self, user_id: &str) -> Option<&ProfileRow> {
        self.profiles.iter().find(|p| p.user_id == user_id)
    }
}

pub struct MemoryBackend {
    state: RefCell<MemoryState>,
    fail_owner_join: Cell<bool>,
    fail_item_list: Cell<bool>,
    fail_profile_list: Cell<bool>,
}

impl Default for MemoryBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBackend {
    /// Empty backend
    pub fn new() -> Self {
        Self {
            state: RefCell::new(MemoryState::default()),
            fail_owner_join: Cell::new(false),
            fail_item_list: Cell::new(false),
            fail_profile_list: Cell::new(false),
        }
    }

    /// Backend holding the demo listings, their owners and the demo account
    pub fn seeded() -> Self {
        let backend = Self::new();
        {
            let mut state = backend.state.borrow_mut();
            seed(&mut state);
        }
        backend
    }

    /// Make the embedded owner select fail, like a store whose foreign key
    /// relation is missing
    pub fn set_fail_owner_join(&self, fail: bool) {
        self.fail_owner_join.set(fail);
    }

    /// Make the plain active-items read fail
    pub fn set_fail_item_list(&self, fail: bool) {
        self.fail_item_list.set(fail);
    }

    /// Make the `user_id in (...)` profile read fail
    pub fn set_fail_profile_list(&self, fail: bool) {
        self.fail_profile_list.set(fail);
    }

    /// Register an account directly, returning its user id
    pub fn add_account(&self, email: &str, password: &str, name: &str) -> String {
        let mut state = self.state.borrow_mut();
        create_account(&mut state, email, password, name).id
    }

    /// Put a rental row in front of the existing ones
    pub fn add_rental(&self, rental: RentalRow) {
        self.state.borrow_mut().rentals.insert(0, rental);
    }

    pub fn session(&self) -> Option<Session> {
        self.state.borrow().session.clone()
    }

    pub fn object_count(&self) -> usize {
        self.state.borrow().objects.len()
    }
}

fn now_rfc3339() -> String {
    chrono::Utc::now().to_rfc3339()
}

fn object_key(bucket: Bucket, path: &str) -> String {
    format!("{}/{}", bucket.as_str(), path)
}

/// Ids the store's key column would accept; anything else is rejected
/// the way a uuid column rejects malformed text
fn is_valid_id(id: &str) -> bool {
    !id.is_empty() && id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}

fn create_account(state: &mut MemoryState, email: &str, password: &str, name: &str) -> AuthUser {
    let user = AuthUser {
        id: state.next_id("user"),
        email: Some(email.to_string()),
        user_metadata: UserMetadata {
            name: Some(name.to_string()),
        },
    };
    // the hosted store creates the profile from the sign-up metadata
    let profile = ProfileRow {
        id: state.next_id("profile"),
        user_id: user.id.clone(),
        name: name.to_string(),
        phone: None,
        avatar_url: None,
        rating: Some(0.0),
        rentals_count: Some(0),
        created_at: Some(now_rfc3339()),
        updated_at: None,
    };
    state.profiles.push(profile);
    state.accounts.push(Account {
        email: email.to_string(),
        password: password.to_string(),
        user: user.clone(),
    });
    user
}

fn issue_session(state: &mut MemoryState, user: AuthUser) -> Session {
    let token = state.next_id("token");
    let session = Session {
        access_token: token,
        refresh_token: None,
        expires_at: Some(chrono::Utc::now().timestamp() + 3600),
        user,
    };
    state.session = Some(session.clone());
    session
}

#[async_trait(?Send)]
impl ItemRepository for MemoryBackend {
    async fn list_active_with_owner(&self, limit: Option<usize>) -> DomainResult<Vec<ItemWithOwnerRow>> {
        if self.fail_owner_join.get() {
            return Err(DomainError::backend(
                400,
                "Could not find a relationship between 'items' and 'profiles' in the schema cache",
            ));
        }
        let state = self.state.borrow();
        let rows = state
            .items
            .iter()
            .filter(|i| i.status == ItemStatus::Active)
            .take(limit.unwrap_or(usize::MAX))
            .map(|item| ItemWithOwnerRow {
                item: item.clone(),
                profiles: state.profile(&item.owner_id).map(ProfileRow::owner_fields),
            })
            .collect();
        Ok(rows)
    }

    async fn list_active(&self, limit: Option<usize>) -> DomainResult<Vec<ItemRow>> {
        if self.fail_item_list.get() {
            return Err(DomainError::Transport("connection reset".to_string()));
        }
        let state = self.state.borrow();
        Ok(state
            .items
            .iter()
            .filter(|i| i.status == ItemStatus::Active)
            .take(limit.unwrap_or(usize::MAX))
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<ItemRow>> {
        if !is_valid_id(id) {
            return Err(DomainError::backend(400, format!("invalid input syntax for type uuid: \"{}\"", id)));
        }
        let state = self.state.borrow();
        Ok(state.items.iter().find(|i| i.id() == id).cloned())
    }

    async fn list_by_ids(&self, ids: &[String]) -> DomainResult<Vec<ItemRow>> {
        let state = self.state.borrow();
        Ok(state.items.iter().filter(|i| ids.contains(i.id())).cloned().collect())
    }

    async fn list_by_owner(&self, owner_id: &str) -> DomainResult<Vec<ItemRow>> {
        let state = self.state.borrow();
        Ok(state.items.iter().filter(|i| i.owner_id == owner_id).cloned().collect())
    }

    async fn insert(&self, item: &NewItem) -> DomainResult<ItemRow> {
        let mut state = self.state.borrow_mut();
        if state.session_user()?.id != item.owner_id {
            return Err(DomainError::backend(403, "new row violates row-level security policy for table \"items\""));
        }
        let row = ItemRow {
            id: state.next_id("item"),
            owner_id: item.owner_id.clone(),
            title: item.title.clone(),
            category: item.category.clone(),
            description: Some(item.description.clone()),
            price_per_day: item.price_per_day,
            deposit: item.deposit,
            min_days: item.min_days,
            images: Some(item.images.clone()),
            location: item.location.clone(),
            conditions: item.conditions.clone(),
            status: ItemStatus::Active,
            rating: Some(0.0),
            reviews_count: Some(0),
            views_count: Some(0),
            created_at: Some(now_rfc3339()),
            updated_at: None,
        };
        state.items.insert(0, row.clone());
        Ok(row)
    }
}

#[async_trait(?Send)]
impl ProfileRepository for MemoryBackend {
    async fn find_by_user_id(&self, user_id: &str) -> DomainResult<Option<ProfileRow>> {
        Ok(self.state.borrow().profile(user_id).cloned())
    }

    async fn list_by_user_ids(&self, user_ids: &[String]) -> DomainResult<Vec<ProfileRow>> {
        if self.fail_profile_list.get() {
            return Err(DomainError::backend(500, "statement timeout"));
        }
        let state = self.state.borrow();
        Ok(state
            .profiles
            .iter()
            .filter(|p| user_ids.contains(&p.user_id))
            .cloned()
            .collect())
    }

    async fn update(&self, user_id: &str, update: &ProfileUpdate) -> DomainResult<()> {
        let mut state = self.state.borrow_mut();
        if state.session_user()?.id != user_id {
            return Err(DomainError::Unauthorized("profile belongs to another user".to_string()));
        }
        let profile = state
            .profiles
            .iter_mut()
            .find(|p| p.user_id == user_id)
            .ok_or_else(|| DomainError::NotFound(format!("profile of {}", user_id)))?;
        update.apply_to(profile);
        profile.updated_at = Some(now_rfc3339());
        Ok(())
    }
}

#[async_trait(?Send)]
impl RentalRepository for MemoryBackend {
    async fn list_by_renter(&self, renter_id: &str) -> DomainResult<Vec<RentalRow>> {
        let state = self.state.borrow();
        Ok(state.rentals.iter().filter(|r| r.renter_id == renter_id).cloned().collect())
    }
}

#[async_trait(?Send)]
impl AuthProvider for MemoryBackend {
    async fn sign_in(&self, email: &str, password: &str) -> DomainResult<Session> {
        let mut state = self.state.borrow_mut();
        let user = state
            .accounts
            .iter()
            .find(|a| a.email.eq_ignore_ascii_case(email.trim()) && a.password == password)
            .map(|a| a.user.clone())
            .ok_or_else(|| DomainError::backend(400, "Invalid login credentials"))?;
        Ok(issue_session(&mut state, user))
    }

    async fn sign_up(&self, email: &str, password: &str, name: &str) -> DomainResult<Option<Session>> {
        let mut state = self.state.borrow_mut();
        let email = email.trim();
        if state.accounts.iter().any(|a| a.email.eq_ignore_ascii_case(email)) {
            return Err(DomainError::backend(422, "User already registered"));
        }
        let user = create_account(&mut state, email, password, name);
        Ok(Some(issue_session(&mut state, user)))
    }

    async fn sign_out(&self) -> DomainResult<()> {
        self.state.borrow_mut().session = None;
        Ok(())
    }

    fn set_session(&self, session: Option<&Session>) {
        let mut state = self.state.borrow_mut();
        // a restored session is only honoured for a known account
        let known = session
            .filter(|s| state.accounts.iter().any(|a| a.user.id == s.user.id))
            .cloned();
        state.session = known;
    }
}

#[async_trait(?Send)]
impl ObjectStorage for MemoryBackend {
    async fn upload(&self, bucket: Bucket, path: &str, bytes: Vec<u8>, content_type: &str) -> DomainResult<()> {
        let mut state = self.state.borrow_mut();
        state.session_user()?;
        let key = object_key(bucket, path);
        if state.objects.contains_key(&key) {
            return Err(DomainError::backend(409, "The resource already exists"));
        }
        state.objects.insert(
            key,
            StoredObject {
                content_type: content_type.to_string(),
                bytes,
            },
        );
        Ok(())
    }

    fn public_url(&self, bucket: Bucket, path: &str) -> String {
        let state = self.state.borrow();
        match state.objects.get(&object_key(bucket, path)) {
            Some(object) => format!(
                "data:{};base64,{}",
                object.content_type,
                base64::engine::general_purpose::STANDARD.encode(&object.bytes)
            ),
            None => PLACEHOLDER_IMAGE.to_string(),
        }
    }
}

// ========================
// Demo data
// ========================

struct DemoItem {
    title: &'static str,
    category: &'static str,
    description: &'static str,
    price: i64,
    deposit: i64,
    min_days: i32,
    owner: &'static str,
    owner_rating: f64,
    owner_rentals: i64,
    location: &'static str,
    rating: f64,
    reviews: i64,
}

const DEMO_ITEMS: &[DemoItem] = &[
    DemoItem {
        title: "Перфоратор Bosch GBH 2-26",
        category: "tools",
        description: "Профессиональный перфоратор в отличном состоянии. Полный комплект свёрл в кейсе.",
        price: 500,
        deposit: 5000,
        min_days: 1,
        owner: "Алексей М.",
        owner_rating: 4.8,
        owner_rentals: 32,
        location: "Москва, м. Таганская",
        rating: 4.9,
        reviews: 18,
    },
    DemoItem {
        title: "Горный велосипед Trek X-Caliber",
        category: "sports",
        description: "Горный велосипед 29 дюймов. Размер рамы L. Гидравлические тормоза.",
        price: 1200,
        deposit: 15000,
        min_days: 1,
        owner: "Мария К.",
        owner_rating: 4.6,
        owner_rentals: 15,
        location: "Москва, м. Парк Культуры",
        rating: 4.7,
        reviews: 12,
    },
    DemoItem {
        title: "Детская коляска Bugaboo Fox 3",
        category: "kids",
        description: "Премиальная коляска, полный комплект. Чистая, ухоженная.",
        price: 800,
        deposit: 10000,
        min_days: 3,
        owner: "Елена В.",
        owner_rating: 5.0,
        owner_rentals: 8,
        location: "Москва, м. Бауманская",
        rating: 5.0,
        reviews: 6,
    },
    DemoItem {
        title: "Проектор Epson EH-TW750",
        category: "electronics",
        description: "Full HD проектор для домашнего кинотеатра. HDMI кабель в комплекте.",
        price: 1500,
        deposit: 12000,
        min_days: 1,
        owner: "Дмитрий Л.",
        owner_rating: 4.9,
        owner_rentals: 45,
        location: "Москва, м. Тверская",
        rating: 4.8,
        reviews: 28,
    },
    DemoItem {
        title: "Шуруповёрт Makita DDF484",
        category: "tools",
        description: "Аккумуляторный шуруповёрт 18V. Два аккумулятора + зарядка.",
        price: 400,
        deposit: 4000,
        min_days: 1,
        owner: "Игорь С.",
        owner_rating: 4.5,
        owner_rentals: 22,
        location: "Москва, м. Сокольники",
        rating: 4.6,
        reviews: 14,
    },
    DemoItem {
        title: "Палатка Outwell 4-местная",
        category: "sports",
        description: "Семейная палатка, быстрая сборка. Тент + колышки в комплекте.",
        price: 700,
        deposit: 6000,
        min_days: 2,
        owner: "Анна Р.",
        owner_rating: 4.7,
        owner_rentals: 11,
        location: "Москва, м. Речной вокзал",
        rating: 4.5,
        reviews: 9,
    },
];

fn seed(state: &mut MemoryState) {
    for (n, demo) in DEMO_ITEMS.iter().enumerate() {
        let owner_id = format!("owner-{}", n + 1);
        state.profiles.push(ProfileRow {
            id: format!("profile-owner-{}", n + 1),
            user_id: owner_id.clone(),
            name: demo.owner.to_string(),
            phone: None,
            avatar_url: None,
            rating: Some(demo.owner_rating),
            rentals_count: Some(demo.owner_rentals),
            created_at: None,
            updated_at: None,
        });
        state.items.push(ItemRow {
            id: (n + 1).to_string(),
            owner_id,
            title: demo.title.to_string(),
            category: demo.category.to_string(),
            description: Some(demo.description.to_string()),
            price_per_day: demo.price,
            deposit: demo.deposit,
            min_days: demo.min_days,
            images: Some(Vec::new()),
            location: Some(demo.location.to_string()),
            conditions: None,
            status: ItemStatus::Active,
            rating: Some(demo.rating),
            reviews_count: Some(demo.reviews),
            views_count: Some(0),
            // listed in order, the first one newest
            created_at: Some(format!("2024-06-{:02}T10:00:00+00:00", 30 - n)),
            updated_at: None,
        });
    }

    let demo_user = create_account(state, DEMO_EMAIL, DEMO_PASSWORD, "Гость");
    state.rentals.push(RentalRow {
        id: "rental-1".to_string(),
        item_id: "4".to_string(),
        owner_id: "owner-4".to_string(),
        renter_id: demo_user.id,
        start_date: "2024-07-12".to_string(),
        end_date: "2024-07-14".to_string(),
        total_price: 4500,
        deposit_amount: 12000,
        platform_fee: 675,
        status: RentalStatus::Completed,
        created_at: Some("2024-07-10T09:00:00+00:00".to_string()),
        updated_at: None,
    });
}
