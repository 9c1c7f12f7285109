//! Service Layer
//!
//! Flows composed from repository calls. Generic over the backend traits so
//! the same code runs against the hosted store and the in-memory one.

mod catalog;
mod listing;
mod profile;
pub mod auth;

pub use catalog::{fetch_catalog, fetch_item_detail, fetch_owner_listings, fetch_popular};
pub use listing::{publish_listing, published_notice, PhotoUpload, PublishError};
pub use profile::{fetch_my_rentals, load_profile, save_contact, upload_avatar, RentalSummary};
pub use auth::AuthOutcome;
