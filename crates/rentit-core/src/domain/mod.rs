//! Domain Layer
//!
//! Rows of the hosted schema, the view shapes built from them, and form
//! validation. Nothing here talks to the network.

mod entity;
mod item;
mod profile;
mod rental;
mod listing;
mod filter;
mod session;
mod notice;
mod draft;

pub use entity::{Entity, DomainError, DomainResult};
pub use item::{ItemRow, ItemStatus, ItemWithOwnerRow, NewItem, OwnerFields, Category, CATEGORIES, find_category};
pub use profile::{ProfileRow, ProfileUpdate};
pub use rental::{
    RentalRow, RentalStatus, RentalPhotoRow, PhotoType, DisputeRow, DisputeStatus, ReviewRow, MessageRow,
};
pub use listing::{
    Listing, OwnerSummary, shape_listing, format_rub, format_rating,
    PLACEHOLDER_IMAGE, DEFAULT_OWNER_NAME, DEFAULT_CONDITION,
};
pub use filter::{CatalogFilter, filter_by_category, filter_by_text, empty_catalog_message, ALL_CATEGORIES};
pub use session::{AuthUser, Session, UserMetadata};
pub use notice::{Notice, Tone};
pub use draft::{
    ListingDraft, AuthForm, AuthMode, DraftError, check_photo_limit, upload_path, MAX_PHOTOS, MIN_PASSWORD_LEN,
};
