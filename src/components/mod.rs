//! UI Components
//!
//! Reusable Leptos components.

mod link;
mod navbar;
mod footer;
mod item_card;
mod toaster;
mod demo_banner;
mod owner_card;
mod photo_picker;

pub use link::Link;
pub use navbar::Navbar;
pub use footer::Footer;
pub use item_card::ItemCard;
pub use toaster::Toaster;
pub use demo_banner::DemoBanner;
pub use owner_card::OwnerCard;
pub use photo_picker::PhotoPicker;
