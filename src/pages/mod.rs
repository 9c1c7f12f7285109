//! Pages
//!
//! One component per route.

mod home;
mod catalog;
mod item_detail;
mod create_listing;
mod profile;
mod auth;
mod how_it_works;
mod not_found;

pub use home::HomePage;
pub use catalog::CatalogPage;
pub use item_detail::ItemDetailPage;
pub use create_listing::CreateListingPage;
pub use profile::ProfilePage;
pub use auth::AuthPage;
pub use how_it_works::HowItWorksPage;
pub use not_found::NotFoundPage;
