//! Frontend Models
//!
//! UI-only data structures. Rows and view shapes live in `rentit_core`.

use rentit_core::domain::Notice;

/// A notice on screen
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub notice: Notice,
}

/// A file picked for upload, with its preview URL
#[derive(Debug, Clone, PartialEq)]
pub struct PickedPhoto {
    pub file: web_sys::File,
    pub preview: String,
}

/// Profile page tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProfileTab {
    #[default]
    Items,
    Rentals,
}
