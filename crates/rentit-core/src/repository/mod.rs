//! Repository Layer
//!
//! Data access abstractions and implementations.

mod traits;
mod memory;
pub mod supabase;

#[cfg(test)]
mod tests;

pub use traits::{
    AuthProvider, Bucket, ItemRepository, MarketBackend, ObjectStorage, ProfileRepository, RentalRepository,
};
pub use memory::{MemoryBackend, DEMO_EMAIL, DEMO_PASSWORD};
pub use supabase::SupabaseClient;
