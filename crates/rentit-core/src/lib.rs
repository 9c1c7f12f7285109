//! RentIt Core
//!
//! Layered architecture:
//! - domain: rows, view shapes, filters and form validation
//! - repository: backend traits with hosted (HTTP) and in-memory implementations
//! - service: catalog, listing, profile and auth flows over the repositories

pub mod config;
pub mod domain;
pub mod repository;
pub mod service;

pub use config::BackendConfig;
pub use domain::{DomainError, DomainResult};
