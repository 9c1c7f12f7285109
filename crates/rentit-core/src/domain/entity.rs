//! Domain Layer - Core Entity Trait
//!
//! Rows returned by the hosted store all carry a string primary key.
//! Errors from every backend call are folded into one `DomainError`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Core trait for all remote rows
pub trait Entity: Sized + Clone {
    /// The type of the row's unique identifier
    type Id: Clone + Eq + std::hash::Hash;

    /// Returns the row's unique identifier
    fn id(&self) -> &Self::Id;
}

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Error)]
pub enum DomainError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Not signed in: {0}")]
    Unauthorized(String),

    /// The service answered with a non-success status
    #[error("{message}")]
    Backend { status: u16, message: String },

    #[error("Network error: {0}")]
    Transport(String),

    #[error("Unexpected response: {0}")]
    Decode(String),
}

impl DomainError {
    pub fn backend(status: u16, message: impl Into<String>) -> Self {
        DomainError::Backend {
            status,
            message: message.into(),
        }
    }

    /// Message suitable for a toast description
    pub fn user_message(&self) -> String {
        match self {
            DomainError::Backend { message, .. } => message.clone(),
            DomainError::InvalidInput(msg) | DomainError::Unauthorized(msg) => msg.clone(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_error_shows_service_message() {
        let err = DomainError::backend(400, "Invalid login credentials");
        assert_eq!(err.to_string(), "Invalid login credentials");
        assert_eq!(err.user_message(), "Invalid login credentials");
    }

    #[test]
    fn test_transport_error_keeps_prefix() {
        let err = DomainError::Transport("connection refused".to_string());
        assert_eq!(err.user_message(), "Network error: connection refused");
    }
}
