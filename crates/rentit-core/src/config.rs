//! Backend Configuration
//!
//! Project URL and public (anon) key of the hosted backend.

use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, DomainResult};

/// Popular-items block on the home page
pub const POPULAR_LIMIT: usize = 6;
/// Platform commission shown on the detail page, percent
pub const PLATFORM_FEE_PERCENT: u32 = 15;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendConfig {
    pub url: String,
    #[serde(alias = "anonKey")]
    pub anon_key: String,
}

impl BackendConfig {
    pub fn new(url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            anon_key: anon_key.into(),
        }
    }

    /// Trim both values, drop trailing slashes and check the URL scheme
    pub fn validated(&self) -> DomainResult<Self> {
        let url = self.url.trim().trim_end_matches('/').to_string();
        let anon_key = self.anon_key.trim().to_string();
        if !(url.starts_with("https://") || url.starts_with("http://")) {
            return Err(DomainError::InvalidInput(format!("backend url must be http(s): {:?}", self.url)));
        }
        if anon_key.is_empty() {
            return Err(DomainError::InvalidInput("backend anon key is empty".to_string()));
        }
        Ok(Self { url, anon_key })
    }

    pub fn rest_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.url, table)
    }

    pub fn auth_url(&self, endpoint: &str) -> String {
        format!("{}/auth/v1/{}", self.url, endpoint)
    }

    pub fn storage_url(&self, path: &str) -> String {
        format!("{}/storage/v1/{}", self.url, path)
    }
}
