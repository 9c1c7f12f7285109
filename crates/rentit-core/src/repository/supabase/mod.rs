//! Supabase-compatible HTTP backend
//!
//! Talks to PostgREST (`/rest/v1`), the auth service (`/auth/v1`) and
//! object storage (`/storage/v1`) with reqwest. Every request carries the
//! project `apikey` and a bearer token: the session's access token when
//! signed in, the anon key otherwise.

mod auth;
mod error;
mod query;
mod storage;
mod tables;

use std::cell::RefCell;

use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::config::BackendConfig;
use crate::domain::{DomainError, DomainResult};

pub use error::map_status_error;
pub use query::Query;

const SINGLE_OBJECT: &str = "application/vnd.pgrst.object+json";

pub struct SupabaseClient {
    http: Client,
    config: BackendConfig,
    access_token: RefCell<Option<String>>,
}

impl SupabaseClient {
    /// Build a client for a validated configuration
    pub fn new(config: &BackendConfig) -> DomainResult<Self> {
        let config = config.validated()?;
        let http = Client::builder().build().map_err(error::map_transport_error)?;
        log::info!("backend client ready for {}", config.url);
        Ok(Self {
            http,
            config,
            access_token: RefCell::new(None),
        })
    }

    fn bearer(&self) -> String {
        self.access_token
            .borrow()
            .clone()
            .unwrap_or_else(|| self.config.anon_key.clone())
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        self.http
            .request(method, url)
            .header("apikey", self.config.anon_key.as_str())
            .header(reqwest::header::AUTHORIZATION, format!("Bearer {}", self.bearer()))
    }

    /// Send and return the raw body of a successful response
    async fn send(&self, builder: RequestBuilder) -> DomainResult<Vec<u8>> {
        let response = builder.send().await.map_err(error::map_transport_error)?;
        let status = response.status();
        let body = response.bytes().await.map_err(error::map_transport_error)?;
        if !status.is_success() {
            let err = error::map_status_error(status.as_u16(), body.as_ref());
            log::warn!("backend request failed: {}", err);
            return Err(err);
        }
        Ok(body.to_vec())
    }

    async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> DomainResult<T> {
        let body = self.send(builder).await?;
        serde_json::from_slice(&body).map_err(error::map_decode_error)
    }

    /// GET rows matching `query`
    async fn select<T: DeserializeOwned>(&self, query: &Query) -> DomainResult<Vec<T>> {
        log::debug!("select from {}: {}", query.name(), query.query_string());
        let url = query.url(&self.config);
        self.send_json(self.request(Method::GET, &url)).await
    }

    /// The single row matching `query`, if any. PostgREST answers 406 when
    /// the object representation finds no row.
    async fn select_first<T: DeserializeOwned>(&self, query: Query) -> DomainResult<Option<T>> {
        let url = query.url(&self.config);
        let request = self
            .request(Method::GET, &url)
            .header(reqwest::header::ACCEPT, SINGLE_OBJECT);
        match self.send_json(request).await {
            Ok(row) => Ok(Some(row)),
            Err(DomainError::Backend { status: 406, .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }
}

fn expect_first<T>(rows: Vec<T>, what: &str) -> DomainResult<T> {
    rows.into_iter()
        .next()
        .ok_or_else(|| DomainError::Decode(format!("empty response for {}", what)))
}
