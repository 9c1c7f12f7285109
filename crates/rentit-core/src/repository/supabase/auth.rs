//! Auth provider over the hosted auth service

use async_trait::async_trait;
use reqwest::Method;
use serde::Serialize;

use super::{error, SupabaseClient};
use crate::domain::{DomainResult, Session};
use crate::repository::AuthProvider;

#[derive(Serialize)]
struct PasswordArgs<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct SignUpMetadata<'a> {
    name: &'a str,
}

#[derive(Serialize)]
struct SignUpArgs<'a> {
    email: &'a str,
    password: &'a str,
    data: SignUpMetadata<'a>,
}

/// Sign-up answers with a full session when auto-confirm is on, otherwise
/// with the bare user object.
pub(super) fn session_from_sign_up(body: &[u8]) -> DomainResult<Option<Session>> {
    let value: serde_json::Value = serde_json::from_slice(body).map_err(error::map_decode_error)?;
    if value.get("access_token").map_or(true, serde_json::Value::is_null) {
        return Ok(None);
    }
    serde_json::from_value(value).map(Some).map_err(error::map_decode_error)
}

#[async_trait(?Send)]
impl AuthProvider for SupabaseClient {
    async fn sign_in(&self, email: &str, password: &str) -> DomainResult<Session> {
        let url = format!("{}?grant_type=password", self.config.auth_url("token"));
        let request = self
            .request(Method::POST, &url)
            .json(&PasswordArgs { email, password });
        let session: Session = self.send_json(request).await?;
        self.set_session(Some(&session));
        log::info!("signed in as {}", session.user.id);
        Ok(session)
    }

    async fn sign_up(&self, email: &str, password: &str, name: &str) -> DomainResult<Option<Session>> {
        let url = self.config.auth_url("signup");
        let request = self.request(Method::POST, &url).json(&SignUpArgs {
            email,
            password,
            data: SignUpMetadata { name },
        });
        let body = self.send(request).await?;
        let session = session_from_sign_up(&body)?;
        if let Some(session) = &session {
            self.set_session(Some(session));
        }
        Ok(session)
    }

    async fn sign_out(&self) -> DomainResult<()> {
        let url = self.config.auth_url("logout");
        let result = self.send(self.request(Method::POST, &url)).await;
        // the local session is dropped even when the provider call fails
        self.set_session(None);
        result.map(|_| ())
    }

    fn set_session(&self, session: Option<&Session>) {
        *self.access_token.borrow_mut() = session.map(|s| s.access_token.clone());
    }
}
