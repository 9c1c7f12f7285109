//! Auth Commands

use rentit_core::domain::{AuthForm, Session};
use rentit_core::service::{auth, AuthOutcome};

use super::backend;

pub async fn submit_auth(form: &AuthForm) -> AuthOutcome {
    let backend = backend();
    auth::submit(&*backend, form).await
}

pub async fn sign_out() {
    let backend = backend();
    auth::sign_out(&*backend).await;
}

/// Attach a restored session to later backend calls
pub fn restore_session(session: Option<&Session>) {
    backend().set_session(session);
}
