//! Auth Flows
//!
//! Form submission against the auth provider, folded into the session to
//! keep and the notice to show.

use crate::domain::{AuthForm, AuthMode, Notice, Session};
use crate::repository::AuthProvider;

#[derive(Debug, Clone, PartialEq)]
pub struct AuthOutcome {
    /// Set when the user is now signed in
    pub session: Option<Session>,
    pub notice: Notice,
}

impl AuthOutcome {
    fn failed(notice: Notice) -> Self {
        Self { session: None, notice }
    }
}

/// Submit the form in its current mode
pub async fn submit<B: AuthProvider + ?Sized>(backend: &B, form: &AuthForm) -> AuthOutcome {
    if let Err(e) = form.validate() {
        return AuthOutcome::failed(e.notice());
    }
    match form.mode {
        AuthMode::SignIn => sign_in(backend, form).await,
        AuthMode::SignUp => sign_up(backend, form).await,
    }
}

async fn sign_in<B: AuthProvider + ?Sized>(backend: &B, form: &AuthForm) -> AuthOutcome {
    match backend.sign_in(form.email.trim(), &form.password).await {
        Ok(session) => AuthOutcome {
            session: Some(session),
            notice: Notice::info("Добро пожаловать!"),
        },
        Err(e) => {
            log::warn!("sign-in rejected: {}", e);
            AuthOutcome::failed(Notice::error("Ошибка входа", e.user_message()))
        }
    }
}

async fn sign_up<B: AuthProvider + ?Sized>(backend: &B, form: &AuthForm) -> AuthOutcome {
    match backend.sign_up(form.email.trim(), &form.password, form.name.trim()).await {
        Ok(Some(session)) => AuthOutcome {
            session: Some(session),
            notice: Notice::info("Добро пожаловать!"),
        },
        // Confirmation required: no session until the email link is followed
        Ok(None) => AuthOutcome {
            session: None,
            notice: Notice::info("Регистрация успешна!").with_description("Проверьте почту для подтверждения аккаунта."),
        },
        Err(e) => {
            log::warn!("sign-up rejected: {}", e);
            AuthOutcome::failed(Notice::error("Ошибка регистрации", e.user_message()))
        }
    }
}

/// Log out at the provider; the local session is dropped either way
pub async fn sign_out<B: AuthProvider + ?Sized>(backend: &B) {
    if let Err(e) = backend.sign_out().await {
        log::warn!("provider logout failed: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DomainError, DomainResult};
    use async_trait::async_trait;

    /// Provider that holds every new account until its email is confirmed
    struct ConfirmingProvider;

    #[async_trait(?Send)]
    impl AuthProvider for ConfirmingProvider {
        async fn sign_in(&self, _email: &str, _password: &str) -> DomainResult<Session> {
            Err(DomainError::backend(400, "Email not confirmed"))
        }

        async fn sign_up(&self, _email: &str, _password: &str, _name: &str) -> DomainResult<Option<Session>> {
            Ok(None)
        }

        async fn sign_out(&self) -> DomainResult<()> {
            Ok(())
        }

        fn set_session(&self, _session: Option<&Session>) {}
    }

    #[tokio::test]
    async fn test_sign_up_pending_confirmation() {
        let form = AuthForm {
            mode: AuthMode::SignUp,
            email: "new@example.com".to_string(),
            password: "secret1".to_string(),
            name: "Новый".to_string(),
        };

        let outcome = submit(&ConfirmingProvider, &form).await;

        assert!(outcome.session.is_none());
        assert_eq!(outcome.notice.title, "Регистрация успешна!");
        assert_eq!(
            outcome.notice.description.as_deref(),
            Some("Проверьте почту для подтверждения аккаунта.")
        );
    }
}
