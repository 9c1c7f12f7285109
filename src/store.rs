//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use rentit_core::domain::{Listing, Notice, Session};

use crate::commands;
use crate::models::Toast;
use crate::session::save_session;

/// How long a toast stays up
const TOAST_MS: u32 = 5_000;
/// Toasts shown at once; older ones are dropped
const MAX_TOASTS: usize = 3;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Signed-in session, if any
    pub session: Option<Session>,
    /// Toasts on screen, oldest first
    pub toasts: Vec<Toast>,
    pub next_toast_id: u32,
    /// Cached catalog listings; `None` until loaded or after a publish
    pub catalog: Option<Vec<Listing>>,
    /// Cached home-page block
    pub popular: Option<Vec<Listing>>,
    /// Running on the in-memory backend
    pub demo_mode: bool,
}

impl AppState {
    pub fn new(session: Option<Session>, demo_mode: bool) -> Self {
        Self {
            session,
            demo_mode,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the session, persist it and hand the token to the backend
pub fn store_set_session(store: &AppStore, session: Option<Session>) {
    save_session(session.as_ref());
    commands::restore_session(session.as_ref());
    store.session().set(session);
}

/// Show `notice` as a toast that dismisses itself
pub fn store_notify(store: &AppStore, notice: Notice) {
    let id = store.next_toast_id().get_untracked();
    store.next_toast_id().set(id.wrapping_add(1));
    store.toasts().update(|toasts| push_toast(toasts, Toast { id, notice }));

    let store = *store;
    spawn_local(async move {
        TimeoutFuture::new(TOAST_MS).await;
        store_dismiss_toast(&store, id);
    });
}

/// Remove a toast from the store by ID
pub fn store_dismiss_toast(store: &AppStore, toast_id: u32) {
    store.toasts().update(|toasts| toasts.retain(|t| t.id != toast_id));
}

/// Append `toast`, dropping the oldest beyond `MAX_TOASTS`
fn push_toast(toasts: &mut Vec<Toast>, toast: Toast) {
    toasts.push(toast);
    let overflow = toasts.len().saturating_sub(MAX_TOASTS);
    toasts.drain(..overflow);
}

/// Drop cached listing queries so the next visit refetches
pub fn store_invalidate_listings(store: &AppStore) {
    store.catalog().set(None);
    store.popular().set(None);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toast(id: u32) -> Toast {
        Toast { id, notice: Notice::info(format!("toast {}", id)) }
    }

    #[test]
    fn test_push_toast_drops_oldest() {
        let mut toasts = Vec::new();
        for id in 0..4 {
            push_toast(&mut toasts, toast(id));
        }
        let ids: Vec<u32> = toasts.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_invalidate_listings_clears_both_caches() {
        Owner::new().with(|| {
            let store = Store::new(AppState::new(None, true));
            store.catalog().set(Some(Vec::new()));
            store.popular().set(Some(Vec::new()));
            store_invalidate_listings(&store);
            assert!(store.catalog().get_untracked().is_none());
            assert!(store.popular().get_untracked().is_none());
        });
    }

    #[test]
    fn test_push_toast_under_cap_keeps_all() {
        let mut toasts = vec![toast(7)];
        push_toast(&mut toasts, toast(8));
        assert_eq!(toasts.len(), 2);
        assert_eq!(toasts[0].id, 7);
    }
}
