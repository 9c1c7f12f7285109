//! RentIt Frontend App
//!
//! Picks the backend, restores the saved session, provides the store and
//! route context, and renders the page for the current route.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::commands::{self, BackendMode};
use crate::components::{DemoBanner, Footer, Navbar, Toaster};
use crate::config::load_backend_config;
use crate::context::AppContext;
use crate::pages::{
    AuthPage, CatalogPage, CreateListingPage, HomePage, HowItWorksPage, ItemDetailPage, NotFoundPage, ProfilePage,
};
use crate::routes::{current_route, Route};
use crate::session::load_saved_session;
use crate::store::{store_set_session, AppState};

/// Which page component is mounted. The catalog category is not part of
/// it, so switching categories keeps the page (and its search text).
#[derive(Debug, Clone, PartialEq, Eq)]
enum Page {
    Home,
    Catalog,
    Item(String),
    Create,
    Profile,
    Auth,
    HowItWorks,
    NotFound(String),
}

impl From<&Route> for Page {
    fn from(route: &Route) -> Self {
        match route {
            Route::Home => Page::Home,
            Route::Catalog { .. } => Page::Catalog,
            Route::Item(id) => Page::Item(id.clone()),
            Route::Create => Page::Create,
            Route::Profile => Page::Profile,
            Route::Auth => Page::Auth,
            Route::HowItWorks => Page::HowItWorks,
            Route::NotFound(path) => Page::NotFound(path.clone()),
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    let mode = commands::install_backend(load_backend_config());
    let saved = load_saved_session();
    commands::restore_session(saved.as_ref());
    let demo_mode = mode == BackendMode::Demo;
    log::info!("starting in {:?} mode, signed in: {}", mode, saved.is_some());

    // Provide global store
    let store = Store::new(AppState::new(saved.clone(), demo_mode));
    provide_context(store);

    let ctx = AppContext::new(signal(current_route()));
    provide_context(ctx);

    // Back/forward buttons
    let _ = window_event_listener(leptos::ev::popstate, move |_| ctx.sync_to(current_route()));

    // Demo accounts only live as long as the tab; drop a session the
    // in-memory store has never seen
    if let (true, Some(session)) = (demo_mode, saved) {
        spawn_local(async move {
            if let Ok(None) = commands::get_profile(&session.user.id).await {
                log::info!("saved session unknown to demo store, signing out");
                store_set_session(&store, None);
            }
        });
    }

    let page = Memo::new(move |_| Page::from(&ctx.route.get()));

    view! {
        <div class="app">
            <Navbar />
            <DemoBanner />
            <main class="page">
                {move || match page.get() {
                    Page::Home => view! { <HomePage /> }.into_any(),
                    Page::Catalog => view! { <CatalogPage /> }.into_any(),
                    Page::Item(id) => view! { <ItemDetailPage id=id /> }.into_any(),
                    Page::Create => view! { <CreateListingPage /> }.into_any(),
                    Page::Profile => view! { <ProfilePage /> }.into_any(),
                    Page::Auth => view! { <AuthPage /> }.into_any(),
                    Page::HowItWorks => view! { <HowItWorksPage /> }.into_any(),
                    Page::NotFound(path) => view! { <NotFoundPage path=path /> }.into_any(),
                }}
            </main>
            <Footer />
            <Toaster />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_change_keeps_page() {
        let all = Page::from(&Route::catalog());
        let tools = Page::from(&Route::Catalog { category: Some("tools".into()) });
        assert_eq!(all, tools);
    }

    #[test]
    fn test_item_pages_differ_by_id() {
        assert_ne!(Page::from(&Route::Item("1".into())), Page::from(&Route::Item("2".into())));
    }
}
