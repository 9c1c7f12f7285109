//! Navbar Component
//!
//! Sticky top bar with the main links, the account menu and a collapsible
//! mobile menu.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::components::Link;
use crate::context::use_app_context;
use crate::routes::Route;
use crate::store::{store_set_session, use_app_store, AppStateStoreFields};

#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let (mobile_open, set_mobile_open) = signal(false);
    let close_menu = Callback::new(move |_: ()| set_mobile_open.set(false));

    let user_name = move || store.session().with(|s| s.as_ref().map(|s| s.user.display_name()));

    let sign_out = move || {
        set_mobile_open.set(false);
        spawn_local(async move {
            commands::sign_out().await;
            store_set_session(&store, None);
            ctx.navigate(Route::Home);
        });
    };

    view! {
        <nav class="navbar">
            <div class="container navbar-inner">
                <Link to=Route::Home class="logo">
                    <span class="logo-mark">"R"</span>
                    <span class="logo-text">"RentIt"</span>
                </Link>

                // Desktop
                <div class="nav-links desktop-only">
                    <Link to=Route::catalog()>"Каталог"</Link>
                    <Link to=Route::HowItWorks>"Как это работает"</Link>
                </div>

                <div class="nav-actions desktop-only">
                    <Link to=Route::catalog() class="btn btn-ghost btn-sm">"🔍 Поиск"</Link>
                    <Link to=Route::Create class="btn btn-primary btn-sm">"+ Сдать вещь"</Link>
                    {move || match user_name() {
                        Some(name) => view! {
                            <div class="user-menu" tabindex="0">
                                <button class="btn btn-outline btn-sm">
                                    "👤 "<span class="truncate">{name}</span>
                                </button>
                                <div class="user-menu-content">
                                    <Link to=Route::Profile>"Профиль"</Link>
                                    <hr />
                                    <button on:click=move |_| sign_out()>"Выйти"</button>
                                </div>
                            </div>
                        }.into_any(),
                        None => view! {
                            <Link to=Route::Auth class="btn btn-outline btn-sm">"Войти"</Link>
                        }.into_any(),
                    }}
                </div>

                // Mobile toggle
                <button
                    class="mobile-toggle"
                    aria-label="Меню"
                    on:click=move |_| set_mobile_open.update(|open| *open = !*open)
                >
                    {move || if mobile_open.get() { "✕" } else { "☰" }}
                </button>
            </div>

            <Show when=move || mobile_open.get()>
                <div class="mobile-menu">
                    <Link to=Route::catalog() on_navigate=close_menu>"Каталог"</Link>
                    <Link to=Route::HowItWorks on_navigate=close_menu>"Как это работает"</Link>
                    <Link to=Route::Create class="btn btn-primary btn-sm" on_navigate=close_menu>"+ Сдать вещь"</Link>
                    {move || if user_name().is_some() {
                        view! {
                            <Link to=Route::Profile class="btn btn-outline btn-sm" on_navigate=close_menu>"Профиль"</Link>
                            <button class="btn btn-outline btn-sm" on:click=move |_| sign_out()>"Выйти"</button>
                        }.into_any()
                    } else {
                        view! {
                            <Link to=Route::Auth class="btn btn-outline btn-sm" on_navigate=close_menu>"Войти"</Link>
                        }.into_any()
                    }}
                </div>
            </Show>
        </nav>
    }
}
