//! Link Component
//!
//! Anchor that navigates through the History API instead of reloading.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::routes::Route;

/// In-app link. Modified clicks (new tab, etc.) keep the browser default.
#[component]
pub fn Link(
    to: Route,
    #[prop(optional, into)] class: String,
    /// Runs after navigating, e.g. to close a menu
    #[prop(optional)]
    on_navigate: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let ctx = use_app_context();
    let href = to.href();

    let on_click = move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 || ev.ctrl_key() || ev.meta_key() || ev.shift_key() || ev.alt_key() {
            return;
        }
        ev.prevent_default();
        ctx.navigate(to.clone());
        if let Some(cb) = on_navigate {
            cb.run(());
        }
    };

    view! {
        <a href=href class=class on:click=on_click>
            {children()}
        </a>
    }
}
