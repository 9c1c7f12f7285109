//! Demo Banner Component
//!
//! Shown while the app runs on the in-memory backend.

use leptos::prelude::*;
use rentit_core::repository::{DEMO_EMAIL, DEMO_PASSWORD};

use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn DemoBanner() -> impl IntoView {
    let store = use_app_store();

    view! {
        <Show when=move || store.demo_mode().get()>
            <div class="demo-banner">
                "Демо-режим: данные хранятся только в этой вкладке и пропадут после перезагрузки. Вход: "
                <code>{DEMO_EMAIL}</code>" / "<code>{DEMO_PASSWORD}</code>
            </div>
        </Show>
    }
}
