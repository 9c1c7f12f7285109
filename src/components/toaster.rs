//! Toaster Component
//!
//! Renders the toast queue from the store.

use leptos::prelude::*;

use crate::store::{store_dismiss_toast, use_app_store, AppStateStoreFields};

#[component]
pub fn Toaster() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="toaster" aria-live="polite">
            <For
                each=move || store.toasts().get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let class = if toast.notice.is_error() { "toast toast-destructive" } else { "toast" };
                    view! {
                        <div class=class role="status">
                            <div class="toast-text">
                                <div class="toast-title">{toast.notice.title.clone()}</div>
                                {toast.notice.description.clone().map(|d| view! {
                                    <div class="toast-description">{d}</div>
                                })}
                            </div>
                            <button class="toast-close" on:click=move |_| store_dismiss_toast(&store, id)>"×"</button>
                        </div>
                    }
                }
            />
        </div>
    }
}
