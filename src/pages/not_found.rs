//! Not Found Page

use leptos::prelude::*;

use crate::components::Link;
use crate::routes::Route;

#[component]
pub fn NotFoundPage(path: String) -> impl IntoView {
    log::warn!("no route for {}", path);

    view! {
        <div class="container not-found">
            <h1>"404"</h1>
            <p class="muted">"Страница не найдена"</p>
            <Link to=Route::Home class="btn btn-primary">"На главную"</Link>
        </div>
    }
}
