//! Catalog Page
//!
//! Search box, category chips and the listing grid. The category comes
//! from the URL; the search text is local to the page.

use leptos::prelude::*;
use leptos::task::spawn_local;
use rentit_core::domain::{empty_catalog_message, CatalogFilter, CATEGORIES};

use crate::commands;
use crate::components::ItemCard;
use crate::context::use_app_context;
use crate::routes::Route;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn CatalogPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let (query, set_query) = signal(String::new());
    let (show_filters, set_show_filters) = signal(true);

    let category = Memo::new(move |_| match ctx.route.get() {
        Route::Catalog { category } => category,
        _ => None,
    });

    let reload = move || {
        spawn_local(async move {
            let listings = commands::list_catalog().await;
            log::debug!("catalog loaded: {} listings", listings.len());
            store.catalog().set(Some(listings));
        });
    };
    // Cached list shows at once and is refreshed in the background
    if store.catalog().with_untracked(Option::is_some) {
        reload();
    }
    // Load (or reload after invalidation)
    Effect::new(move |_| {
        if store.catalog().with(Option::is_none) {
            reload();
        }
    });

    let filtered = Memo::new(move |_| {
        let filter = CatalogFilter::new(category.get(), query.get());
        store.catalog().with(|all| all.as_ref().map(|all| filter.apply(all)))
    });
    let total = move || store.catalog().with(|all| all.as_ref().map_or(0, Vec::len));

    let select = move |id: Option<&'static str>| {
        ctx.navigate(Route::Catalog { category: id.map(str::to_string) });
    };
    let chip_class = move |id: Option<&'static str>| {
        if category.with(|c| c.as_deref() == id) { "chip chip-active" } else { "chip" }
    };

    view! {
        <div class="container catalog">
            <h1>"Каталог"</h1>

            <div class="catalog-search">
                <div class="search-input">
                    <span class="search-icon">"🔍"</span>
                    <input
                        type="search"
                        placeholder="Поиск вещей..."
                        prop:value=query
                        on:input=move |ev| set_query.set(event_target_value(&ev))
                    />
                </div>
                <button class="btn btn-outline" on:click=move |_| set_show_filters.update(|s| *s = !*s)>
                    "⚙ Фильтры"
                </button>
            </div>

            <Show when=move || show_filters.get()>
                <div class="chips">
                    <button class=move || chip_class(None) on:click=move |_| select(None)>"Все"</button>
                    {CATEGORIES.iter().map(|cat| {
                        let id = Some(cat.id);
                        view! {
                            <button class=move || chip_class(id) on:click=move |_| select(id)>
                                {format!("{} {}", cat.icon, cat.name)}
                            </button>
                        }
                    }).collect_view()}
                </div>
            </Show>

            {move || match filtered.get() {
                None => view! { <div class="loading muted">"Загрузка..."</div> }.into_any(),
                Some(list) if list.is_empty() => view! {
                    <div class="empty-state muted">{empty_catalog_message(total())}</div>
                }.into_any(),
                Some(list) => view! {
                    <div class="listing-grid">
                        {list.into_iter().map(|listing| view! { <ItemCard listing=listing /> }).collect_view()}
                    </div>
                }.into_any(),
            }}
        </div>
    }
}
