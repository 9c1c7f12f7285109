//! Home Page
//!
//! Hero, category grid, how-it-works strip, popular listings and the
//! lister call to action.

use leptos::prelude::*;
use leptos::task::spawn_local;
use rentit_core::domain::CATEGORIES;

use crate::commands;
use crate::components::{ItemCard, Link};
use crate::routes::Route;
use crate::store::{use_app_store, AppStateStoreFields};

const STEPS: &[(&str, &str, &str)] = &[
    ("🔍", "Найди", "Выбери вещь в каталоге и забронируй даты"),
    ("💳", "Оплати", "Аренда + депозит. Деньги в безопасности"),
    ("📷", "Зафиксируй", "Фото при передаче — твоя гарантия"),
    ("↩", "Верни", "Вещь цела — депозит возвращается"),
];

#[component]
pub fn HomePage() -> impl IntoView {
    let store = use_app_store();

    let reload = move || {
        spawn_local(async move {
            let popular = commands::list_popular().await.unwrap_or_else(|e| {
                log::warn!("popular listings unavailable: {}", e);
                Vec::new()
            });
            store.popular().set(Some(popular));
        });
    };
    // Revalidate the cached block on every visit
    if store.popular().with_untracked(Option::is_some) {
        reload();
    }
    Effect::new(move |_| {
        if store.popular().with(Option::is_none) {
            reload();
        }
    });

    let popular = move || store.popular().get().unwrap_or_default();

    view! {
        <div class="home">
            // Hero
            <section class="hero">
                <div class="container hero-inner">
                    <h1>"Арендуй вещи "<span class="text-primary">"у соседей"</span></h1>
                    <p class="hero-subtitle">
                        "Зачем покупать дрель на один раз? Возьми у того, кто рядом. Безопасно, с депозитом и фотофиксацией."
                    </p>
                    <div class="hero-actions">
                        <Link to=Route::catalog() class="btn btn-primary btn-lg">"🔍 Найти вещь"</Link>
                        <Link to=Route::Create class="btn btn-outline btn-lg">"Сдать в аренду →"</Link>
                    </div>
                    <div class="hero-badges muted">
                        <span>"🛡 Депозит защищён"</span>
                        <span>"📷 Фотофиксация"</span>
                    </div>
                </div>
            </section>

            // Categories
            <section class="container section">
                <h2>"Категории"</h2>
                <div class="category-grid">
                    {CATEGORIES.iter().map(|cat| view! {
                        <Link to=Route::Catalog { category: Some(cat.id.to_string()) } class="category-tile">
                            <span class="category-icon">{cat.icon}</span>
                            <span class="category-name">{cat.name}</span>
                            <span class="muted small">{format!("{} вещей", cat.count)}</span>
                        </Link>
                    }).collect_view()}
                </div>
            </section>

            // How it works strip
            <section class="section muted-bg">
                <div class="container">
                    <h2 class="center">"Как это работает"</h2>
                    <div class="steps-grid">
                        {STEPS.iter().enumerate().map(|(i, (icon, title, text))| view! {
                            <div class="step">
                                <div class="step-icon">
                                    {*icon}
                                    <span class="step-number">{i + 1}</span>
                                </div>
                                <h3>{*title}</h3>
                                <p class="muted small">{*text}</p>
                            </div>
                        }).collect_view()}
                    </div>
                </div>
            </section>

            // Popular
            <Show when=move || store.popular().with(|p| p.as_ref().is_some_and(|p| !p.is_empty()))>
                <section class="container section">
                    <div class="section-header">
                        <h2>"Популярное"</h2>
                        <Link to=Route::catalog() class="btn btn-ghost btn-sm">"Все вещи →"</Link>
                    </div>
                    <div class="listing-grid">
                        <For
                            each=popular
                            key=|listing| listing.id.clone()
                            children=|listing| view! { <ItemCard listing=listing /> }
                        />
                    </div>
                </section>
            </Show>

            // Call to action
            <section class="container section">
                <div class="cta">
                    <h2>"У тебя есть вещи, которые пылятся?"</h2>
                    <p>"Начни зарабатывать прямо сейчас. Размести объявление за 2 минуты."</p>
                    <Link to=Route::Create class="btn btn-secondary btn-lg">"Сдать вещь в аренду →"</Link>
                </div>
            </section>
        </div>
    }
}
