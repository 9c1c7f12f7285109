//! Item Detail Page

use leptos::prelude::*;
use leptos::task::spawn_local;
use rentit_core::config::PLATFORM_FEE_PERCENT;
use rentit_core::domain::{find_category, format_rating, format_rub, Listing, Notice};

use crate::commands;
use crate::components::{Link, OwnerCard};
use crate::routes::Route;
use crate::store::{store_notify, use_app_store};

#[derive(Debug, Clone, PartialEq)]
enum Detail {
    Loading,
    Missing,
    Ready(Listing),
}

#[component]
pub fn ItemDetailPage(id: String) -> impl IntoView {
    let store = use_app_store();
    let (detail, set_detail) = signal(Detail::Loading);

    spawn_local(async move {
        let next = match commands::get_item(&id).await {
            Ok(Some(listing)) => Detail::Ready(listing),
            Ok(None) => Detail::Missing,
            Err(e) => {
                log::warn!("item {} failed to load: {}", id, e);
                store_notify(&store, Notice::error("Ошибка", e));
                Detail::Missing
            }
        };
        set_detail.set(next);
    });

    move || match detail.get() {
        Detail::Loading => view! {
            <div class="container loading muted">"Загрузка..."</div>
        }.into_any(),
        Detail::Missing => view! {
            <div class="container not-found">
                <h1>"Вещь не найдена"</h1>
                <Link to=Route::catalog() class="btn btn-primary">"Вернуться в каталог"</Link>
            </div>
        }.into_any(),
        Detail::Ready(listing) => view! { <ListingView listing=listing /> }.into_any(),
    }
}

#[component]
fn ListingView(listing: Listing) -> impl IntoView {
    let store = use_app_store();
    let (selected, set_selected) = signal(0usize);
    let images = if listing.images.is_empty() {
        vec![listing.cover_image().to_string()]
    } else {
        listing.images.clone()
    };
    let main_image = {
        let images = images.clone();
        move || images.get(selected.get()).cloned().unwrap_or_default()
    };

    let book = move |_: web_sys::MouseEvent| {
        store_notify(
            &store,
            Notice::info("Бронирование скоро появится").with_description("Пока договоритесь с владельцем напрямую."),
        );
    };

    view! {
        <div class="container detail">
            <Link to=Route::catalog() class="btn btn-ghost btn-sm back-link">"← Назад в каталог"</Link>

            <div class="detail-grid">
                // Gallery
                <div class="gallery">
                    <div class="gallery-main">
                        <img src=main_image alt=listing.title.clone() />
                    </div>
                    {(images.len() > 1).then(|| view! {
                        <div class="gallery-thumbs">
                            {images.iter().enumerate().map(|(i, src)| view! {
                                <button
                                    class=move || if selected.get() == i { "thumb thumb-active" } else { "thumb" }
                                    on:click=move |_| set_selected.set(i)
                                >
                                    <img src=src.clone() alt="" />
                                </button>
                            }).collect_view()}
                        </div>
                    })}
                </div>

                // Info
                <div class="detail-info">
                    <div class="detail-badges">
                        {find_category(&listing.category).map(|cat| {
                            let to = Route::Catalog { category: Some(cat.id.to_string()) };
                            view! {
                                <Link to=to class="badge">{format!("{} {}", cat.icon, cat.name)}</Link>
                            }
                        })}
                        <span class="badge">{listing.condition.clone()}</span>
                    </div>
                    <h1>{listing.title.clone()}</h1>
                    <div class="detail-meta muted">
                        {(listing.rating > 0.0).then(|| view! {
                            <span>
                                <span class="star">"★"</span>
                                {format!(" {} ({} отзывов)", format_rating(listing.rating), listing.reviews_count)}
                            </span>
                        })}
                        {(!listing.location.is_empty()).then(|| view! {
                            <span>{format!("📍 {}", listing.location)}</span>
                        })}
                    </div>

                    <p class="detail-description">{listing.description.clone()}</p>

                    {listing.conditions.clone().map(|conditions| view! {
                        <div class="detail-conditions">
                            <strong>"Условия: "</strong>{conditions}
                        </div>
                    })}

                    // Pricing
                    <div class="price-card">
                        <div class="price-row">
                            <div>
                                <span class="price-big">{format_rub(listing.price_per_day)}</span>
                                <span class="muted">" / сутки"</span>
                            </div>
                            <span class="muted small">{format!("мин. {} дн.", listing.min_days)}</span>
                        </div>
                        <div class="price-line">
                            <span class="muted">"🛡 Депозит"</span>
                            <span>{format_rub(listing.deposit)}</span>
                        </div>
                        <div class="price-line muted small">
                            <span>"Комиссия платформы"</span>
                            <span>{format!("{}%", PLATFORM_FEE_PERCENT)}</span>
                        </div>
                        <button class="btn btn-primary btn-lg btn-block" on:click=book>"📅 Забронировать"</button>
                    </div>

                    <OwnerCard owner=listing.owner.clone() />
                </div>
            </div>
        </div>
    }
}
