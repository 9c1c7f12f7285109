//! Item Card Component
//!
//! Catalog tile linking to the detail page.

use leptos::prelude::*;
use rentit_core::domain::{format_rating, format_rub, Listing};

use crate::components::Link;
use crate::routes::Route;

#[component]
pub fn ItemCard(listing: Listing) -> impl IntoView {
    let cover = listing.cover_image().to_string();

    view! {
        <Link to=Route::Item(listing.id.clone()) class="item-card">
            <div class="item-card-image">
                <img src=cover alt=listing.title.clone() loading="lazy" />
                <span class="badge badge-floating">{listing.condition.clone()}</span>
            </div>
            <div class="item-card-body">
                <h3 class="line-clamp-1">{listing.title.clone()}</h3>
                <div class="item-card-location muted">
                    "📍 "<span class="line-clamp-1">{listing.location.clone()}</span>
                </div>
                <div class="item-card-row">
                    <div>
                        <span class="price">{format_rub(listing.price_per_day)}</span>
                        <span class="muted">" / сутки"</span>
                    </div>
                    <div class="rating">
                        <span class="star">"★"</span>
                        <span>{format_rating(listing.rating)}</span>
                        <span class="muted">{format!("({})", listing.reviews_count)}</span>
                    </div>
                </div>
                <div class="item-card-deposit muted">
                    {format!("Депозит: {}", format_rub(listing.deposit))}
                </div>
            </div>
        </Link>
    }
}
