//! Owner Card Component

use leptos::prelude::*;
use rentit_core::domain::{format_rating, OwnerSummary};

#[component]
pub fn OwnerCard(owner: OwnerSummary) -> impl IntoView {
    let avatar = (!owner.avatar.is_empty()).then(|| owner.avatar.clone());

    view! {
        <div class="owner-card">
            <div class="avatar">
                {match avatar {
                    Some(src) => view! { <img src=src alt="" /> }.into_any(),
                    None => view! { <span class="avatar-fallback">"👤"</span> }.into_any(),
                }}
            </div>
            <div>
                <div class="owner-name">{owner.name.clone()}</div>
                <div class="owner-meta muted">
                    {(owner.rating > 0.0).then(|| view! {
                        <span><span class="star">"★"</span>" "{format_rating(owner.rating)}</span>
                    })}
                    <span>{format!("· {} аренд", owner.rentals_count)}</span>
                </div>
            </div>
        </div>
    }
}
