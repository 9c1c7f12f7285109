//! Profile Page
//!
//! Contact details and avatar of the signed-in user, with tabs for their
//! listings and their rentals. Signed-out visitors are sent to /auth.

use leptos::prelude::*;
use leptos::task::spawn_local;
use rentit_core::domain::{AuthUser, Listing, Notice, ProfileRow};
use rentit_core::service::RentalSummary;
use wasm_bindgen::JsCast;

use crate::commands::{self, files_of};
use crate::components::{ItemCard, Link};
use crate::context::use_app_context;
use crate::models::ProfileTab;
use crate::routes::Route;
use crate::store::{store_invalidate_listings, store_notify, use_app_store, AppStateStoreFields};

#[component]
pub fn ProfilePage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let user = Memo::new(move |_| store.session().with(|s| s.as_ref().map(|s| s.user.clone())));

    Effect::new(move |_| {
        if user.with(Option::is_none) {
            ctx.navigate(Route::Auth);
        }
    });

    move || user.get().map(|user| view! { <ProfileView user=user /> })
}

#[component]
fn ProfileView(user: AuthUser) -> impl IntoView {
    let store = use_app_store();
    let user_id = StoredValue::new(user.id.clone());

    let profile = RwSignal::new(None::<ProfileRow>);
    let items = RwSignal::new(Vec::<Listing>::new());
    let rentals = RwSignal::new(None::<Vec<RentalSummary>>);
    let (tab, set_tab) = signal(ProfileTab::default());

    let (editing, set_editing) = signal(false);
    let (saving, set_saving) = signal(false);
    let (name, set_name) = signal(String::new());
    let (phone, set_phone) = signal(String::new());

    let fail = move |message: String| store_notify(&store, Notice::error("Ошибка", message));

    // Profile, then the user's listings shaped with it
    spawn_local(async move {
        let uid = user_id.get_value();
        let row = match commands::get_profile(&uid).await {
            Ok(row) => row,
            Err(e) => {
                fail(e);
                None
            }
        };
        if let Some(row) = &row {
            set_name.set(row.name.clone());
            set_phone.set(row.phone.clone().unwrap_or_default());
        }
        profile.set(row.clone());
        match commands::list_owner_items(&uid, row).await {
            Ok(list) => items.set(list),
            Err(e) => fail(e),
        }
    });

    // Rentals load on first visit to their tab
    Effect::new(move |_| {
        if tab.get() != ProfileTab::Rentals || rentals.with_untracked(Option::is_some) {
            return;
        }
        spawn_local(async move {
            match commands::list_my_rentals(&user_id.get_value()).await {
                Ok(list) => rentals.set(Some(list)),
                Err(e) => {
                    rentals.set(Some(Vec::new()));
                    fail(e);
                }
            }
        });
    });

    let save = move |_: web_sys::MouseEvent| {
        set_saving.set(true);
        let (new_name, new_phone) = (name.get_untracked(), phone.get_untracked());
        spawn_local(async move {
            match commands::save_contact(&user_id.get_value(), &new_name, &new_phone).await {
                Ok(update) => {
                    profile.update(|p| {
                        if let Some(p) = p {
                            update.apply_to(p);
                        }
                    });
                    set_editing.set(false);
                    // Cached listings carry the old owner name
                    store_invalidate_listings(&store);
                    store_notify(&store, Notice::info("Профиль обновлён"));
                }
                Err(e) => fail(e),
            }
            set_saving.set(false);
        });
    };

    let on_avatar = move |ev: web_sys::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            return;
        };
        let Some(file) = files_of(&input).into_iter().next() else {
            return;
        };
        input.set_value("");
        spawn_local(async move {
            match commands::upload_avatar(&user_id.get_value(), &file).await {
                Ok(url) => {
                    profile.update(|p| {
                        if let Some(p) = p {
                            p.avatar_url = Some(url);
                        }
                    });
                    store_invalidate_listings(&store);
                    store_notify(&store, Notice::info("Аватар обновлён"));
                }
                Err(e) => store_notify(&store, Notice::error("Ошибка загрузки", e)),
            }
        });
    };

    let avatar_url = move || profile.with(|p| p.as_ref().and_then(|p| p.avatar_url.clone()).filter(|u| !u.is_empty()));
    let display_name = move || {
        profile.with(|p| p.as_ref().map(|p| p.name.clone()).filter(|n| !n.trim().is_empty()))
            .unwrap_or_else(|| "Без имени".to_string())
    };
    let saved_phone = move || profile.with(|p| p.as_ref().and_then(|p| p.phone.clone()).filter(|p| !p.is_empty()));
    let email = user.email.clone().unwrap_or_default();

    let tab_class = move |t: ProfileTab| if tab.get() == t { "tab tab-active" } else { "tab" };

    view! {
        <div class="container narrow profile">
            <Link to=Route::Home class="btn btn-ghost btn-sm back-link">"← На главную"</Link>

            // Profile card
            <div class="card profile-card">
                <div class="profile-avatar">
                    <div class="avatar avatar-lg">
                        {move || match avatar_url() {
                            Some(src) => view! { <img src=src alt="Аватар" /> }.into_any(),
                            None => view! { <span class="avatar-fallback">"📷"</span> }.into_any(),
                        }}
                    </div>
                    <label class="avatar-upload" title="Сменить аватар">
                        "📷"
                        <input type="file" accept="image/*" class="hidden" on:change=on_avatar />
                    </label>
                </div>

                <div class="profile-body">
                    <Show
                        when=move || editing.get()
                        fallback=move || view! {
                            <h2>{display_name}</h2>
                            <p class="muted small">{email.clone()}</p>
                            {move || saved_phone().map(|p| view! { <p class="muted small">{p}</p> })}
                            <button class="btn btn-outline btn-sm" on:click=move |_| set_editing.set(true)>
                                "Редактировать"
                            </button>
                        }
                    >
                        <div class="field">
                            <label>"Имя"</label>
                            <input
                                prop:value=name
                                on:input=move |ev| set_name.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="field">
                            <label>"Телефон"</label>
                            <input
                                placeholder="+7 999 123 45 67"
                                prop:value=phone
                                on:input=move |ev| set_phone.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="button-row">
                            <button class="btn btn-primary btn-sm" disabled=move || saving.get() on:click=save>
                                {move || if saving.get() { "Сохранение..." } else { "Сохранить" }}
                            </button>
                            <button class="btn btn-outline btn-sm" on:click=move |_| set_editing.set(false)>
                                "Отмена"
                            </button>
                        </div>
                    </Show>
                </div>
            </div>

            // Tabs
            <div class="tabs">
                <button class=move || tab_class(ProfileTab::Items) on:click=move |_| set_tab.set(ProfileTab::Items)>
                    {move || format!("📦 Мои вещи ({})", items.with(Vec::len))}
                </button>
                <button class=move || tab_class(ProfileTab::Rentals) on:click=move |_| set_tab.set(ProfileTab::Rentals)>
                    "🛍 Мои аренды"
                </button>
            </div>

            {move || match tab.get() {
                ProfileTab::Items => view! { <MyItems items=items /> }.into_any(),
                ProfileTab::Rentals => view! { <MyRentals rentals=rentals /> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn MyItems(items: RwSignal<Vec<Listing>>) -> impl IntoView {
    move || {
        let list = items.get();
        if list.is_empty() {
            view! {
                <div class="card empty-state">
                    <p class="muted">"У вас пока нет объявлений"</p>
                    <Link to=Route::Create class="btn btn-primary">"Сдать вещь в аренду"</Link>
                </div>
            }.into_any()
        } else {
            view! {
                <div class="listing-grid two-columns">
                    {list.into_iter().map(|listing| view! { <ItemCard listing=listing /> }).collect_view()}
                </div>
            }.into_any()
        }
    }
}

#[component]
fn MyRentals(rentals: RwSignal<Option<Vec<RentalSummary>>>) -> impl IntoView {
    move || match rentals.get() {
        None => view! { <div class="loading muted">"Загрузка..."</div> }.into_any(),
        Some(list) if list.is_empty() => view! {
            <div class="card empty-state">
                <p class="muted">"У вас пока нет аренд"</p>
                <Link to=Route::catalog() class="btn btn-outline">"Перейти в каталог"</Link>
            </div>
        }.into_any(),
        Some(list) => view! {
            <ul class="rental-list">
                {list.into_iter().map(|rental| {
                    let title = rental.item_title.clone().unwrap_or_else(|| "Вещь удалена".to_string());
                    view! {
                        <li class="card rental-row">
                            <div>
                                <Link to=Route::Item(rental.item_id.clone()) class="rental-title">{title}</Link>
                                <div class="muted small">{rental.period.clone()}</div>
                            </div>
                            <div class="rental-side">
                                <span class="price">{rental.total.clone()}</span>
                                <span class="badge">{rental.status_label}</span>
                            </div>
                        </li>
                    }
                }).collect_view()}
            </ul>
        }.into_any(),
    }
}
