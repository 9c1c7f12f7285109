//! Create Listing Page
//!
//! Listing form with photo picker. Publishing validates first, then uploads
//! the photos and inserts the row.

use leptos::prelude::*;
use leptos::task::spawn_local;
use rentit_core::domain::{ListingDraft, CATEGORIES};
use rentit_core::service::published_notice;

use crate::commands::{self, revoke_preview};
use crate::components::{Link, PhotoPicker};
use crate::context::use_app_context;
use crate::models::PickedPhoto;
use crate::routes::Route;
use crate::store::{store_invalidate_listings, store_notify, use_app_store, AppStateStoreFields};

#[component]
pub fn CreateListingPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let draft = RwSignal::new(ListingDraft::default());
    let photos = RwSignal::new_local(Vec::<PickedPhoto>::new());
    let (loading, set_loading) = signal(false);

    let signed_in = move || store.session().with(Option::is_some);

    on_cleanup(move || {
        photos.try_update(|list| list.drain(..).for_each(|p| revoke_preview(&p.preview)));
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }
        let form = draft.get_untracked();
        let session = store.session().get_untracked();
        let files: Vec<web_sys::File> = photos.with_untracked(|p| p.iter().map(|p| p.file.clone()).collect());
        set_loading.set(true);

        spawn_local(async move {
            match commands::publish_listing(&form, session.as_ref(), &files).await {
                Ok(item) => {
                    log::info!("listing {} published", item.id);
                    set_loading.set(false);
                    photos.update(|list| list.drain(..).for_each(|p| revoke_preview(&p.preview)));
                    store_notify(&store, published_notice());
                    store_invalidate_listings(&store);
                    ctx.navigate(Route::catalog());
                }
                Err(e) => {
                    log::warn!("publish failed: {}", e);
                    set_loading.set(false);
                    store_notify(&store, e.notice());
                    if e.needs_sign_in() {
                        ctx.navigate(Route::Auth);
                    }
                }
            }
        });
    };

    view! {
        <div class="container narrow create">
            <Link to=Route::Home class="btn btn-ghost btn-sm back-link">"← Назад"</Link>
            <h1>"Сдать вещь в аренду"</h1>

            <Show when=move || !signed_in()>
                <div class="banner">
                    <Link to=Route::Auth>"Войдите в аккаунт"</Link>
                    " чтобы создать объявление."
                </div>
            </Show>

            <form class="form" on:submit=on_submit>
                // Photos
                <div class="field">
                    <label>"Фотографии"</label>
                    <PhotoPicker photos=photos />
                </div>

                <div class="field">
                    <label for="title">"Название *"</label>
                    <input
                        id="title"
                        placeholder="Например: Перфоратор Bosch GBH 2-26"
                        prop:value=move || draft.with(|d| d.title.clone())
                        on:input=move |ev| draft.update(|d| d.title = event_target_value(&ev))
                    />
                </div>

                <div class="field">
                    <label for="category">"Категория *"</label>
                    <select
                        id="category"
                        prop:value=move || draft.with(|d| d.category.clone())
                        on:change=move |ev| draft.update(|d| d.category = event_target_value(&ev))
                    >
                        <option value="" disabled=true>"Выберите категорию"</option>
                        {CATEGORIES.iter().map(|cat| view! {
                            <option value=cat.id>{format!("{} {}", cat.icon, cat.name)}</option>
                        }).collect_view()}
                    </select>
                </div>

                <div class="field">
                    <label for="description">"Описание *"</label>
                    <textarea
                        id="description"
                        rows="4"
                        placeholder="Опишите вещь, её комплектацию и особенности"
                        prop:value=move || draft.with(|d| d.description.clone())
                        on:input=move |ev| draft.update(|d| d.description = event_target_value(&ev))
                    ></textarea>
                </div>

                <div class="field-row">
                    <div class="field">
                        <label for="price">"Цена за сутки (₽) *"</label>
                        <input
                            id="price"
                            type="number"
                            min="0"
                            placeholder="500"
                            prop:value=move || draft.with(|d| d.price.clone())
                            on:input=move |ev| draft.update(|d| d.price = event_target_value(&ev))
                        />
                    </div>
                    <div class="field">
                        <label for="deposit">"Депозит (₽) *"</label>
                        <input
                            id="deposit"
                            type="number"
                            min="0"
                            placeholder="5000"
                            prop:value=move || draft.with(|d| d.deposit.clone())
                            on:input=move |ev| draft.update(|d| d.deposit = event_target_value(&ev))
                        />
                    </div>
                    <div class="field">
                        <label for="min-days">"Мин. срок (дней)"</label>
                        <input
                            id="min-days"
                            type="number"
                            min="1"
                            placeholder="1"
                            prop:value=move || draft.with(|d| d.min_days.clone())
                            on:input=move |ev| draft.update(|d| d.min_days = event_target_value(&ev))
                        />
                    </div>
                </div>

                <div class="field">
                    <label for="location">"Местоположение"</label>
                    <input
                        id="location"
                        placeholder="Москва, м. Таганская"
                        prop:value=move || draft.with(|d| d.location.clone())
                        on:input=move |ev| draft.update(|d| d.location = event_target_value(&ev))
                    />
                </div>

                <div class="field">
                    <label for="conditions">"Условия аренды"</label>
                    <textarea
                        id="conditions"
                        rows="3"
                        placeholder="Опишите условия использования, если есть ограничения"
                        prop:value=move || draft.with(|d| d.conditions.clone())
                        on:input=move |ev| draft.update(|d| d.conditions = event_target_value(&ev))
                    ></textarea>
                </div>

                <label class="checkbox-card">
                    <input
                        type="checkbox"
                        prop:checked=move || draft.with(|d| d.confirmed)
                        on:change=move |ev| draft.update(|d| d.confirmed = event_target_checked(&ev))
                    />
                    <span class="small">
                        "Я подтверждаю, что вещь исправна и передаётся в указанном состоянии. Я ознакомлен с офертой платформы."
                    </span>
                </label>

                <button
                    type="submit"
                    class="btn btn-primary btn-lg btn-block"
                    disabled=move || loading.get() || !signed_in()
                >
                    {move || if loading.get() { "Публикация..." } else { "Опубликовать объявление" }}
                </button>
            </form>
        </div>
    }
}
