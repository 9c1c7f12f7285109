//! Photo Picker Component
//!
//! Preview grid with remove buttons and an upload tile, capped at
//! `MAX_PHOTOS`.

use leptos::prelude::*;
use rentit_core::domain::{check_photo_limit, MAX_PHOTOS};
use wasm_bindgen::JsCast;

use crate::commands::{files_of, preview_url, revoke_preview};
use crate::models::PickedPhoto;
use crate::store::{store_notify, use_app_store};

#[component]
pub fn PhotoPicker(photos: RwSignal<Vec<PickedPhoto>, LocalStorage>) -> impl IntoView {
    let store = use_app_store();

    let on_change = move |ev: web_sys::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            return;
        };
        let files = files_of(&input);
        // allow picking the same file again
        input.set_value("");
        if files.is_empty() {
            return;
        }
        let existing = photos.with_untracked(Vec::len);
        if let Err(e) = check_photo_limit(existing, files.len()) {
            store_notify(&store, e.notice());
            return;
        }
        let picked: Vec<PickedPhoto> = files
            .into_iter()
            .filter_map(|file| preview_url(&file).map(|preview| PickedPhoto { file, preview }))
            .collect();
        photos.update(|list| list.extend(picked));
    };

    let remove = move |index: usize| {
        photos.update(|list| {
            if index < list.len() {
                let photo = list.remove(index);
                revoke_preview(&photo.preview);
            }
        });
    };

    view! {
        <div class="photo-grid">
            {move || photos.get().into_iter().enumerate().map(|(i, photo)| view! {
                <div class="photo-tile">
                    <img src=photo.preview alt="" />
                    <button type="button" class="photo-remove" on:click=move |_| remove(i)>"✕"</button>
                </div>
            }).collect_view()}
            <Show when=move || photos.with(|p| p.len() < MAX_PHOTOS)>
                <label class="photo-upload">
                    <span class="photo-upload-icon">"⬆"</span>
                    <span>"Загрузить"</span>
                    <input type="file" accept="image/*" multiple class="hidden" on:change=on_change />
                </label>
            </Show>
        </div>
    }
}
