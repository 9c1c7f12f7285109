//! Browser File Access
//!
//! Picked files are read into memory before upload; previews use object URLs.

use rentit_core::service::PhotoUpload;
use wasm_bindgen_futures::JsFuture;

/// Read a picked file into an upload payload
pub async fn read_photo(file: &web_sys::File) -> Result<PhotoUpload, String> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("не удалось прочитать {}: {:?}", file.name(), e))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    let content_type = match file.type_() {
        t if t.is_empty() => "application/octet-stream".to_string(),
        t => t,
    };
    Ok(PhotoUpload {
        file_name: file.name(),
        content_type,
        bytes,
    })
}

/// Files selected in an `<input type="file">`
pub fn files_of(input: &web_sys::HtmlInputElement) -> Vec<web_sys::File> {
    let Some(list) = input.files() else {
        return Vec::new();
    };
    (0..list.length()).filter_map(|i| list.get(i)).collect()
}

/// `blob:` URL showing `file` in an `<img>`
pub fn preview_url(file: &web_sys::File) -> Option<String> {
    web_sys::Url::create_object_url_with_blob(file).ok()
}

pub fn revoke_preview(url: &str) {
    if let Err(e) = web_sys::Url::revoke_object_url(url) {
        log::debug!("revokeObjectURL({}) failed: {:?}", url, e);
    }
}
