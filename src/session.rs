//! Session Persistence
//!
//! The signed-in session survives reloads in `localStorage`.

use rentit_core::domain::Session;

const STORAGE_KEY: &str = "rentit.session";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

fn now_unix() -> i64 {
    (js_sys::Date::now() / 1000.0) as i64
}

/// Stored session, if any and not yet expired
pub fn load_saved_session() -> Option<Session> {
    let raw = local_storage()?.get_item(STORAGE_KEY).ok().flatten()?;
    let session = decode(&raw)?;
    if session.is_expired(now_unix()) {
        log::info!("stored session expired");
        save_session(None);
        return None;
    }
    Some(session)
}

pub fn save_session(session: Option<&Session>) {
    let Some(storage) = local_storage() else {
        return;
    };
    let result = match session.map(serde_json::to_string) {
        Some(Ok(json)) => storage.set_item(STORAGE_KEY, &json),
        Some(Err(e)) => {
            log::warn!("session not saved: {}", e);
            return;
        }
        None => storage.remove_item(STORAGE_KEY),
    };
    if let Err(e) = result {
        log::warn!("localStorage write failed: {:?}", e);
    }
}

fn decode(raw: &str) -> Option<Session> {
    serde_json::from_str(raw)
        .map_err(|e| log::warn!("dropping unreadable stored session: {}", e))
        .ok()
}
