//! Startup Configuration
//!
//! Backend URL and anon key come from `window.RENTIT_CONFIG` (set by the
//! hosting page) or, failing that, from build-time environment variables.

use rentit_core::BackendConfig;
use wasm_bindgen::JsValue;

const GLOBAL_NAME: &str = "RENTIT_CONFIG";

/// Validated backend config, or `None` to run on demo data
pub fn load_backend_config() -> Option<BackendConfig> {
    let raw = from_window().or_else(from_build_env)?;
    match raw.validated() {
        Ok(config) => Some(config),
        Err(e) => {
            log::warn!("ignoring backend config: {}", e);
            None
        }
    }
}

fn from_window() -> Option<BackendConfig> {
    let window = web_sys::window()?;
    let value = js_sys::Reflect::get(&window, &JsValue::from_str(GLOBAL_NAME)).ok()?;
    if value.is_undefined() || value.is_null() {
        return None;
    }
    match serde_wasm_bindgen::from_value(value) {
        Ok(config) => Some(config),
        Err(e) => {
            log::warn!("window.{} is malformed: {}", GLOBAL_NAME, e);
            None
        }
    }
}

fn from_build_env() -> Option<BackendConfig> {
    let url = option_env!("RENTIT_SUPABASE_URL")?;
    let key = option_env!("RENTIT_SUPABASE_ANON_KEY")?;
    Some(BackendConfig::new(url, key))
}
