//! Backend Command Wrappers
//!
//! Frontend bindings to the data services, organized by domain. The backend
//! is chosen once at startup: the hosted project when configured, the
//! seeded in-memory store otherwise.

mod catalog;
mod listing;
mod profile;
mod auth;
mod files;

use std::cell::RefCell;
use std::rc::Rc;

use rentit_core::repository::{MarketBackend, MemoryBackend, SupabaseClient};
use rentit_core::BackendConfig;

thread_local! {
    static BACKEND: RefCell<Option<Rc<dyn MarketBackend>>> = const { RefCell::new(None) };
}

/// Which backend the commands talk to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendMode {
    Hosted,
    Demo,
}

/// Select the backend. Without a usable config the app runs on demo data.
pub fn install_backend(config: Option<BackendConfig>) -> BackendMode {
    let (backend, mode): (Rc<dyn MarketBackend>, BackendMode) = match config.map(|c| SupabaseClient::new(&c)) {
        Some(Ok(client)) => (Rc::new(client), BackendMode::Hosted),
        Some(Err(e)) => {
            log::error!("backend client unavailable, using demo data: {}", e);
            (Rc::new(MemoryBackend::seeded()), BackendMode::Demo)
        }
        None => {
            log::info!("no backend configured, using demo data");
            (Rc::new(MemoryBackend::seeded()), BackendMode::Demo)
        }
    };
    BACKEND.with(|slot| *slot.borrow_mut() = Some(backend));
    mode
}

fn backend() -> Rc<dyn MarketBackend> {
    BACKEND.with(|slot| {
        slot.borrow_mut()
            .get_or_insert_with(|| Rc::new(MemoryBackend::seeded()) as Rc<dyn MarketBackend>)
            .clone()
    })
}

fn now_millis() -> i64 {
    js_sys::Date::now() as i64
}

// Re-export all public items
pub use catalog::*;
pub use listing::*;
pub use profile::*;
pub use auth::*;
pub use files::*;
