//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::routes::{push_route, Route};

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current route - read
    pub route: ReadSignal<Route>,
    /// Current route - write
    set_route: WriteSignal<Route>,
}

impl AppContext {
    pub fn new(route: (ReadSignal<Route>, WriteSignal<Route>)) -> Self {
        Self {
            route: route.0,
            set_route: route.1,
        }
    }

    /// Go to `route`, adding a history entry
    pub fn navigate(&self, route: Route) {
        if self.route.get_untracked() == route {
            return;
        }
        log::debug!("navigate to {}", route.href());
        push_route(&route);
        self.set_route.set(route);
    }

    /// Follow a back/forward move that already changed the location
    pub fn sync_to(&self, route: Route) {
        self.set_route.set(route);
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
