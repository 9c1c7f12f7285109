//! Client-side Routes
//!
//! Paths map onto a `Route` enum; navigation goes through the History API
//! and back/forward arrives as `popstate`.

use rentit_core::domain::ALL_CATEGORIES;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Catalog { category: Option<String> },
    Item(String),
    Create,
    Profile,
    Auth,
    HowItWorks,
    NotFound(String),
}

impl Route {
    /// Route for a location `pathname` and `search` (`?a=b`, may be empty)
    pub fn parse(path: &str, search: &str) -> Self {
        let trimmed = path.trim_end_matches('/');
        let segments: Vec<&str> = trimmed.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Route::Home,
            ["catalog"] => Route::Catalog {
                category: query_param(search, "category").filter(|c| !c.is_empty() && c != ALL_CATEGORIES),
            },
            ["item", id] => Route::Item(id.to_string()),
            ["create"] => Route::Create,
            ["profile"] => Route::Profile,
            ["auth"] => Route::Auth,
            ["how-it-works"] => Route::HowItWorks,
            _ => Route::NotFound(path.to_string()),
        }
    }

    pub fn href(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Catalog { category: None } => "/catalog".to_string(),
            Route::Catalog { category: Some(c) } => format!("/catalog?category={}", c),
            Route::Item(id) => format!("/item/{}", id),
            Route::Create => "/create".to_string(),
            Route::Profile => "/profile".to_string(),
            Route::Auth => "/auth".to_string(),
            Route::HowItWorks => "/how-it-works".to_string(),
            Route::NotFound(path) => path.clone(),
        }
    }

    pub fn catalog() -> Self {
        Route::Catalog { category: None }
    }
}

fn query_param(search: &str, key: &str) -> Option<String> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('=').or(Some((pair, ""))))
        .find(|(k, _)| *k == key)
        .map(|(_, v)| v.replace('+', " "))
}

// ========================
// Browser location
// ========================

/// Route of the current `window.location`
pub fn current_route() -> Route {
    let Some(location) = web_sys::window().map(|w| w.location()) else {
        return Route::Home;
    };
    let path = location.pathname().unwrap_or_else(|_| "/".to_string());
    let search = location.search().unwrap_or_default();
    Route::parse(&path, &search)
}

/// Push `route` onto the history stack and scroll to the top
pub fn push_route(route: &Route) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Ok(history) = window.history() {
        if let Err(e) = history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&route.href())) {
            log::warn!("pushState failed: {:?}", e);
        }
    }
    window.scroll_to_with_x_and_y(0.0, 0.0);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_paths() {
        assert_eq!(Route::parse("/", ""), Route::Home);
        assert_eq!(Route::parse("", ""), Route::Home);
        assert_eq!(Route::parse("/catalog", ""), Route::catalog());
        assert_eq!(Route::parse("/catalog/", "?category=tools"), Route::Catalog { category: Some("tools".into()) });
        assert_eq!(Route::parse("/item/42", ""), Route::Item("42".into()));
        assert_eq!(Route::parse("/create", ""), Route::Create);
        assert_eq!(Route::parse("/profile", ""), Route::Profile);
        assert_eq!(Route::parse("/auth", ""), Route::Auth);
        assert_eq!(Route::parse("/how-it-works", ""), Route::HowItWorks);
    }

    #[test]
    fn test_all_category_means_no_filter() {
        assert_eq!(Route::parse("/catalog", "?category=all"), Route::catalog());
        assert_eq!(Route::parse("/catalog", "?category="), Route::catalog());
        assert_eq!(Route::parse("/catalog", "?q=x&category=kids"), Route::Catalog { category: Some("kids".into()) });
    }

    #[test]
    fn test_unknown_paths_are_not_found() {
        assert_eq!(Route::parse("/item", ""), Route::NotFound("/item".into()));
        assert_eq!(Route::parse("/item/1/edit", ""), Route::NotFound("/item/1/edit".into()));
        assert_eq!(Route::parse("/nope", ""), Route::NotFound("/nope".into()));
    }

    #[test]
    fn test_href_parses_back() {
        let routes = [
            Route::Home,
            Route::catalog(),
            Route::Catalog { category: Some("events".into()) },
            Route::Item("abc-1".into()),
            Route::HowItWorks,
        ];
        for route in routes {
            let href = route.href();
            let (path, search) = href.split_once('?').map(|(p, q)| (p, format!("?{}", q))).unwrap_or((href.as_str(), String::new()));
            assert_eq!(Route::parse(path, &search), route);
        }
    }
}
