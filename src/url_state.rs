//! URL State
//!
//! Reads and writes the filters in `window.location` so views can be shared.

use catalog_core::Filters;
use wasm_bindgen::JsValue;

/// Filters encoded in the current location, or defaults
pub fn read_filters() -> Filters {
    web_sys::window()
        .and_then(|w| w.location().search().ok())
        .map(|search| Filters::from_query_string(&search))
        .unwrap_or_default()
}

/// Replace the current history entry with one that encodes `filters`
pub fn write_filters(filters: &Filters) {
    let Some(window) = web_sys::window() else { return };
    let location = window.location();

    let search = location.search().unwrap_or_default();
    let query = filters.to_query_string(&search);
    if search.strip_prefix('?').unwrap_or(&search) == query {
        return;
    }

    let pathname = location.pathname().unwrap_or_else(|_| "/".to_string());
    let hash = location.hash().unwrap_or_default();
    let url = format!("{}?{}{}", pathname, query, hash);

    let replaced = window
        .history()
        .and_then(|history| history.replace_state_with_url(&JsValue::NULL, "", Some(&url)));
    if let Err(e) = replaced {
        tracing::warn!(error = ?e, "[URL] failed to update location");
    }
}

/// Smoothly scroll the window back to the top
pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let options = web_sys::ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

/// Full navigation to the site root
pub fn go_home() {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().set_href("/") {
            tracing::warn!(error = ?e, "[URL] failed to navigate home");
        }
    }
}
