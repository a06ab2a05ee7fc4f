//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use catalog_core::{Character, Favorites};
use leptos::prelude::*;
use reactive_stores::Store;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Liked characters, in the order they were added
    pub favorites: Favorites,
    /// Character shown in the detail modal
    pub selected: Option<Character>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Whether a character is a favorite (tracked)
pub fn store_is_favorite(store: &AppStore, id: u32) -> bool {
    store.favorites().read().contains(id)
}

/// Add or remove a favorite. Returns whether it is now a favorite.
pub fn store_toggle_favorite(store: &AppStore, character: &Character) -> bool {
    store.favorites().write().toggle(character)
}

/// Empty the favorites list
pub fn store_reset_favorites(store: &AppStore) {
    store.favorites().write().reset();
}

/// Open the detail modal for a character
pub fn store_select(store: &AppStore, character: Character) {
    store.selected().set(Some(character));
}

/// Close the detail modal
pub fn store_clear_selection(store: &AppStore) {
    store.selected().set(None);
}
