//! Favorites Button Component
//!
//! Header heart that toggles favorites-only mode and shows the count.

use leptos::prelude::*;

use crate::context::use_filters;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn FavoritesButton() -> impl IntoView {
    let store = use_app_store();
    let filters = use_filters();

    let count = move || store.favorites().read().len();
    let active = move || filters.filters.with(|f| f.show_favorites);

    view! {
        <button
            class=move || if active() { "favorites-button active" } else { "favorites-button" }
            aria-label=move || if active() { "Show all characters" } else { "Show favorites" }
            on:click=move |_| filters.toggle_show_favorites()
        >
            <span class="heart">"♥"</span>
            <Show when=move || { count() > 0 }>
                <span class="favorites-count">{count}</span>
            </Show>
        </button>
    }
}
