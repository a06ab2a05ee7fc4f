//! Character Explorer App
//!
//! Main application component: header, filters, results and overlays.

use catalog_core::CatalogConfig;
use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{
    CharacterContainer, CharacterDetailModal, CharacterFilters, ErrorFallback, FavoritesButton,
    ToastViewport,
};
use crate::context::FiltersContext;
use crate::notifications::Notifications;
use crate::query::use_characters;
use crate::store::{store_reset_favorites, AppState};

#[component]
pub fn App() -> impl IntoView {
    let config = CatalogConfig::default();
    tracing::debug!(api = %config.api_base_url, "[APP] configuration loaded");

    // Provide context to all children
    let notifications = Notifications::new(config.toast_duration_ms);
    provide_context(notifications);

    let store = Store::new(AppState::new());
    provide_context(store);

    // Resetting the filters also clears the favorites list
    let on_reset = Callback::new(move |_| store_reset_favorites(&store));
    let filters = FiltersContext::new(config.banner_duration_ms, on_reset);
    provide_context(filters);

    let key = Memo::new(move |_| filters.filters.with(|f| f.fetch_key()));
    let enabled = Signal::derive(move || filters.filters.with(|f| !f.show_favorites));
    let characters = use_characters(key, enabled, &config, notifications);
    provide_context(characters);

    view! {
        <main class="explorer">
            <header class="hero">
                <h1>"Rick and Morty Explorer"</h1>
                <p>"Browse the characters of the Rick and Morty universe, save your favorites and dig into the details."</p>
                <div class="hero-actions">
                    <FavoritesButton />
                </div>
            </header>

            <section class="filters-panel">
                <CharacterFilters />
            </section>

            <ErrorBoundary fallback=|errors| view! {
                <ErrorFallback messages=Signal::derive(move || {
                    errors.get().into_iter().map(|(_, e)| e.to_string()).collect::<Vec<_>>()
                }) />
            }>
                <CharacterContainer />
            </ErrorBoundary>

            <CharacterDetailModal />
            <ToastViewport />
        </main>
    }
}
