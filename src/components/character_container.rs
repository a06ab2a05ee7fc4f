//! Character Container Component
//!
//! Chooses between the fetched page and the favorites list, keeps the page
//! number in range and explains empty results.

use catalog_core::{CatalogError, CharactersPage, PageCorrection};
use leptos::prelude::*;

use super::{CharacterGrid, LoadingSpinner, Pagination};
use crate::context::{use_filters, FiltersContext};
use crate::notifications::use_notifications;
use crate::query::CharactersResource;
use crate::store::{use_app_store, AppStateStoreFields};

/// Why the grid is empty, in order of precedence
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum EmptyReason {
    NoFavorites,
    LoadFailed,
    PageOutOfRange,
    NoMatches,
    NoResults,
}

impl EmptyReason {
    fn title(&self) -> &'static str {
        match self {
            EmptyReason::NoFavorites => "No favorite characters yet",
            EmptyReason::LoadFailed => "Could not load characters",
            EmptyReason::PageOutOfRange => "Page not found",
            EmptyReason::NoMatches => "No characters match these filters",
            EmptyReason::NoResults => "No characters found",
        }
    }

    fn hint(&self) -> &'static str {
        match self {
            EmptyReason::NoFavorites => "Open a character's details to add it to your favorites.",
            EmptyReason::LoadFailed => "The server could not be reached. Check your connection and try again.",
            EmptyReason::PageOutOfRange => "The page you asked for does not exist, so you were sent to the first page.",
            EmptyReason::NoMatches => "Try different filters or reset them.",
            EmptyReason::NoResults => "Change the filters to look for characters.",
        }
    }
}

#[component]
fn EmptyState(
    reason: EmptyReason,
    filters: FiltersContext,
    characters: CharactersResource,
) -> impl IntoView {
    view! {
        <div class="empty-state">
            <h2>{reason.title()}</h2>
            <p>{reason.hint()}</p>
            {(reason == EmptyReason::NoMatches).then(|| view! {
                <button class="empty-reset" on:click=move |_| filters.reset()>"Reset filters"</button>
            })}
            {(reason == EmptyReason::LoadFailed).then(|| view! {
                <button class="empty-reset" on:click=move |_| characters.refetch()>"Try again"</button>
            })}
        </div>
    }
}

/// Main result area
#[component]
pub fn CharacterContainer() -> impl IntoView {
    let filters = use_filters();
    let store = use_app_store();
    let notifications = use_notifications();
    let characters = expect_context::<CharactersResource>();

    let show_favorites = Memo::new(move |_| filters.filters.with(|f| f.show_favorites));

    let correction = RwSignal::new(PageCorrection::default());

    // Only a page count reported by the server can move the user; failed loads never do
    Effect::new(move |_| {
        let Some(pages) = characters.current().and_then(|loaded| loaded.reported_pages()) else {
            return;
        };
        if show_favorites.get() {
            return;
        }
        if filters.correct_page(pages) {
            notifications.warning("Requested page not found, showing page 1");
            let key = filters.filters.get_untracked().fetch_key();
            correction.update(|c| c.record(key));
        }
    });

    Effect::new(move |_| {
        let key = filters.filters.with(|f| f.fetch_key());
        let mut next = correction.get_untracked();
        if next.follow(&key) {
            correction.set(next);
        }
    });

    let page_out_of_range = Memo::new(move |_| {
        let key = filters.filters.with(|f| f.fetch_key());
        !show_favorites.get() && correction.with(|c| c.is_active(&key))
    });

    // Filters are active and the server had nothing for them
    let filter_error = Memo::new(move |_| {
        !show_favorites.get()
            && filters.filters.with(|f| f.has_filters())
            && characters
                .current()
                .is_some_and(|loaded| !loaded.failed && loaded.page.is_empty())
    });

    let display = Memo::new(move |_| -> Option<CharactersPage> {
        if show_favorites.get() {
            Some(CharactersPage::single(store.favorites().read().iter().cloned().collect()))
        } else {
            characters.data.with(|data| data.as_ref().map(|loaded| loaded.page.clone()))
        }
    });

    let empty_reason = Memo::new(move |_| -> Option<EmptyReason> {
        let page = display.get()?;
        if !page.is_empty() {
            return None;
        }
        Some(if show_favorites.get() {
            EmptyReason::NoFavorites
        } else if characters.has_failed() {
            EmptyReason::LoadFailed
        } else if page_out_of_range.get() {
            EmptyReason::PageOutOfRange
        } else if filter_error.get() {
            EmptyReason::NoMatches
        } else {
            EmptyReason::NoResults
        })
    });

    let results = Signal::derive(move || {
        display.with(|page| page.as_ref().map(|p| p.results.clone()).unwrap_or_default())
    });
    let total_pages = Signal::derive(move || {
        display.with(|page| page.as_ref().map_or(0, |p| p.info.pages))
    });
    let dimmed = Signal::derive(move || !show_favorites.get() && characters.is_placeholder());
    let is_loading = Memo::new(move |_| display.with(|page| page.is_none()));

    move || -> Result<AnyView, CatalogError> {
        if let Some(err) = characters.fault.get() {
            return Err(err);
        }
        if is_loading.get() {
            return Ok(view! { <LoadingSpinner /> }.into_any());
        }

        Ok(view! {
            <section class="character-section">
                <Show when=move || filters.page_reset_notice.get()>
                    <div class="banner banner-info">
                        <p>"Your filters changed, so you were sent back to the first page."</p>
                    </div>
                </Show>

                <Show when=move || page_out_of_range.get()>
                    <div class="banner banner-warning">
                        <p>"The requested page was not found. You were sent to the first page."</p>
                    </div>
                </Show>

                <Show when=move || filter_error.get()>
                    <div class="banner banner-error">
                        <p>"No characters match the selected filters."</p>
                        <button class="banner-reset" on:click=move |_| filters.reset()>"Reset filters"</button>
                    </div>
                </Show>

                <CharacterGrid characters=results dimmed=dimmed />

                <Show when={move || !show_favorites.get() && total_pages.get() > 0}>
                    <Pagination total_pages=total_pages />
                </Show>

                {move || empty_reason.get().map(|reason| view! { <EmptyState reason=reason filters=filters characters=characters /> })}
            </section>
        }
        .into_any())
    }
}
