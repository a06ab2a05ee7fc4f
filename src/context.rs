//! Filter Context
//!
//! URL-synced filter state provided via Leptos Context API.

use catalog_core::{Filters, Gender, Status};
use gloo_timers::callback::Timeout;
use leptos::ev;
use leptos::prelude::*;

use crate::url_state;

/// App-wide filter signals provided via context
#[derive(Clone, Copy)]
pub struct FiltersContext {
    /// Current filters - read
    pub filters: ReadSignal<Filters>,
    /// Current filters - write
    set_filters: WriteSignal<Filters>,
    /// Shown briefly after a filter change moved the user back to page 1 - read
    pub page_reset_notice: ReadSignal<bool>,
    /// Shown briefly after a filter change moved the user back to page 1 - write
    set_page_reset_notice: WriteSignal<bool>,
    /// Bumped each time the notice is raised so older timers leave it alone
    notice_generation: StoredValue<u32>,
    banner_duration_ms: u32,
    /// Extra work done on reset (clearing favorites)
    on_reset: Callback<()>,
}

impl FiltersContext {
    /// Build from the current URL and keep the URL in sync from here on
    pub fn new(banner_duration_ms: u32, on_reset: Callback<()>) -> Self {
        let (filters, set_filters) = signal(url_state::read_filters());
        let (page_reset_notice, set_page_reset_notice) = signal(false);

        // Mirror every change into the location (also normalizes a bad initial URL)
        Effect::new(move |_| {
            let current = filters.get();
            url_state::write_filters(&current);
        });

        // Scroll to top whenever the page number changes
        Effect::new(move |prev: Option<u32>| {
            let page = filters.with(|f| f.page());
            if prev.is_some_and(|p| p != page) {
                url_state::scroll_to_top();
            }
            page
        });

        // Back/forward navigation
        let handle = window_event_listener(ev::popstate, move |_| {
            set_filters.set(url_state::read_filters());
        });
        on_cleanup(move || handle.remove());

        Self {
            filters,
            set_filters,
            page_reset_notice,
            set_page_reset_notice,
            notice_generation: StoredValue::new(0),
            banner_duration_ms,
            on_reset,
        }
    }

    pub fn set_status(&self, status: Option<Status>) {
        let mut next = self.filters.get_untracked();
        let moved = next.set_status(status);
        tracing::debug!(?status, "[FILTERS] status changed");
        self.set_filters.set(next);
        if moved {
            self.flash_page_reset_notice();
        }
    }

    pub fn set_gender(&self, gender: Option<Gender>) {
        let mut next = self.filters.get_untracked();
        let moved = next.set_gender(gender);
        tracing::debug!(?gender, "[FILTERS] gender changed");
        self.set_filters.set(next);
        if moved {
            self.flash_page_reset_notice();
        }
    }

    pub fn set_page(&self, page: u32) {
        let mut next = self.filters.get_untracked();
        if next.set_page(page) {
            self.set_filters.set(next);
        }
    }

    pub fn set_show_favorites(&self, show: bool) {
        let mut next = self.filters.get_untracked();
        if next.show_favorites != show {
            next.set_show_favorites(show);
            self.set_filters.set(next);
        }
    }

    pub fn toggle_show_favorites(&self) {
        let show = self.filters.with_untracked(|f| f.show_favorites);
        self.set_show_favorites(!show);
    }

    /// Restore defaults and run the reset callback
    pub fn reset(&self) {
        tracing::info!("[FILTERS] reset");
        self.set_filters.update(|f| f.reset());
        self.set_page_reset_notice.set(false);
        self.on_reset.run(());
    }

    /// Send the user back to page 1 if the server reports fewer pages.
    /// Only writes when something actually changes.
    pub fn correct_page(&self, reported_pages: u32) -> bool {
        let mut next = self.filters.get_untracked();
        if next.correct_page(reported_pages) {
            self.set_filters.set(next);
            true
        } else {
            false
        }
    }

    fn flash_page_reset_notice(&self) {
        let mut generation = 0;
        self.notice_generation.update_value(|g| {
            *g += 1;
            generation = *g;
        });
        self.set_page_reset_notice.set(true);

        let notice_generation = self.notice_generation;
        let set_notice = self.set_page_reset_notice;
        Timeout::new(self.banner_duration_ms, move || {
            if notice_generation.get_value() == generation {
                set_notice.set(false);
            }
        })
        .forget();
    }
}

/// Get the filter context
pub fn use_filters() -> FiltersContext {
    expect_context::<FiltersContext>()
}
