//! Character Filters Component
//!
//! Status and gender selects, favorites-only switch and reset.

use catalog_core::filters::ANY_VALUE;
use catalog_core::{Gender, Status};
use leptos::prelude::*;

use crate::context::use_filters;
use crate::theme::gender_symbol;

/// Filter panel
#[component]
pub fn CharacterFilters() -> impl IntoView {
    let filters = use_filters();

    let status_value = move || {
        filters.filters.with(|f| f.status.map_or(ANY_VALUE, |s| s.as_query()))
    };
    let gender_value = move || {
        filters.filters.with(|f| f.gender.map_or(ANY_VALUE, |g| g.as_query()))
    };
    let show_favorites = move || filters.filters.with(|f| f.show_favorites);

    view! {
        <div class="filters">
            <div class="filters-header">
                <h2>"Filters"</h2>
                <span
                    class="filters-info"
                    title="Changing a filter sends you back to page 1."
                >
                    "ⓘ"
                </span>
                <button class="filters-reset" on:click=move |_| filters.reset()>
                    "↺ Reset"
                </button>
            </div>

            <div class="filters-grid">
                <div class="filter-field">
                    <label for="status-filter">"Status"</label>
                    <select
                        id="status-filter"
                        prop:value=status_value
                        on:change=move |ev| {
                            filters.set_status(Status::from_query(&event_target_value(&ev)));
                        }
                    >
                        <option value=ANY_VALUE selected=move || status_value() == ANY_VALUE>
                            "Any status"
                        </option>
                        {Status::ALL.into_iter().map(|status| {
                            let value = status.as_query();
                            view! {
                                <option value=value selected=move || status_value() == value>
                                    {status.label()}
                                </option>
                            }
                        }).collect_view()}
                    </select>
                </div>

                <div class="filter-field">
                    <label for="gender-filter">"Gender"</label>
                    <select
                        id="gender-filter"
                        prop:value=gender_value
                        on:change=move |ev| {
                            filters.set_gender(Gender::from_query(&event_target_value(&ev)));
                        }
                    >
                        <option value=ANY_VALUE selected=move || gender_value() == ANY_VALUE>
                            "Any gender"
                        </option>
                        {Gender::ALL.into_iter().map(|gender| {
                            let value = gender.as_query();
                            view! {
                                <option value=value selected=move || gender_value() == value>
                                    {format!("{} {}", gender_symbol(gender), gender.label())}
                                </option>
                            }
                        }).collect_view()}
                    </select>
                </div>

                <div class="filter-field">
                    <label for="favorites-filter">"Favorites"</label>
                    <label class="favorites-switch">
                        <input
                            id="favorites-filter"
                            type="checkbox"
                            prop:checked=show_favorites
                            on:change=move |ev| filters.set_show_favorites(event_target_checked(&ev))
                        />
                        <span class=move || if show_favorites() { "heart active" } else { "heart" }>"♥"</span>
                        <span>"Favorites only"</span>
                    </label>
                </div>
            </div>
        </div>
    }
}
