//! Pagination Component
//!
//! Previous/next buttons around a collapsed strip of page numbers.

use catalog_core::{page_window, PageToken};
use leptos::prelude::*;

use crate::context::use_filters;

/// Page controls for the fetched result set
#[component]
pub fn Pagination(#[prop(into)] total_pages: Signal<u32>) -> impl IntoView {
    let filters = use_filters();
    let current_page = Memo::new(move |_| filters.filters.with(|f| f.page()));

    let go_previous = move |_| {
        let page = current_page.get_untracked();
        if page > 1 {
            filters.set_page(page - 1);
        }
    };

    let go_next = move |_| {
        let page = current_page.get_untracked();
        if page < total_pages.get_untracked() {
            filters.set_page(page + 1);
        }
    };

    let tokens = move || {
        page_window(current_page.get(), total_pages.get())
            .into_iter()
            .enumerate()
            .collect::<Vec<_>>()
    };

    view! {
        <nav class="pagination" aria-label="Pagination">
            <span class="pagination-total">
                "Total " <strong>{move || total_pages.get()}</strong> " pages"
            </span>

            <div class="pagination-controls">
                <button
                    class="page-btn nav"
                    aria-label="Previous page"
                    disabled=move || current_page.get() <= 1
                    on:click=go_previous
                >
                    "‹"
                </button>

                <For
                    each=tokens
                    key=|(index, token)| (*index, *token)
                    children=move |(_, token)| match token {
                        PageToken::Ellipsis => view! {
                            <span class="page-ellipsis">"•••"</span>
                        }.into_any(),
                        PageToken::Page(page) => {
                            let is_current = move || current_page.get() == page;
                            view! {
                                <button
                                    class=move || if is_current() { "page-btn active" } else { "page-btn" }
                                    aria-label=format!("Page {}", page)
                                    aria-current=move || is_current().then_some("page")
                                    on:click=move |_| filters.set_page(page)
                                >
                                    {page}
                                </button>
                            }.into_any()
                        }
                    }
                />

                <button
                    class="page-btn nav"
                    aria-label="Next page"
                    disabled={move || current_page.get() >= total_pages.get()}
                    on:click=go_next
                >
                    "›"
                </button>
            </div>
        </nav>
    }
}
