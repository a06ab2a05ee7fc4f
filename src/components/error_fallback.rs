//! Error Fallback Component
//!
//! Shown by the top-level error boundary.

use leptos::prelude::*;

use crate::query::CharactersResource;
use crate::url_state;

#[component]
pub fn ErrorFallback(#[prop(into)] messages: Signal<Vec<String>>) -> impl IntoView {
    let characters = expect_context::<CharactersResource>();

    view! {
        <div class="error-fallback" role="alert">
            <h2>"Something went wrong"</h2>
            <p>"The character list could not be displayed."</p>
            <ul class="error-messages">
                {move || messages.get().into_iter().map(|m| view! { <li>{m}</li> }).collect_view()}
            </ul>
            <div class="error-actions">
                <button class="error-btn retry" on:click=move |_| characters.refetch()>
                    "Try again"
                </button>
                <button class="error-btn home" on:click=|_| url_state::go_home()>
                    "Go home"
                </button>
            </div>
        </div>
    }
}
