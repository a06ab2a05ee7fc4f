//! Loading Spinner Component

use leptos::prelude::*;

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="loading-spinner" role="status" aria-label="Loading">
            <div class="spinner"></div>
        </div>
    }
}
