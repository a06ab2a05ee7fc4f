//! Toast Viewport Component

use leptos::prelude::*;

use crate::notifications::use_notifications;

/// Stack of active toasts, newest last
#[component]
pub fn ToastViewport() -> impl IntoView {
    let notifications = use_notifications();
    let toasts = notifications.toasts();

    view! {
        <div class="toast-viewport" aria-live="polite">
            <For
                each=move || toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.kind.class() role="status">
                            <span class="toast-icon">{toast.kind.icon()}</span>
                            <div class="toast-text">
                                <div class="toast-title">{toast.title}</div>
                                {toast.description.map(|d| view! { <div class="toast-description">{d}</div> })}
                            </div>
                            <button
                                class="toast-close"
                                aria-label="Dismiss"
                                on:click=move |_| notifications.dismiss(id)
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
