//! Character Detail Modal Component
//!
//! Overlay for the selected character. Closes on backdrop click, the close
//! buttons or Escape.

use catalog_core::Character;
use leptos::ev;
use leptos::prelude::*;

use crate::notifications::use_notifications;
use crate::store::{
    store_clear_selection, store_is_favorite, store_toggle_favorite, use_app_store,
    AppStateStoreFields,
};
use crate::theme::{gender_class, species_class, status_class};

/// Detail overlay, rendered only while a character is selected
#[component]
pub fn CharacterDetailModal() -> impl IntoView {
    let store = use_app_store();

    let handle = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" && store.selected().with_untracked(|s| s.is_some()) {
            store_clear_selection(&store);
        }
    });
    on_cleanup(move || handle.remove());

    view! {
        {move || store.selected().get().map(|character| view! { <DetailDialog character=character /> })}
    }
}

#[component]
fn DetailDialog(character: Character) -> impl IntoView {
    let store = use_app_store();
    let notifications = use_notifications();

    let id = character.id;
    let kind = character.kind.clone();
    let is_favorite = move || store_is_favorite(&store, id);
    let close = move || store_clear_selection(&store);

    let for_toggle = character.clone();
    let toggle_favorite = move |_| {
        let name = for_toggle.name.clone();
        if store_toggle_favorite(&store, &for_toggle) {
            notifications.success("Added to favorites", format!("{} was added to favorites.", name));
        } else {
            notifications.info("Removed from favorites", format!("{} was removed from favorites.", name));
        }
    };

    view! {
        <div class="modal-backdrop" on:click=move |_| close()>
            <div
                class="modal"
                role="dialog"
                aria-modal="true"
                aria-labelledby="character-detail-title"
                on:click=|ev| ev.stop_propagation()
            >
                <button class="modal-close" aria-label="Close" on:click=move |_| close()>
                    "✕"
                </button>

                <div class="modal-hero">
                    <img src=character.image.clone() alt=character.name.clone() />
                    <div class="modal-hero-text">
                        <h2 id="character-detail-title">{character.name.clone()}</h2>
                        <div class="modal-badges">
                            <span class=status_class(character.status)>
                                <span class="status-dot"></span>
                                {character.status.label()}
                            </span>
                            <span class=species_class(&character.species)>{character.species.clone()}</span>
                            <span class=gender_class(character.gender)>{character.gender.label()}</span>
                        </div>
                    </div>
                </div>

                <dl class="modal-facts">
                    <div class="modal-fact">
                        <dt>"Origin"</dt>
                        <dd>{character.origin.name.clone()}</dd>
                    </div>
                    <div class="modal-fact">
                        <dt>"Last known location"</dt>
                        <dd>{character.location.name.clone()}</dd>
                    </div>
                    <div class="modal-fact">
                        <dt>"Episodes"</dt>
                        <dd>{format!("{} episodes", character.episode_count())}</dd>
                    </div>
                    {(!kind.is_empty()).then(|| view! {
                        <div class="modal-fact">
                            <dt>"Type"</dt>
                            <dd>{kind.clone()}</dd>
                        </div>
                    })}
                </dl>

                <div class="modal-footer">
                    <button class="modal-btn" on:click=move |_| close()>"Close"</button>
                    <button
                        class=move || if is_favorite() { "modal-btn favorite active" } else { "modal-btn favorite" }
                        aria-label=move || if is_favorite() { "Remove from favorites" } else { "Add to favorites" }
                        on:click=toggle_favorite
                    >
                        {move || if is_favorite() { "♥ Remove from favorites" } else { "♡ Add to favorites" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
