//! Character Card Component
//!
//! Grid tile with portrait, badges and favorite/detail actions.

use catalog_core::Character;
use leptos::prelude::*;

use crate::notifications::use_notifications;
use crate::store::{store_is_favorite, store_select, store_toggle_favorite, use_app_store};
use crate::theme::{species_class, status_class};

/// Single character tile
#[component]
pub fn CharacterCard(character: Character) -> impl IntoView {
    let store = use_app_store();
    let notifications = use_notifications();

    let id = character.id;
    let is_favorite = move || store_is_favorite(&store, id);

    let for_toggle = character.clone();
    let toggle_favorite = move |_| {
        let name = for_toggle.name.clone();
        if store_toggle_favorite(&store, &for_toggle) {
            notifications.success("Added to favorites", format!("{} was added to favorites.", name));
        } else {
            notifications.info("Removed from favorites", format!("{} was removed from favorites.", name));
        }
    };

    let for_detail = character.clone();
    let show_details = move |_| store_select(&store, for_detail.clone());

    let name = character.name.clone();
    let favorite_label = {
        let name = name.clone();
        move || {
            if is_favorite() {
                format!("Remove {} from favorites", name)
            } else {
                format!("Add {} to favorites", name)
            }
        }
    };

    view! {
        <article class=move || if is_favorite() { "character-card favorite" } else { "character-card" }>
            <div class="card-image">
                <img src=character.image.clone() alt=name.clone() loading="lazy" />
                <span class=status_class(character.status)>
                    <span class="status-dot"></span>
                    {character.status.label()}
                </span>
                <span class="card-id">{format!("#{}", id)}</span>
                <Show when=is_favorite>
                    <span class="card-favorite-mark">"♥"</span>
                </Show>
            </div>

            <div class="card-body">
                <h3 class="card-name">{name.clone()}</h3>
                <span class=species_class(&character.species)>{character.species.clone()}</span>

                <dl class="card-facts">
                    <dt>"Gender"</dt>
                    <dd>{character.gender.label()}</dd>
                    <dt>"Origin"</dt>
                    <dd>{character.origin.name.clone()}</dd>
                    <dt>"Location"</dt>
                    <dd>{character.location.name.clone()}</dd>
                </dl>
            </div>

            <div class="card-actions">
                <button
                    class="card-btn details"
                    aria-label=format!("Show details for {}", name)
                    on:click=show_details
                >
                    "Details"
                </button>
                <button
                    class=move || if is_favorite() { "card-btn favorite active" } else { "card-btn favorite" }
                    aria-label=favorite_label
                    on:click=toggle_favorite
                >
                    {move || if is_favorite() { "♥ Remove" } else { "♡ Favorite" }}
                </button>
            </div>
        </article>
    }
}
