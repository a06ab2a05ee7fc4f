//! Character Grid Component

use catalog_core::Character;
use leptos::prelude::*;

use super::CharacterCard;

/// Responsive grid of character cards
#[component]
pub fn CharacterGrid(
    #[prop(into)] characters: Signal<Vec<Character>>,
    /// Dim the grid while the next page loads behind it
    #[prop(into)] dimmed: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class=move || if dimmed.get() { "character-grid dimmed" } else { "character-grid" }>
            <For
                each=move || characters.get()
                key=|character| character.id
                children=move |character| {
                    view! { <CharacterCard character=character /> }
                }
            />
        </div>
    }
}
