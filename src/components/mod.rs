//! UI Components
//!
//! Reusable Leptos components.

mod character_card;
mod character_container;
mod character_detail_modal;
mod character_filters;
mod character_grid;
mod error_fallback;
mod favorites_button;
mod loading_spinner;
mod pagination;
mod toast_viewport;

pub use character_card::CharacterCard;
pub use character_container::CharacterContainer;
pub use character_detail_modal::CharacterDetailModal;
pub use character_filters::CharacterFilters;
pub use character_grid::CharacterGrid;
pub use error_fallback::ErrorFallback;
pub use favorites_button::FavoritesButton;
pub use loading_spinner::LoadingSpinner;
pub use pagination::Pagination;
pub use toast_viewport::ToastViewport;
