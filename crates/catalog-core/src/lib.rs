//! Catalog Core
//!
//! Platform-independent state for the character explorer: models, filter
//! and URL mapping, favorites, the page number strip, the query cache and its
//! lifecycle, and response interpretation. Everything here runs on the host for tests.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod favorites;
pub mod filters;
pub mod models;
pub mod pagination;
pub mod query;

pub use cache::{CachePolicy, Lookup, QueryCache};
pub use config::CatalogConfig;
pub use error::CatalogError;
pub use favorites::Favorites;
pub use filters::{CharacterQuery, Filters, PageCorrection};
pub use models::{Character, CharactersPage, Gender, NamedResource, PageInfo, Status};
pub use pagination::{page_window, PageToken};
pub use query::{plan_load, settle, LoadPlan, LoadedPage, Settled};
