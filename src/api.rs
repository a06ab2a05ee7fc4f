//! Catalog API Client
//!
//! Fetches character pages from the remote catalog over `fetch`.

use gloo_net::http::Request;

use catalog_core::api::{characters_url, interpret_response};
use catalog_core::{CatalogError, CharacterQuery, CharactersPage};

/// GET `{base}/character` for the given filters.
///
/// A 404 resolves to an empty page; other failures are returned as errors.
pub async fn get_characters(
    base_url: &str,
    query: &CharacterQuery,
) -> Result<CharactersPage, CatalogError> {
    let url = characters_url(base_url, query)?;
    tracing::debug!(%url, "[API] fetching characters");

    let response = Request::get(url.as_str())
        .send()
        .await
        .map_err(|e| CatalogError::Network(e.to_string()))?;
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| CatalogError::Network(e.to_string()))?;

    interpret_response(status, &body)
}
