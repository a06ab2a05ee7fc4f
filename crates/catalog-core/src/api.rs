//! Catalog Request & Response Handling
//!
//! Transport-independent half of the remote accessor: builds the request URL
//! and turns a raw status + body into a page or an error.

use url::Url;

use crate::error::{CatalogError, Result};
use crate::filters::CharacterQuery;
use crate::models::CharactersPage;

const CHARACTER_PATH: &str = "character";

const STATUS_NOT_FOUND: u16 = 404;

/// Build `{base}/character?...` for a query, omitting unspecified fields
pub fn characters_url(base_url: &str, query: &CharacterQuery) -> Result<Url> {
    let base = format!("{}/", base_url.trim_end_matches('/'));
    let mut url = Url::parse(&base)
        .and_then(|u| u.join(CHARACTER_PATH))
        .map_err(|e| CatalogError::Network(format!("invalid base URL {}: {}", base_url, e)))?;

    let pairs = query.to_pairs();
    if !pairs.is_empty() {
        url.query_pairs_mut().extend_pairs(pairs);
    }
    Ok(url)
}

/// Map a response to a page.
///
/// 404 means "no matches" and yields an empty page; any other non-2xx status
/// is an [`CatalogError::Http`].
pub fn interpret_response(status: u16, body: &str) -> Result<CharactersPage> {
    if status == STATUS_NOT_FOUND {
        tracing::debug!("catalog returned 404, treating as empty page");
        return Ok(CharactersPage::empty());
    }
    if !(200..300).contains(&status) {
        return Err(CatalogError::Http { status });
    }
    serde_json::from_str(body).map_err(|e| CatalogError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Gender, PageInfo, Status};

    const BASE: &str = "https://rickandmortyapi.com/api";

    #[test]
    fn test_url_without_filters() {
        let url = characters_url(BASE, &CharacterQuery::default()).unwrap();
        assert_eq!(url.as_str(), "https://rickandmortyapi.com/api/character?page=1");
    }

    #[test]
    fn test_url_with_filters() {
        let query = CharacterQuery {
            status: Some(Status::Dead),
            gender: Some(Gender::Female),
            page: 4,
        };
        let url = characters_url(&format!("{}/", BASE), &query).unwrap();
        assert_eq!(
            url.as_str(),
            "https://rickandmortyapi.com/api/character?status=dead&gender=female&page=4"
        );
    }

    #[test]
    fn test_url_omits_zero_page() {
        let query = CharacterQuery { page: 0, ..Default::default() };
        let url = characters_url(BASE, &query).unwrap();
        assert_eq!(url.as_str(), "https://rickandmortyapi.com/api/character");
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(characters_url("not a url", &CharacterQuery::default()).is_err());
    }

    #[test]
    fn test_not_found_is_empty_page() {
        let page = interpret_response(404, r#"{"error":"There is nothing here"}"#).unwrap();
        assert_eq!(
            page.info,
            PageInfo { count: 0, pages: 0, next: None, prev: None }
        );
        assert!(page.results.is_empty());
    }

    #[test]
    fn test_other_status_is_error() {
        assert_eq!(interpret_response(500, ""), Err(CatalogError::Http { status: 500 }));
        assert_eq!(
            interpret_response(429, "").unwrap_err().to_string(),
            "API error: 429"
        );
    }

    #[test]
    fn test_success_envelope() {
        let body = r#"{
            "info": { "count": 826, "pages": 42, "next": "https://rickandmortyapi.com/api/character?page=2", "prev": null },
            "results": []
        }"#;
        let page = interpret_response(200, body).unwrap();
        assert_eq!(page.info.count, 826);
        assert_eq!(page.info.pages, 42);
        assert!(page.info.next.is_some());
        assert!(page.info.prev.is_none());
    }

    #[test]
    fn test_bad_body_is_decode_error() {
        let err = interpret_response(200, "<html>").unwrap_err();
        assert!(matches!(err, CatalogError::Decode(_)));
        assert!(!err.is_recoverable());
    }
}
