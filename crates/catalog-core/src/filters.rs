//! Filter & Pagination State
//!
//! The four user-facing filters and their mapping to the shareable URL
//! query string. `None` means "unspecified" and serializes as `all`.

use url::form_urlencoded;

use crate::models::{Gender, Status};

pub const STATUS_PARAM: &str = "status";
pub const GENDER_PARAM: &str = "gender";
pub const PAGE_PARAM: &str = "page";
pub const FAVORITES_PARAM: &str = "favorites";

/// Sentinel written for an unspecified status/gender
pub const ANY_VALUE: &str = "all";

const FIRST_PAGE: u32 = 1;

/// Cache/fetch key derived from the filters (favorites-only excluded)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CharacterQuery {
    pub status: Option<Status>,
    pub gender: Option<Gender>,
    pub page: u32,
}

impl Default for CharacterQuery {
    fn default() -> Self {
        Self { status: None, gender: None, page: FIRST_PAGE }
    }
}

impl CharacterQuery {
    /// Query pairs for the catalog request, omitting unspecified fields
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(3);
        if let Some(status) = self.status {
            pairs.push((STATUS_PARAM, status.as_query().to_string()));
        }
        if let Some(gender) = self.gender {
            pairs.push((GENDER_PARAM, gender.as_query().to_string()));
        }
        if self.page > 0 {
            pairs.push((PAGE_PARAM, self.page.to_string()));
        }
        pairs
    }
}

/// Filter state mirrored to the URL
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Filters {
    pub status: Option<Status>,
    pub gender: Option<Gender>,
    page: u32,
    pub show_favorites: bool,
}

impl Default for Filters {
    fn default() -> Self {
        Self {
            status: None,
            gender: None,
            page: FIRST_PAGE,
            show_favorites: false,
        }
    }
}

impl Filters {
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Parse from a location search string (leading `?` optional).
    ///
    /// Unknown values fall back to defaults; a missing, non-numeric or
    /// non-positive page becomes 1.
    pub fn from_query_string(search: &str) -> Self {
        let mut filters = Self::default();
        let search = search.strip_prefix('?').unwrap_or(search);

        for (key, value) in form_urlencoded::parse(search.as_bytes()) {
            match key.as_ref() {
                STATUS_PARAM => filters.status = Status::from_query(&value),
                GENDER_PARAM => filters.gender = Gender::from_query(&value),
                PAGE_PARAM => filters.page = parse_page(&value),
                FAVORITES_PARAM => {
                    filters.show_favorites = matches!(value.trim(), "true" | "1")
                }
                _ => {}
            }
        }
        filters
    }

    /// Serialize into a search string (without `?`), keeping any unrelated
    /// parameters already present in `existing`.
    pub fn to_query_string(&self, existing: &str) -> String {
        let existing = existing.strip_prefix('?').unwrap_or(existing);
        let mut serializer = form_urlencoded::Serializer::new(String::new());

        for (key, value) in form_urlencoded::parse(existing.as_bytes()) {
            if !is_filter_param(&key) {
                serializer.append_pair(&key, &value);
            }
        }

        serializer.append_pair(STATUS_PARAM, self.status.map_or(ANY_VALUE, |s| s.as_query()));
        serializer.append_pair(GENDER_PARAM, self.gender.map_or(ANY_VALUE, |g| g.as_query()));
        serializer.append_pair(PAGE_PARAM, &self.page.to_string());
        if self.show_favorites {
            serializer.append_pair(FAVORITES_PARAM, "true");
        }
        serializer.finish()
    }

    /// Change the status filter. Returns true when this moved the user off a
    /// page other than the first.
    pub fn set_status(&mut self, status: Option<Status>) -> bool {
        self.status = status;
        self.reset_page()
    }

    /// Change the gender filter. Returns true when this moved the user off a
    /// page other than the first.
    pub fn set_gender(&mut self, gender: Option<Gender>) -> bool {
        self.gender = gender;
        self.reset_page()
    }

    /// Favorites-only never touches the page
    pub fn set_show_favorites(&mut self, show: bool) {
        self.show_favorites = show;
    }

    /// Jump to a page; 0 is treated as 1. Returns true if the page changed.
    pub fn set_page(&mut self, page: u32) -> bool {
        let page = page.max(FIRST_PAGE);
        let changed = self.page != page;
        self.page = page;
        changed
    }

    /// Restore every field to its default
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Send the user back to page 1 when the requested page exceeds what the
    /// server reported. A 404 reports 0 pages, so any page past the first is
    /// out of range in that case.
    pub fn correct_page(&mut self, reported_pages: u32) -> bool {
        if self.page > FIRST_PAGE && self.page > reported_pages {
            tracing::debug!(page = self.page, reported_pages, "page out of range, returning to first page");
            self.page = FIRST_PAGE;
            true
        } else {
            false
        }
    }

    pub fn fetch_key(&self) -> CharacterQuery {
        CharacterQuery {
            status: self.status,
            gender: self.gender,
            page: self.page,
        }
    }

    pub fn has_filters(&self) -> bool {
        self.status.is_some() || self.gender.is_some()
    }

    fn reset_page(&mut self) -> bool {
        let moved = self.page > FIRST_PAGE;
        self.page = FIRST_PAGE;
        moved
    }
}

/// The key the user was sent to after an out-of-range page, kept only
/// while that key stays current
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageCorrection {
    landed_on: Option<CharacterQuery>,
}

impl PageCorrection {
    pub fn record(&mut self, key: CharacterQuery) {
        self.landed_on = Some(key);
    }

    /// Forget the correction once `key` moves elsewhere. Returns true if it was dropped.
    pub fn follow(&mut self, key: &CharacterQuery) -> bool {
        if self.landed_on.is_some_and(|landed| landed != *key) {
            self.landed_on = None;
            true
        } else {
            false
        }
    }

    pub fn is_active(&self, key: &CharacterQuery) -> bool {
        self.landed_on.as_ref() == Some(key)
    }
}

fn parse_page(value: &str) -> u32 {
    match value.trim().parse::<i64>() {
        Ok(n) if n >= 1 => u32::try_from(n).unwrap_or(u32::MAX),
        _ => FIRST_PAGE,
    }
}

fn is_filter_param(key: &str) -> bool {
    matches!(key, STATUS_PARAM | GENDER_PARAM | PAGE_PARAM | FAVORITES_PARAM)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn on_page(page: u32) -> Filters {
        let mut filters = Filters::default();
        filters.set_page(page);
        filters
    }

    #[test]
    fn test_defaults() {
        let filters = Filters::default();
        assert_eq!(filters.status, None);
        assert_eq!(filters.gender, None);
        assert_eq!(filters.page(), 1);
        assert!(!filters.show_favorites);
    }

    #[test]
    fn test_status_and_gender_reset_page() {
        let mut filters = on_page(4);
        assert!(filters.set_status(Some(Status::Dead)));
        assert_eq!(filters.page(), 1);

        filters.set_page(7);
        assert!(filters.set_gender(Some(Gender::Female)));
        assert_eq!(filters.page(), 1);

        // Already on the first page: reset happens, but nothing to report
        assert!(!filters.set_status(None));
        assert_eq!(filters.page(), 1);
    }

    #[test]
    fn test_favorites_keeps_page() {
        let mut filters = on_page(6);
        filters.set_show_favorites(true);
        assert_eq!(filters.page(), 6);
        filters.set_show_favorites(false);
        assert_eq!(filters.page(), 6);
    }

    #[test]
    fn test_set_page_clamps_to_one() {
        let mut filters = on_page(3);
        assert!(filters.set_page(0));
        assert_eq!(filters.page(), 1);
        assert!(!filters.set_page(1));
    }

    #[test]
    fn test_reset() {
        let mut filters = Filters::from_query_string("status=dead&gender=male&page=9&favorites=true");
        filters.reset();
        assert_eq!(filters, Filters::default());
    }

    #[test]
    fn test_correct_page_beyond_total() {
        let mut filters = on_page(12);
        assert!(filters.correct_page(8));
        assert_eq!(filters.page(), 1);

        let mut filters = on_page(8);
        assert!(!filters.correct_page(8));
        assert_eq!(filters.page(), 8);

        // 404 for a later page reports zero pages
        let mut filters = on_page(2);
        assert!(filters.correct_page(0));
        assert_eq!(filters.page(), 1);

        // First page is never "out of range"
        let mut filters = Filters::default();
        assert!(!filters.correct_page(0));
    }

    #[test]
    fn test_fetch_key_stable_and_ignores_favorites() {
        let mut a = Filters::from_query_string("status=alive&page=3");
        let b = Filters::from_query_string("?page=3&status=Alive");
        assert_eq!(a.fetch_key(), b.fetch_key());

        let mut hashed = HashMap::new();
        hashed.insert(a.fetch_key(), "first");
        assert_eq!(hashed.get(&b.fetch_key()), Some(&"first"));

        a.set_show_favorites(true);
        assert_eq!(a.fetch_key(), b.fetch_key());
    }

    #[test]
    fn test_parse_query_string() {
        let filters = Filters::from_query_string("?status=dead&gender=genderless&page=5&favorites=true");
        assert_eq!(filters.status, Some(Status::Dead));
        assert_eq!(filters.gender, Some(Gender::Genderless));
        assert_eq!(filters.page(), 5);
        assert!(filters.show_favorites);
    }

    #[test]
    fn test_parse_sentinels_and_garbage() {
        let filters = Filters::from_query_string("status=all&gender=robot&page=-3&favorites=nope");
        assert_eq!(filters.status, None);
        assert_eq!(filters.gender, None);
        assert_eq!(filters.page(), 1);
        assert!(!filters.show_favorites);

        assert_eq!(Filters::from_query_string("page=abc").page(), 1);
        assert_eq!(Filters::from_query_string("page=0").page(), 1);
        assert_eq!(Filters::from_query_string("").page(), 1);
    }

    #[test]
    fn test_to_query_string() {
        let mut filters = Filters::default();
        filters.set_status(Some(Status::Alive));
        filters.set_page(2);
        assert_eq!(filters.to_query_string(""), "status=alive&gender=all&page=2");

        filters.set_show_favorites(true);
        assert_eq!(
            filters.to_query_string("?lang=en&page=9"),
            "lang=en&status=alive&gender=all&page=2&favorites=true"
        );

        let parsed = Filters::from_query_string(&filters.to_query_string(""));
        assert_eq!(parsed, filters);
    }

    #[test]
    fn test_page_correction_forgotten_after_leaving() {
        let mut filters = Filters::from_query_string("page=30");
        let mut correction = PageCorrection::default();
        assert!(filters.correct_page(0));
        correction.record(filters.fetch_key());
        assert!(!correction.follow(&filters.fetch_key()));
        assert!(correction.is_active(&filters.fetch_key()));

        filters.set_page(2);
        assert!(correction.follow(&filters.fetch_key()));
        filters.set_page(1);
        assert!(!correction.follow(&filters.fetch_key()));
        assert!(!correction.is_active(&filters.fetch_key()));
    }

    #[test]
    fn test_has_filters() {
        let mut filters = Filters::default();
        assert!(!filters.has_filters());
        filters.set_page(4);
        filters.set_show_favorites(true);
        assert!(!filters.has_filters());
        filters.set_gender(Some(Gender::Genderless));
        assert!(filters.has_filters());
    }

    #[test]
    fn test_character_query_pairs() {
        let query = CharacterQuery { status: Some(Status::Unknown), gender: None, page: 3 };
        assert_eq!(
            query.to_pairs(),
            vec![("status", "unknown".to_string()), ("page", "3".to_string())]
        );

        let query = CharacterQuery { page: 0, ..Default::default() };
        assert!(query.to_pairs().is_empty());
    }
}
