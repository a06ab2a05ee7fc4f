//! Query Lifecycle
//!
//! The decisions behind the character list binding, kept free of any
//! reactive runtime: what to show and whether to fetch when the key
//! changes, and what a finished request means for the screen.

use std::fmt::Debug;
use std::hash::Hash;

use crate::cache::{Lookup, QueryCache};
use crate::error::CatalogError;
use crate::filters::CharacterQuery;
use crate::models::CharactersPage;

/// What to do when the current key is (re)evaluated
#[derive(Debug, Clone, PartialEq)]
pub struct LoadPlan<V> {
    /// Cached value to put on screen right away
    pub show: Option<V>,
    /// A request was claimed and must be sent
    pub fetch: bool,
}

impl<V> LoadPlan<V> {
    fn idle() -> Self {
        Self { show: None, fetch: false }
    }
}

/// Outcome of a finished request
#[derive(Debug, Clone, PartialEq)]
pub enum Settled<V> {
    /// Response for the key on screen
    Show(V),
    /// Recoverable failure for the key on screen
    Failed(CatalogError),
    /// Unreadable response for the key on screen
    Fault(CatalogError),
    /// The key changed while the request was out; only the cache was touched
    Superseded,
}

/// Evaluate `key` against the cache. Disabled queries neither read the
/// cache nor fetch. Stale and missing entries claim a request unless one
/// is already in flight; missing entries keep whatever is on screen.
pub fn plan_load<K, V>(cache: &mut QueryCache<K, V>, key: &K, enabled: bool, now: u64) -> LoadPlan<V>
where
    K: Eq + Hash + Clone + Debug,
    V: Clone,
{
    if !enabled {
        return LoadPlan::idle();
    }
    cache.collect_garbage(now);

    match cache.lookup(key, now) {
        Lookup::Fresh(value) => LoadPlan { show: Some(value), fetch: false },
        Lookup::Stale(value) => LoadPlan { show: Some(value), fetch: cache.begin_fetch(key) },
        Lookup::Missing => LoadPlan { show: None, fetch: cache.begin_fetch(key) },
    }
}

/// Record a finished request and release its in-flight claim. Successful
/// responses are cached whether or not `key` is still current.
pub fn settle<K, V>(
    cache: &mut QueryCache<K, V>,
    key: K,
    result: Result<V, CatalogError>,
    is_current: bool,
    now: u64,
) -> Settled<V>
where
    K: Eq + Hash + Clone + Debug,
    V: Clone,
{
    match result {
        Ok(value) => {
            cache.store(key, value.clone(), now);
            if is_current {
                Settled::Show(value)
            } else {
                Settled::Superseded
            }
        }
        Err(err) => {
            cache.abandon(&key);
            match (is_current, err.is_recoverable()) {
                (false, _) => Settled::Superseded,
                (true, true) => Settled::Failed(err),
                (true, false) => Settled::Fault(err),
            }
        }
    }
}

/// A page together with the key it was fetched for
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedPage {
    pub key: CharacterQuery,
    pub page: CharactersPage,
    /// Empty stand-in after a failed request
    pub failed: bool,
}

impl LoadedPage {
    pub fn new(key: CharacterQuery, page: CharactersPage) -> Self {
        Self { key, page, failed: false }
    }

    pub fn failed(key: CharacterQuery) -> Self {
        Self { key, page: CharactersPage::empty(), failed: true }
    }

    /// Page count as reported by the server; None for a stand-in
    pub fn reported_pages(&self) -> Option<u32> {
        (!self.failed).then_some(self.page.info.pages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::CachePolicy;
    use crate::filters::Filters;

    const POLICY: CachePolicy = CachePolicy {
        stale_after_ms: 1_000,
        gc_after_ms: 10_000,
    };

    fn cache() -> QueryCache<u32, &'static str> {
        QueryCache::new(POLICY)
    }

    #[test]
    fn test_disabled_does_nothing() {
        let mut cache = cache();
        cache.store(1, "cached", 0);

        assert_eq!(plan_load(&mut cache, &2, false, 10), LoadPlan { show: None, fetch: false });
        // No claim was taken for the disabled key
        assert!(cache.begin_fetch(&2));
        assert_eq!(plan_load(&mut cache, &1, false, 10), LoadPlan { show: None, fetch: false });
    }

    #[test]
    fn test_plan_by_freshness() {
        let mut cache = cache();
        assert_eq!(plan_load(&mut cache, &1, true, 0), LoadPlan { show: None, fetch: true });
        assert_eq!(settle(&mut cache, 1, Ok("one"), true, 100), Settled::Show("one"));

        assert_eq!(plan_load(&mut cache, &1, true, 500), LoadPlan { show: Some("one"), fetch: false });
        assert_eq!(plan_load(&mut cache, &1, true, 1_200), LoadPlan { show: Some("one"), fetch: true });
    }

    #[test]
    fn test_one_request_per_key() {
        let mut cache = cache();
        assert!(plan_load(&mut cache, &1, true, 0).fetch);
        assert!(!plan_load(&mut cache, &1, true, 1).fetch);

        cache.store(1, "one", 0);
        assert_eq!(plan_load(&mut cache, &1, true, 2_000), LoadPlan { show: Some("one"), fetch: true });
        assert_eq!(plan_load(&mut cache, &1, true, 2_001), LoadPlan { show: Some("one"), fetch: false });
    }

    #[test]
    fn test_superseded_response_only_fills_cache() {
        let mut cache = cache();
        assert!(plan_load(&mut cache, &1, true, 0).fetch);
        assert_eq!(settle(&mut cache, 1, Ok("late"), false, 50), Settled::Superseded);
        assert_eq!(plan_load(&mut cache, &1, true, 60), LoadPlan { show: Some("late"), fetch: false });
    }

    #[test]
    fn test_errors_release_the_claim() {
        let mut cache = cache();
        assert!(plan_load(&mut cache, &1, true, 0).fetch);
        let err = CatalogError::Http { status: 500 };
        assert_eq!(settle(&mut cache, 1, Err(err.clone()), true, 10), Settled::Failed(err));
        assert!(plan_load(&mut cache, &1, true, 20).fetch);

        let err = CatalogError::Decode("expected value".into());
        assert_eq!(settle(&mut cache, 1, Err(err.clone()), true, 30), Settled::Fault(err));
        assert!(plan_load(&mut cache, &1, true, 40).fetch);

        let err = CatalogError::Network("offline".into());
        assert_eq!(settle(&mut cache, 1, Err(err), false, 50), Settled::<&str>::Superseded);
        assert_eq!(plan_load(&mut cache, &1, true, 60), LoadPlan { show: None, fetch: true });
    }

    #[test]
    fn test_failed_page_reports_no_page_count() {
        let mut filters = Filters::from_query_string("page=5");
        let key = filters.fetch_key();

        let stand_in = LoadedPage::failed(key);
        assert!(stand_in.page.is_empty());
        assert_eq!(stand_in.reported_pages(), None);

        // A 404 is a real answer: zero pages, so page 5 is out of range
        let not_found = LoadedPage::new(key, CharactersPage::empty());
        let pages = not_found.reported_pages();
        assert_eq!(pages, Some(0));
        assert!(filters.correct_page(pages.unwrap_or_default()));
        assert_eq!(filters.page(), 1);
    }
}
