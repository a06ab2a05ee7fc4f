//! Query Cache
//!
//! Keyed result cache with a staleness window, idle eviction and an
//! in-flight set so that each key has at most one outstanding request.
//! Time is passed in as milliseconds so the cache works the same on the
//! host and in the browser.

use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

use crate::config::CatalogConfig;

/// Freshness policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CachePolicy {
    pub stale_after_ms: u64,
    pub gc_after_ms: u64,
}

impl From<&CatalogConfig> for CachePolicy {
    fn from(config: &CatalogConfig) -> Self {
        Self {
            stale_after_ms: config.stale_after_ms,
            gc_after_ms: config.gc_after_ms,
        }
    }
}

/// Result of a cache read
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup<V> {
    /// Within the staleness window
    Fresh(V),
    /// Usable, but should be refreshed in the background
    Stale(V),
    Missing,
}

#[derive(Debug, Clone)]
struct Entry<V> {
    value: V,
    fetched_at: u64,
    last_read: u64,
    invalidated: bool,
}

#[derive(Debug, Clone)]
pub struct QueryCache<K, V> {
    policy: CachePolicy,
    entries: HashMap<K, Entry<V>>,
    in_flight: HashSet<K>,
}

impl<K, V> QueryCache<K, V>
where
    K: Eq + Hash + Clone + Debug,
    V: Clone,
{
    pub fn new(policy: CachePolicy) -> Self {
        Self {
            policy,
            entries: HashMap::new(),
            in_flight: HashSet::new(),
        }
    }

    /// Read an entry and mark it as used
    pub fn lookup(&mut self, key: &K, now: u64) -> Lookup<V> {
        let stale_after = self.policy.stale_after_ms;
        match self.entries.get_mut(key) {
            Some(entry) => {
                entry.last_read = now;
                if entry.invalidated || now.saturating_sub(entry.fetched_at) >= stale_after {
                    Lookup::Stale(entry.value.clone())
                } else {
                    Lookup::Fresh(entry.value.clone())
                }
            }
            None => Lookup::Missing,
        }
    }

    /// Claim the right to fetch `key`. False if a request is already out.
    pub fn begin_fetch(&mut self, key: &K) -> bool {
        let claimed = self.in_flight.insert(key.clone());
        if !claimed {
            tracing::debug!(?key, "request already in flight");
        }
        claimed
    }

    /// Record a successful response and release the in-flight claim
    pub fn store(&mut self, key: K, value: V, now: u64) {
        self.in_flight.remove(&key);
        self.entries.insert(
            key,
            Entry {
                value,
                fetched_at: now,
                last_read: now,
                invalidated: false,
            },
        );
    }

    /// Release the in-flight claim without caching anything (failed request)
    pub fn abandon(&mut self, key: &K) {
        self.in_flight.remove(key);
    }

    /// Mark every entry stale so the next lookup refreshes it
    pub fn invalidate_all(&mut self) {
        for entry in self.entries.values_mut() {
            entry.invalidated = true;
        }
    }

    /// Drop entries not read within the GC window. Returns how many went.
    pub fn collect_garbage(&mut self, now: u64) -> usize {
        let gc_after = self.policy.gc_after_ms;
        let before = self.entries.len();
        self.entries
            .retain(|_, entry| now.saturating_sub(entry.last_read) < gc_after);
        let evicted = before - self.entries.len();
        if evicted > 0 {
            tracing::debug!(evicted, "evicted idle cache entries");
        }
        evicted
    }
}
