//! Character Query Binding
//!
//! Connects the filter-derived key to the API through a [`QueryCache`]:
//! fresh pages are served from memory, stale ones are shown and refreshed
//! in the background, and while a new key loads the previous page stays on
//! screen. Responses for a key that is no longer current only fill the cache.

use catalog_core::{
    plan_load, settle, CachePolicy, CatalogConfig, CatalogError, CharacterQuery, CharactersPage,
    LoadedPage, QueryCache, Settled,
};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::notifications::Notifications;

type PageCache = QueryCache<CharacterQuery, CharactersPage>;

#[derive(Clone, Copy)]
pub struct CharactersResource {
    /// Last page shown; may belong to an older key while a new one loads
    pub data: ReadSignal<Option<LoadedPage>>,
    set_data: WriteSignal<Option<LoadedPage>>,
    /// Broken response payload, rendered through the error boundary
    pub fault: ReadSignal<Option<CatalogError>>,
    set_fault: WriteSignal<Option<CatalogError>>,
    key: Memo<CharacterQuery>,
    enabled: Signal<bool>,
    refresh: RwSignal<u32>,
    cache: StoredValue<PageCache>,
    base_url: StoredValue<String>,
    notifications: Notifications,
}

impl CharactersResource {
    /// True while the displayed page belongs to a different key (tracked)
    pub fn is_placeholder(&self) -> bool {
        let key = self.key.get();
        self.data
            .with(|data| data.as_ref().is_some_and(|loaded| loaded.key != key))
    }

    /// Data for the current key only, never the placeholder (tracked)
    pub fn current(&self) -> Option<LoadedPage> {
        let key = self.key.get();
        self.data
            .with(|data| data.as_ref().filter(|loaded| loaded.key == key).cloned())
    }

    /// The request for the current key failed and an empty stand-in is shown (tracked)
    pub fn has_failed(&self) -> bool {
        self.current().is_some_and(|loaded| loaded.failed)
    }

    /// Drop cached freshness and load the current key again
    pub fn refetch(&self) {
        tracing::info!("[QUERY] refetch requested");
        self.cache.update_value(|cache| cache.invalidate_all());
        self.set_fault.set(None);
        self.refresh.update(|n| *n += 1);
    }

    fn apply(&self, loaded: LoadedPage) {
        self.set_fault.set(None);
        self.set_data.set(Some(loaded));
    }

    fn is_current(&self, key: &CharacterQuery) -> bool {
        self.enabled.get_untracked() && self.key.get_untracked() == *key
    }

    fn fetch(self, key: CharacterQuery) {
        spawn_local(async move {
            let base_url = self.base_url.get_value();
            let result = api::get_characters(&base_url, &key).await;
            if let Err(err) = &result {
                tracing::error!(?key, %err, "[QUERY] error fetching characters");
            }

            let is_current = self.is_current(&key);
            let now = now_ms();
            let mut settled = Settled::Superseded;
            self.cache
                .update_value(|cache| settled = settle(cache, key, result, is_current, now));

            match settled {
                Settled::Show(page) => {
                    tracing::info!(?key, count = page.results.len(), "[QUERY] loaded characters");
                    self.apply(LoadedPage::new(key, page));
                }
                Settled::Failed(err) => {
                    self.notifications
                        .error("Could not load characters", err.to_string());
                    self.apply(LoadedPage::failed(key));
                }
                Settled::Fault(err) => self.set_fault.set(Some(err)),
                Settled::Superseded => {
                    tracing::debug!(?key, "[QUERY] response for a previous key cached");
                }
            }
        });
    }
}

/// Bind the character list to `key`. Nothing is requested while `enabled`
/// is false (favorites-only mode). There is no refetch on window focus.
pub fn use_characters(
    key: Memo<CharacterQuery>,
    enabled: Signal<bool>,
    config: &CatalogConfig,
    notifications: Notifications,
) -> CharactersResource {
    let (data, set_data) = signal(None::<LoadedPage>);
    let (fault, set_fault) = signal(None::<CatalogError>);

    let resource = CharactersResource {
        data,
        set_data,
        fault,
        set_fault,
        key,
        enabled,
        refresh: RwSignal::new(0),
        cache: StoredValue::new(PageCache::new(CachePolicy::from(config))),
        base_url: StoredValue::new(config.api_base_url.clone()),
        notifications,
    };

    Effect::new(move |_| {
        let _ = resource.refresh.get();
        let enabled = enabled.get();
        let key = key.get();

        let mut plan = None;
        resource
            .cache
            .update_value(|cache| plan = Some(plan_load(cache, &key, enabled, now_ms())));
        let Some(plan) = plan else { return };

        // Without a cached value the previous page stays visible as placeholder
        if let Some(page) = plan.show {
            resource.apply(LoadedPage::new(key, page));
        }
        if plan.fetch {
            tracing::debug!(?key, "[QUERY] fetching");
            resource.fetch(key);
        }
    });

    resource
}

fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}
