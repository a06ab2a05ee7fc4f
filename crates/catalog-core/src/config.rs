//! Catalog Configuration
//!
//! Tunables for the explorer. The API base URL can be overridden at build
//! time with `CATALOG_API_BASE_URL`.

/// Public character API
pub const DEFAULT_API_BASE_URL: &str = "https://rickandmortyapi.com/api";

const MINUTE_MS: u64 = 60 * 1000;

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogConfig {
    /// Base URL without trailing slash; `/character` is appended
    pub api_base_url: String,
    /// Age after which a cached page is refreshed in the background
    pub stale_after_ms: u64,
    /// Idle time after which a cached page is evicted
    pub gc_after_ms: u64,
    /// Toast auto-dismiss delay
    pub toast_duration_ms: u32,
    /// How long the "page reset" banner stays visible
    pub banner_duration_ms: u32,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            api_base_url: option_env!("CATALOG_API_BASE_URL")
                .unwrap_or(DEFAULT_API_BASE_URL)
                .trim_end_matches('/')
                .to_string(),
            stale_after_ms: 5 * MINUTE_MS,
            gc_after_ms: 30 * MINUTE_MS,
            toast_duration_ms: 5000,
            banner_duration_ms: 3000,
        }
    }
}
