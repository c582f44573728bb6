use crate::tmdb::models::SearchResponse;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tracing::debug;

/// Default time a cached search response stays fresh
pub const DEFAULT_STALENESS_WINDOW: Duration = Duration::from_secs(5 * 60);

/// Cache key: a search request is identified by its query text and page
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SearchKey {
    pub query: String,
    pub page: u32,
}

impl SearchKey {
    pub fn new(query: impl Into<String>, page: u32) -> Self {
        Self {
            query: query.into(),
            page,
        }
    }
}

struct CacheEntry {
    response: SearchResponse,
    fetched_at: Instant,
}

/// In-memory cache of search responses keyed by (query, page).
///
/// Entries are fresh for the configured staleness window; a stale entry
/// behaves like a miss and is dropped on access.
pub struct SearchCache {
    entries: HashMap<SearchKey, CacheEntry>,
    staleness_window: Duration,
}

impl Default for SearchCache {
    fn default() -> Self {
        Self::new(DEFAULT_STALENESS_WINDOW)
    }
}

impl SearchCache {
    pub fn new(staleness_window: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            staleness_window,
        }
    }

    /// Look up a fresh response for `key`. Expired entries are removed.
    pub fn get(&mut self, key: &SearchKey) -> Option<SearchResponse> {
        let fresh = match self.entries.get(key) {
            Some(entry) => entry.fetched_at.elapsed() < self.staleness_window,
            None => return None,
        };

        if fresh {
            debug!("Cache hit for '{}' page {}", key.query, key.page);
            self.entries.get(key).map(|entry| entry.response.clone())
        } else {
            debug!("Cache entry expired for '{}' page {}", key.query, key.page);
            self.entries.remove(key);
            None
        }
    }

    pub fn insert(&mut self, key: SearchKey, response: SearchResponse) {
        self.entries.insert(
            key,
            CacheEntry {
                response,
                fetched_at: Instant::now(),
            },
        );
    }

    /// Drop every expired entry. Freshness is already enforced on access;
    /// this just keeps the map from accumulating dead searches.
    pub fn evict_expired(&mut self) {
        self.entries
            .retain(|_, entry| entry.fetched_at.elapsed() < self.staleness_window);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
