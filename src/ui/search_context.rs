use crate::config::Config;
use crate::search_cache::{SearchCache, SearchKey};
use crate::tmdb::client::TmdbClient;
use crate::tmdb::models::{Movie, SearchResponse};
use crate::ui::toast::ToastContext;
use dioxus::prelude::*;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use tracing::{debug, error, info};

/// Fetch status for the current (query, page) key
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SearchStatus {
    Idle,
    Loading,
    Success,
    Error,
}

/// Root coordinator: owns query text, current page, fetch status and the
/// selected movie, and drives the TMDB client through the keyed cache.
#[derive(Clone)]
pub struct SearchContext {
    pub query: Signal<String>,
    pub page: Signal<u32>,
    pub status: Signal<SearchStatus>,
    pub response: Signal<Option<SearchResponse>>,
    pub selected: Signal<Option<Movie>>,
    client: Option<TmdbClient>,
    cache: Rc<RefCell<SearchCache>>,
    /// Monotonic fetch counter; a resolving fetch whose epoch is no longer
    /// current was superseded and must not touch any state.
    epoch: Rc<Cell<u64>>,
    /// Last (query, page) we raised the zero-result notification for
    last_notified: Rc<RefCell<Option<SearchKey>>>,
    toasts: ToastContext,
}

impl SearchContext {
    /// Submit a new search. The page always resets to 1.
    pub fn submit_query(&mut self, raw: String) {
        let Some(query) = normalize_query(&raw) else {
            self.toasts.error("Please enter your search query.");
            return;
        };

        info!("Submitting search: '{}'", query);
        self.query.set(query.clone());
        self.page.set(1);
        *self.last_notified.borrow_mut() = None;
        self.load(query, 1);
    }

    /// Jump to a page of the current query
    pub fn set_page(&mut self, page: u32) {
        let query = self.query.read().clone();
        if query.is_empty() {
            return;
        }

        let total_pages = self.response.read().as_ref().map(|r| r.total_pages);
        if !page_in_bounds(page, total_pages) {
            debug!("Ignoring out-of-bounds page {}", page);
            return;
        }
        if page == *self.page.read() {
            return;
        }

        self.page.set(page);
        self.load(query, page);
    }

    pub fn select(&mut self, movie: Movie) {
        self.selected.set(Some(movie));
    }

    pub fn clear_selection(&mut self) {
        self.selected.set(None);
    }

    /// Serve `(query, page)` from the cache when fresh, otherwise fetch.
    fn load(&mut self, query: String, page: u32) {
        let key = SearchKey::new(query, page);

        // Every load supersedes whatever fetch may still be in flight,
        // including loads answered from the cache.
        let epoch = self.epoch.get() + 1;
        self.epoch.set(epoch);

        if let Some(cached) = self.cache.borrow_mut().get(&key) {
            self.apply_response(&key, cached);
            return;
        }

        let Some(client) = self.client.clone() else {
            error!("Search requested but no TMDB API token is configured");
            self.response.set(None);
            self.status.set(SearchStatus::Error);
            return;
        };

        self.status.set(SearchStatus::Loading);

        let mut this = self.clone();
        spawn(async move {
            let result = client.search_movies(&key.query, key.page).await;

            // A newer submit or page change superseded this fetch while it
            // was in flight; its result must not overwrite current state.
            if this.epoch.get() != epoch {
                debug!(
                    "Discarding superseded response for '{}' page {}",
                    key.query, key.page
                );
                return;
            }

            match result {
                Ok(response) => {
                    this.cache.borrow_mut().insert(key.clone(), response.clone());
                    this.apply_response(&key, response);
                }
                Err(e) => {
                    error!("Search failed for '{}' page {}: {}", key.query, key.page, e);
                    this.response.set(None);
                    this.status.set(SearchStatus::Error);
                }
            }
        });
    }

    fn apply_response(&mut self, key: &SearchKey, response: SearchResponse) {
        let empty = response.results.is_empty();
        self.response.set(Some(response));
        self.status.set(SearchStatus::Success);

        if empty {
            let mut last_notified = self.last_notified.borrow_mut();
            if should_notify_empty(&last_notified, key) {
                self.toasts.error("No movies found for your request.");
                *last_notified = Some(key.clone());
            }
        }
    }
}

/// Trim a raw submission; whitespace-only input is not a query
fn normalize_query(raw: &str) -> Option<String> {
    let query = raw.trim();
    if query.is_empty() {
        None
    } else {
        Some(query.to_string())
    }
}

/// Pages are 1-based and bounded by the last known total page count.
/// Before any response arrives there is no known bound.
fn page_in_bounds(page: u32, total_pages: Option<u32>) -> bool {
    if page < 1 {
        return false;
    }
    match total_pages {
        Some(total) => page <= total,
        None => true,
    }
}

/// The zero-result notification fires once per (query, page) data change,
/// not on every re-render of the same data.
fn should_notify_empty(last_notified: &Option<SearchKey>, key: &SearchKey) -> bool {
    last_notified.as_ref() != Some(key)
}

/// Provider component making the search coordinator available to the tree
#[component]
pub fn SearchContextProvider(children: Element) -> Element {
    let config = use_context::<Config>();
    let toasts = use_context::<ToastContext>();

    let client = config.api_token.clone().map(TmdbClient::new);
    let cache = use_hook(|| Rc::new(RefCell::new(SearchCache::new(config.staleness_window))));
    let epoch = use_hook(|| Rc::new(Cell::new(0u64)));
    let last_notified = use_hook(|| Rc::new(RefCell::new(None)));

    let ctx = SearchContext {
        query: use_signal(String::new),
        page: use_signal(|| 1),
        status: use_signal(|| SearchStatus::Idle),
        response: use_signal(|| None),
        selected: use_signal(|| None),
        client,
        cache,
        epoch,
        last_notified,
        toasts,
    };

    use_context_provider(move || ctx);

    rsx! {
        {children}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_queries_do_not_normalize() {
        assert_eq!(normalize_query(""), None);
        assert_eq!(normalize_query("   \t  "), None);
        assert_eq!(normalize_query("  batman  "), Some("batman".to_string()));
    }

    #[test]
    fn page_bounds_follow_last_known_total() {
        // No response yet: any positive page may be requested
        assert!(page_in_bounds(3, None));
        assert!(!page_in_bounds(0, None));

        assert!(page_in_bounds(1, Some(5)));
        assert!(page_in_bounds(5, Some(5)));
        assert!(!page_in_bounds(6, Some(5)));
        assert!(!page_in_bounds(0, Some(5)));
    }

    #[test]
    fn empty_result_notification_fires_once_per_key() {
        let mut last_notified = None;
        let key = SearchKey::new("zzzzzz", 1);

        assert!(should_notify_empty(&last_notified, &key));
        last_notified = Some(key.clone());

        // Same data re-applied (cache hit, re-render): stay quiet
        assert!(!should_notify_empty(&last_notified, &key));

        // A different key notifies again
        let other = SearchKey::new("zzzzzz", 2);
        assert!(should_notify_empty(&last_notified, &other));
    }
}
