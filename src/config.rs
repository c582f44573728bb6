use crate::search_cache::DEFAULT_STALENESS_WINDOW;
use std::time::Duration;
use tracing::warn;

/// Application configuration.
/// In debug builds a .env file is loaded first, so the TMDB token can
/// live alongside a dev checkout instead of the shell environment.
#[derive(Clone, Debug)]
pub struct Config {
    /// Bearer token for the TMDB API
    pub api_token: Option<String>,
    /// How long a cached search response stays fresh
    pub staleness_window: Duration,
}

impl Config {
    pub fn load() -> Self {
        #[cfg(debug_assertions)]
        {
            if dotenvy::dotenv().is_ok() {
                tracing::info!("Config: loaded .env file");
            }
        }

        Self::from_env()
    }

    fn from_env() -> Self {
        let api_token = std::env::var("MARQUEE_TMDB_TOKEN")
            .or_else(|_| std::env::var("TMDB_API_TOKEN"))
            .ok()
            .filter(|token| !token.trim().is_empty());

        if api_token.is_none() {
            warn!("Config: no TMDB API token set, searches will fail until one is provided");
        }

        let staleness_window = std::env::var("MARQUEE_STALE_SECS")
            .ok()
            .and_then(|value| value.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_STALENESS_WINDOW);

        Self {
            api_token,
            staleness_window,
        }
    }
}
