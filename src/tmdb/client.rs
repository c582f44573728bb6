use crate::tmdb::models::SearchResponse;
use reqwest::{Client, Error as ReqwestError, StatusCode};
use std::collections::HashMap;
use thiserror::Error;
use tracing::{debug, error};

#[derive(Error, Debug)]
pub enum TmdbError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] ReqwestError),
    #[error("API rate limit exceeded")]
    RateLimit,
    #[error("Invalid API token")]
    InvalidApiToken,
    #[error("Unexpected API response status: {0}")]
    Api(StatusCode),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";

#[derive(Clone)]
pub struct TmdbClient {
    client: Client,
    api_token: String,
    base_url: String,
}

impl TmdbClient {
    pub fn new(api_token: String) -> Self {
        Self::with_base_url(api_token, DEFAULT_BASE_URL.to_string())
    }

    /// Base URL override for tests pointing at a local server
    pub fn with_base_url(api_token: String, base_url: String) -> Self {
        Self {
            client: Client::new(),
            api_token,
            base_url,
        }
    }

    /// Search for movies matching `query`, one page at a time.
    ///
    /// Issues exactly one GET; failures are terminal, callers decide
    /// whether to re-submit.
    pub async fn search_movies(
        &self,
        query: &str,
        page: u32,
    ) -> Result<SearchResponse, TmdbError> {
        if query.trim().is_empty() {
            return Err(TmdbError::InvalidInput("empty search query".to_string()));
        }
        if page == 0 {
            return Err(TmdbError::InvalidInput(
                "page numbers start at 1".to_string(),
            ));
        }

        let url = format!("{}/search/movie", self.base_url);
        let page_param = page.to_string();

        let mut params = HashMap::new();
        params.insert("query", query);
        params.insert("page", page_param.as_str());

        debug!("Searching TMDB: query='{}', page={}", query, page);

        let response = self
            .client
            .get(&url)
            .query(&params)
            .bearer_auth(&self.api_token)
            .header("accept", "application/json")
            .send()
            .await?;

        if response.status().is_success() {
            Ok(response.json::<SearchResponse>().await?)
        } else {
            let status = response.status();
            error!("TMDB search failed with status {}", status);
            Err(error_for_status(status))
        }
    }
}

/// Map a non-success HTTP status onto the error taxonomy
fn error_for_status(status: StatusCode) -> TmdbError {
    match status {
        StatusCode::UNAUTHORIZED => TmdbError::InvalidApiToken,
        StatusCode::TOO_MANY_REQUESTS => TmdbError::RateLimit,
        status => TmdbError::Api(status),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn rejects_empty_query_without_io() {
        let client = TmdbClient::with_base_url(
            "token".to_string(),
            // Unroutable: the guard must fire before any request is built
            "http://127.0.0.1:0".to_string(),
        );

        let err = client.search_movies("   ", 1).await.unwrap_err();
        assert!(matches!(err, TmdbError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn rejects_page_zero_without_io() {
        let client =
            TmdbClient::with_base_url("token".to_string(), "http://127.0.0.1:0".to_string());

        let err = client.search_movies("batman", 0).await.unwrap_err();
        assert!(matches!(err, TmdbError::InvalidInput(_)));
    }

    #[test]
    fn maps_auth_and_rate_limit_statuses() {
        assert!(matches!(
            error_for_status(StatusCode::UNAUTHORIZED),
            TmdbError::InvalidApiToken
        ));
        assert!(matches!(
            error_for_status(StatusCode::TOO_MANY_REQUESTS),
            TmdbError::RateLimit
        ));
        assert!(matches!(
            error_for_status(StatusCode::INTERNAL_SERVER_ERROR),
            TmdbError::Api(StatusCode::INTERNAL_SERVER_ERROR)
        ));
    }
}
