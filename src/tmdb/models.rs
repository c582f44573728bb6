use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Base URL for TMDB poster and backdrop images
const IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p";

/// A single movie as returned by the TMDB search API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Movie {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub overview: String,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    /// ISO date (`YYYY-MM-DD`); the API sometimes sends an empty string
    pub release_date: Option<String>,
    #[serde(default)]
    pub vote_average: f64,
}

impl Movie {
    /// Grid-sized poster URL, if the API provided a poster
    pub fn poster_url(&self) -> Option<String> {
        self.poster_path
            .as_ref()
            .map(|path| format!("{}/w500{}", IMAGE_BASE_URL, path))
    }

    /// Full-size backdrop URL for the detail view
    pub fn backdrop_url(&self) -> Option<String> {
        self.backdrop_path
            .as_ref()
            .map(|path| format!("{}/original{}", IMAGE_BASE_URL, path))
    }

    /// Release year parsed out of the API date, if it is present and well-formed
    pub fn release_year(&self) -> Option<i32> {
        let date = self.release_date.as_deref()?;
        NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .ok()
            .map(|d| d.year())
    }
}

/// One page of search results from `/search/movie`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchResponse {
    pub page: u32,
    pub total_pages: u32,
    #[serde(default)]
    pub total_results: u32,
    pub results: Vec<Movie>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_search_response() {
        let json = r#"{
            "page": 1,
            "total_pages": 42,
            "total_results": 823,
            "results": [
                {
                    "id": 155,
                    "title": "The Dark Knight",
                    "overview": "Batman raises the stakes in his war on crime.",
                    "poster_path": "/qJ2tW6WMUDux911r6m7haRef0WH.jpg",
                    "backdrop_path": "/hkBaDkMWbLaf8B1lsWsKX7Ew3Xq.jpg",
                    "release_date": "2008-07-16",
                    "vote_average": 8.5
                }
            ]
        }"#;

        let response: SearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.page, 1);
        assert_eq!(response.total_pages, 42);
        assert_eq!(response.total_results, 823);
        assert_eq!(response.results.len(), 1);

        let movie = &response.results[0];
        assert_eq!(movie.id, 155);
        assert_eq!(movie.title, "The Dark Knight");
        assert_eq!(movie.release_year(), Some(2008));
    }

    #[test]
    fn tolerates_missing_optional_fields() {
        // Obscure titles come back without posters, dates or overviews
        let json = r#"{
            "page": 1,
            "total_pages": 1,
            "results": [{"id": 9, "title": "Unreleased"}]
        }"#;

        let response: SearchResponse = serde_json::from_str(json).unwrap();
        let movie = &response.results[0];
        assert_eq!(movie.overview, "");
        assert_eq!(movie.poster_path, None);
        assert_eq!(movie.poster_url(), None);
        assert_eq!(movie.release_year(), None);
        assert_eq!(movie.vote_average, 0.0);
    }

    #[test]
    fn image_urls_use_tmdb_sizes() {
        let movie = Movie {
            id: 155,
            title: "The Dark Knight".to_string(),
            overview: String::new(),
            poster_path: Some("/qJ2tW6WMUDux911r6m7haRef0WH.jpg".to_string()),
            backdrop_path: Some("/hkBaDkMWbLaf8B1lsWsKX7Ew3Xq.jpg".to_string()),
            release_date: None,
            vote_average: 8.5,
        };

        assert_eq!(
            movie.poster_url().unwrap(),
            "https://image.tmdb.org/t/p/w500/qJ2tW6WMUDux911r6m7haRef0WH.jpg"
        );
        assert_eq!(
            movie.backdrop_url().unwrap(),
            "https://image.tmdb.org/t/p/original/hkBaDkMWbLaf8B1lsWsKX7Ew3Xq.jpg"
        );
    }

    #[test]
    fn empty_release_date_yields_no_year() {
        let json = r#"{"id": 7, "title": "Mystery", "release_date": ""}"#;
        let movie: Movie = serde_json::from_str(json).unwrap();
        assert_eq!(movie.release_year(), None);
    }
}
