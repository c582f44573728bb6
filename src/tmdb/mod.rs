pub mod client;
pub mod models;

pub use client::{TmdbClient, TmdbError, DEFAULT_BASE_URL};
pub use models::{Movie, SearchResponse};
