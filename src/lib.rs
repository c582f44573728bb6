// Library exports for unit tests and reusable components

pub mod config;
pub mod search_cache;
pub mod tmdb;

#[doc(hidden)]
pub mod ui;
