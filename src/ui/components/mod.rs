pub mod error_message;
pub mod loader;
pub mod movie_card;
pub mod movie_grid;
pub mod movie_modal;
pub mod pagination;
pub mod search_bar;

pub use error_message::ErrorMessage;
pub use loader::Loader;
pub use movie_card::MovieCard;
pub use movie_grid::MovieGrid;
pub use movie_modal::MovieModal;
pub use pagination::Pagination;
pub use search_bar::SearchBar;
