use crate::tmdb::models::Movie;
use crate::ui::components::movie_card::MovieCard;
use dioxus::prelude::*;

/// Pure rendering: an ordered result list mapped to clickable cards
#[component]
pub fn MovieGrid(movies: Vec<Movie>, on_select: EventHandler<Movie>) -> Element {
    rsx! {
        div { class: "grid grid-cols-2 sm:grid-cols-3 md:grid-cols-4 lg:grid-cols-5 gap-4",
            for movie in movies.iter() {
                MovieCard {
                    key: "{movie.id}",
                    movie: movie.clone(),
                    on_select: on_select
                }
            }
        }
    }
}
