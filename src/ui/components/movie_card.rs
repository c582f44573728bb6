use crate::tmdb::models::Movie;
use dioxus::prelude::*;

#[component]
pub fn MovieCard(movie: Movie, on_select: EventHandler<Movie>) -> Element {
    rsx! {
        div {
            class: "bg-gray-800 rounded-lg shadow-lg overflow-hidden cursor-pointer hover:ring-2 hover:ring-blue-500",
            onclick: {
                let movie = movie.clone();
                move |_| on_select.call(movie.clone())
            },
            if let Some(poster) = movie.poster_url() {
                img {
                    class: "w-full aspect-[2/3] object-cover",
                    src: "{poster}",
                    alt: "{movie.title} poster"
                }
            } else {
                div {
                    class: "w-full aspect-[2/3] bg-gray-700 flex items-center justify-center text-gray-400",
                    "No poster"
                }
            }
            div { class: "p-3",
                p { class: "text-sm font-medium text-gray-100 truncate", "{movie.title}" }
                if let Some(year) = movie.release_year() {
                    p { class: "text-xs text-gray-400", "{year}" }
                }
            }
        }
    }
}
