use crate::tmdb::models::Movie;
use dioxus::prelude::*;

/// Detail overlay for one selected movie. Clicking the backdrop or the
/// close button dismisses; clicks inside the panel stay inside.
#[component]
pub fn MovieModal(movie: Movie, on_close: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "fixed inset-0 bg-black/70 flex items-center justify-center z-[1000]",
            onclick: move |_| on_close.call(()),
            div {
                class: "bg-gray-800 rounded-lg max-w-2xl w-full mx-4 overflow-hidden",
                onclick: move |evt| evt.stop_propagation(),
                if let Some(backdrop) = movie.backdrop_url() {
                    img {
                        class: "w-full h-64 object-cover",
                        src: "{backdrop}",
                        alt: "{movie.title}"
                    }
                }
                div { class: "p-6",
                    div { class: "flex items-start justify-between gap-4 mb-4",
                        h2 { class: "text-2xl font-bold text-white", "{movie.title}" }
                        button {
                            class: "text-gray-400 hover:text-gray-200 text-xl",
                            onclick: move |_| on_close.call(()),
                            "✕"
                        }
                    }
                    if !movie.overview.is_empty() {
                        p { class: "text-gray-300 mb-4", "{movie.overview}" }
                    }
                    if let Some(date) = movie.release_date.as_deref().filter(|d| !d.is_empty()) {
                        p { class: "text-sm text-gray-400", "Release date: {date}" }
                    }
                    p { class: "text-sm text-gray-400", "Rating: {movie.vote_average:.1}/10" }
                }
            }
        }
    }
}
