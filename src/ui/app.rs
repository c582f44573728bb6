use dioxus::desktop::{Config as DioxusConfig, WindowBuilder};
use dioxus::prelude::*;

use crate::config::Config;
use crate::ui::components::{ErrorMessage, Loader, MovieGrid, MovieModal, Pagination, SearchBar};
use crate::ui::search_context::{SearchContext, SearchContextProvider, SearchStatus};
use crate::ui::toast::ToastProvider;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");
pub const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Search {},
}

pub fn make_config() -> DioxusConfig {
    DioxusConfig::default().with_window(make_window())
}

fn make_window() -> WindowBuilder {
    WindowBuilder::new()
        .with_title("marquee")
        .with_inner_size(dioxus::desktop::LogicalSize::new(1200, 800))
}

#[component]
pub fn App() -> Element {
    let config = use_hook(Config::load);
    use_context_provider(|| config);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        ToastProvider {
            SearchContextProvider {
                Router::<Route> {}
            }
        }
    }
}

/// The search page: form on top, then whichever of loader, error banner,
/// grid and pagination the current fetch status calls for.
#[component]
pub fn Search() -> Element {
    let search_ctx = use_context::<SearchContext>();

    let status = *search_ctx.status.read();
    let response = search_ctx.response.read().clone();
    let selected = search_ctx.selected.read().clone();
    let page = *search_ctx.page.read();

    rsx! {
        div { class: "min-h-screen bg-gray-900 text-gray-100",
            SearchBar {}
            main { class: "container mx-auto px-6 py-6",
                // While a page change is in flight the previous results stay
                // up; the spinner only shows when there is nothing to render.
                if status == SearchStatus::Loading && response.is_none() {
                    Loader {}
                }
                if status == SearchStatus::Error {
                    ErrorMessage {}
                }
                if let Some(data) = response.as_ref().filter(|r| !r.results.is_empty()) {
                    MovieGrid {
                        movies: data.results.clone(),
                        on_select: {
                            let mut ctx = search_ctx.clone();
                            move |movie| ctx.select(movie)
                        }
                    }
                    if data.total_pages > 1 {
                        Pagination {
                            current: page,
                            total: data.total_pages,
                            on_select: {
                                let mut ctx = search_ctx.clone();
                                move |p| ctx.set_page(p)
                            }
                        }
                    }
                }
            }
            if let Some(movie) = selected {
                MovieModal {
                    movie,
                    on_close: {
                        let mut ctx = search_ctx.clone();
                        move |_| ctx.clear_selection()
                    }
                }
            }
        }
    }
}
