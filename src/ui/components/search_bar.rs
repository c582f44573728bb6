use crate::ui::search_context::SearchContext;
use crate::ui::toast::use_toasts;
use dioxus::prelude::*;

/// Header bar: attribution link plus the search form.
///
/// Submission only happens on Enter or the button, never as-you-type.
#[component]
pub fn SearchBar() -> Element {
    let search_ctx = use_context::<SearchContext>();
    let toasts = use_toasts();
    let mut draft = use_signal(String::new);

    let submit = {
        let mut search_ctx = search_ctx.clone();
        move || {
            let query = draft.read().trim().to_string();
            if query.is_empty() {
                toasts.error("Please enter your search query.");
                return;
            }
            search_ctx.submit_query(query);
            draft.set(String::new());
        }
    };

    rsx! {
        header { class: "bg-gray-900 border-b border-gray-800",
            div { class: "container mx-auto px-6 py-4 flex items-center gap-6",
                a {
                    class: "text-sm text-gray-400 hover:text-gray-200 whitespace-nowrap",
                    href: "https://www.themoviedb.org/",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    "Powered by TMDB"
                }
                div { class: "flex gap-2 flex-1 max-w-xl ml-auto",
                    input {
                        class: "flex-1 p-3 border border-gray-700 bg-gray-800 text-gray-100 rounded-lg text-lg",
                        r#type: "text",
                        name: "query",
                        placeholder: "Search movies...",
                        autocomplete: "off",
                        autofocus: true,
                        value: "{draft}",
                        oninput: move |event: FormEvent| {
                            draft.set(event.value());
                        },
                        onkeydown: {
                            let mut submit = submit.clone();
                            move |event: KeyboardEvent| {
                                if event.key() == Key::Enter {
                                    submit();
                                }
                            }
                        }
                    }
                    button {
                        class: "px-6 py-3 bg-blue-600 text-white rounded-lg hover:bg-blue-700 font-medium",
                        onclick: {
                            let mut submit = submit.clone();
                            move |_| submit()
                        },
                        "Search"
                    }
                }
            }
        }
    }
}
