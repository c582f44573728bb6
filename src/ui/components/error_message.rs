use dioxus::prelude::*;

/// Static error banner; request failures carry no detail to the user
#[component]
pub fn ErrorMessage() -> Element {
    rsx! {
        div { class: "bg-red-900 border border-red-700 text-red-100 px-4 py-3 rounded my-6 text-center",
            p { "There was an error, please try again..." }
        }
    }
}
