use dioxus::prelude::*;
use dioxus_router::Link;

use crate::routes::Route;

#[component]
pub fn NotFoundView(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    rsx! {
        div { class: "page not-found",
            h2 { class: "view-title", "Page not found" }
            p { "Nothing lives at {path}." }
            Link { class: "btn btn-primary", to: Route::Home {}, "Back to Home" }
        }
    }
}
