use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::router::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    tracing::debug!(%path, "No route for path");

    rsx!(
        Title { "Not found | Palm" }
        div { class: "min-h-screen flex flex-col items-center justify-center gap-4",
            p { class: "text-2xl", "Page not found" }
            p { class: "opacity-70", "{path}" }
            Link { to: Route::Index {}, class: "btn btn-primary",
                "Back to dashboard"
            }
        }
    )
}
