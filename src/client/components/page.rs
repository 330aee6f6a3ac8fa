use dioxus::document::Title;
use dioxus::prelude::*;

use crate::client::router::View;

/// Content frame for a routed page. Sets the document title from the page's view.
#[component]
pub fn Page(
    view: View,
    heading: &'static str,
    class: Option<&'static str>,
    children: Element,
) -> Element {
    let class: &str = class.unwrap_or_default();

    rsx!(
        Title { "{view.title()}" }
        div {
            class: "w-full max-w-[1440px] mx-auto p-6 flex flex-col gap-4 {class}",
            h1 { class: "text-2xl font-semibold",
                "{heading}"
            }
            {children}
        }
    )
}
