use dioxus::prelude::*;

#[component]
pub fn ErrorAlert(message: String) -> Element {
    rsx!(
        div { role: "alert", class: "alert alert-error",
            span { "{message}" }
        }
    )
}
