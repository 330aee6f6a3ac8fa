use dioxus::prelude::*;

use crate::client::{components::Page, router::View};

#[component]
pub fn Tracking() -> Element {
    rsx!(
        Page { view: View::Tracking, heading: "Tracking",
            p { class: "opacity-70",
                "Shipments for your orders will show up here once they leave the warehouse."
            }
        }
    )
}
