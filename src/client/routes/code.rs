use dioxus::prelude::*;

use crate::client::{components::Page, router::View};

#[component]
pub fn UserCodes() -> Element {
    rsx!(
        Page { view: View::UserCodes, heading: "My codes",
            p { class: "opacity-70",
                "Codes issued to your account will show up here."
            }
        }
    )
}
