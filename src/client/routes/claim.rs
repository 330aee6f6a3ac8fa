use dioxus::prelude::*;

use crate::client::{
    components::Page,
    router::{Route, View},
};

#[component]
pub fn HistoryClaim() -> Element {
    rsx!(
        Page { view: View::HistoryClaim, heading: "Claim history",
            p { class: "opacity-70",
                "You have not submitted any claims."
            }
            Link { to: Route::ClaimRequest {}, class: "btn btn-primary self-start",
                "Request a claim"
            }
        }
    )
}

#[component]
pub fn ClaimRequest() -> Element {
    rsx!(
        Page { view: View::ClaimRequest, heading: "Claim request",
            p { class: "opacity-70",
                "Describe the problem with your order and attach the tracking number."
            }
            Link { to: Route::HistoryClaim {}, class: "btn btn-ghost self-start",
                "Back to claim history"
            }
        }
    )
}
