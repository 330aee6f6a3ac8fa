use dioxus::prelude::*;

use crate::client::{
    components::Page,
    router::{Route, View},
};

#[component]
pub fn Payment() -> Element {
    rsx!(
        Page { view: View::Payment, heading: "Payment",
            p { class: "opacity-70",
                "There is nothing to pay for yet."
            }
            Link { to: Route::Cart {}, class: "btn btn-outline self-start",
                "Review cart"
            }
        }
    )
}
