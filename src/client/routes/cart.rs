use dioxus::prelude::*;

use crate::client::{
    components::Page,
    router::{Route, View},
};

#[component]
pub fn CartHome() -> Element {
    rsx!(
        Page { view: View::CartHome, heading: "Shop",
            p { class: "opacity-70",
                "Products will be listed here."
            }
            Link { to: Route::Cart {}, class: "btn btn-outline self-start",
                "Go to cart"
            }
        }
    )
}

#[component]
pub fn Cart() -> Element {
    rsx!(
        Page { view: View::Cart, heading: "Cart",
            p { class: "opacity-70",
                "Your cart is empty."
            }
            div { class: "flex gap-2",
                Link { to: Route::CartHome {}, class: "btn btn-ghost",
                    "Continue shopping"
                }
                Link { to: Route::Payment {}, class: "btn btn-primary",
                    "Checkout"
                }
            }
        }
    )
}
