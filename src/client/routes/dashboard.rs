use chrono::Utc;
use dioxus::prelude::*;

use crate::{
    client::{components::Page, router::{Route, View}, store::auth::AuthState},
    model::auth::Role,
};

#[component]
fn ShortcutCard(to: Route, title: &'static str, description: &'static str) -> Element {
    rsx!(
        Link { to: to, class: "card bg-base-200 shadow-sm hover:bg-base-300",
            div { class: "card-body",
                h2 { class: "card-title", "{title}" }
                p { "{description}" }
            }
        }
    )
}

/// Landing page of the user section, also rendered for `/`.
#[component]
pub fn Dashboard() -> Element {
    let auth = use_context::<Store<AuthState>>();
    let session = auth.read().session(Utc::now()).map(|session| {
        (
            session.user_id,
            session.role == Role::Admin,
            session.expires_at().format("%Y-%m-%d %H:%M UTC").to_string(),
        )
    });

    rsx!(
        Page { view: View::Dashboard, heading: "Dashboard",
            if let Some((user_id, is_admin, expires_at)) = session {
                p { class: "opacity-70",
                    "Signed in as user #{user_id}"
                    if is_admin { " (admin)" }
                    ", session valid until {expires_at}"
                }
            }
            div { class: "grid grid-cols-1 md:grid-cols-3 gap-4",
                ShortcutCard { to: Route::Customer {}, title: "Customers", description: "Browse, add and edit customers." }
                ShortcutCard { to: Route::UserCodes {}, title: "My codes", description: "Codes issued to your account." }
                ShortcutCard { to: Route::Payment {}, title: "Payment", description: "Pay for your current order." }
                ShortcutCard { to: Route::HistoryClaim {}, title: "Claims", description: "Follow up on submitted claims." }
                ShortcutCard { to: Route::CartHome {}, title: "Shop", description: "Browse products and fill your cart." }
                ShortcutCard { to: Route::Tracking {}, title: "Tracking", description: "Where your parcels are right now." }
            }
        }
    )
}
