use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{
    FaCartShopping, FaClockRotateLeft, FaCreditCard, FaFileCirclePlus, FaGaugeHigh, FaQrcode,
    FaRightFromBracket, FaStore, FaTruck, FaUser, FaUsers,
};
use dioxus_free_icons::Icon;

use crate::client::{router::Route, store::auth::AuthState};

#[component]
fn NavItem(to: Route, label: &'static str, children: Element) -> Element {
    rsx!(
        li {
            Link { to: to, active_class: "menu-active",
                {children}
                "{label}"
            }
        }
    )
}

#[component]
pub fn UserNavbar() -> Element {
    let mut auth = use_context::<Store<AuthState>>();

    rsx! {
        div {
            class: "navbar bg-base-200 px-4",
            div {
                class: "navbar-start",
                Link { to: Route::Index {}, class: "text-xl font-semibold",
                    "Palm"
                }
            }
            div {
                class: "navbar-center hidden lg:flex",
                ul { class: "menu menu-horizontal gap-1",
                    NavItem { to: Route::Dashboard {}, label: "Dashboard",
                        Icon { width: 16, height: 16, icon: FaGaugeHigh }
                    }
                    NavItem { to: Route::Customer {}, label: "Customers",
                        Icon { width: 16, height: 16, icon: FaUsers }
                    }
                    NavItem { to: Route::UserCodes {}, label: "Codes",
                        Icon { width: 16, height: 16, icon: FaQrcode }
                    }
                    NavItem { to: Route::Payment {}, label: "Payment",
                        Icon { width: 16, height: 16, icon: FaCreditCard }
                    }
                    NavItem { to: Route::HistoryClaim {}, label: "Claims",
                        Icon { width: 16, height: 16, icon: FaClockRotateLeft }
                    }
                    NavItem { to: Route::ClaimRequest {}, label: "New claim",
                        Icon { width: 16, height: 16, icon: FaFileCirclePlus }
                    }
                    NavItem { to: Route::CartHome {}, label: "Shop",
                        Icon { width: 16, height: 16, icon: FaStore }
                    }
                    NavItem { to: Route::Cart {}, label: "Cart",
                        Icon { width: 16, height: 16, icon: FaCartShopping }
                    }
                    NavItem { to: Route::Tracking {}, label: "Tracking",
                        Icon { width: 16, height: 16, icon: FaTruck }
                    }
                }
            }
            div {
                class: "navbar-end gap-2",
                Link { to: Route::ProfileEdit {}, class: "btn btn-ghost btn-circle",
                    Icon { width: 18, height: 18, icon: FaUser }
                }
                button {
                    class: "btn btn-outline",
                    onclick: move |_| auth.write().sign_out(),
                    Icon { width: 16, height: 16, icon: FaRightFromBracket }
                    "Logout"
                }
            }
        }
    }
}
