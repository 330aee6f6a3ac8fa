use chrono::Utc;
use dioxus::prelude::*;

use crate::client::{
    components::{Loadable, UserNavbar},
    router::{user_routes, Route, View},
    routes::Login,
    store::auth::AuthState,
};

/// Root layout of the user section.
///
/// Rebuilds the route table from the current auth flag on every render and mounts its root
/// view. Signed-out visitors get the login page whatever child path they asked for; once a
/// session exists the same URL renders inside [`UserLayout`].
#[component]
pub fn UserShell() -> Element {
    let mut auth = use_context::<Store<AuthState>>();

    use_effect(move || {
        let now = Utc::now();
        let expired = auth
            .read()
            .session
            .as_ref()
            .is_some_and(|session| session.is_expired(now));
        if expired {
            auth.write().clear_expired(now);
        }
    });

    let is_logged_in = auth.read().is_logged_in(Utc::now());

    match shell_view(is_logged_in) {
        View::UserLayout => rsx!(UserLayout {}),
        _ => rsx!(
            Loadable {
                Login {}
            }
        ),
    }
}

/// Root view the shell mounts for the given auth flag.
///
/// Anything other than the user layout falls back to the login page.
pub fn shell_view(is_logged_in: bool) -> View {
    match user_routes(is_logged_in).view {
        Some(View::UserLayout) => View::UserLayout,
        _ => View::Login,
    }
}

/// Shared chrome around every signed-in page.
#[component]
pub fn UserLayout() -> Element {
    rsx!(
        div { class: "min-h-screen flex flex-col",
            UserNavbar {}
            main { class: "flex-1",
                Loadable {
                    Outlet::<Route> {}
                }
            }
        }
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests the shell's choice of root view.
    ///
    /// Expected: UserLayout when logged in, Login otherwise
    #[test]
    fn shell_view_follows_auth_flag() {
        assert_eq!(shell_view(true), View::UserLayout);
        assert_eq!(shell_view(false), View::Login);
    }
}
