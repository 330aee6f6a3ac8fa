use chrono::Utc;
use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        components::{ErrorAlert, Page, TextField},
        config::Config,
        router::View,
        store::auth::{AuthSession, AuthState},
        util::api,
    },
    model::auth::SignInDto,
};

/// Sign-in form rendered by the shell in place of the user layout.
///
/// A successful sign-in only updates the auth store. The shell re-renders with the layout
/// and the originally requested page, so there is no redirect.
#[component]
pub fn Login() -> Element {
    let config = use_context::<Config>();
    let mut auth = use_context::<Store<AuthState>>();

    let email = use_signal(String::new);
    let password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut pending = use_signal(|| false);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();

        let config = config.clone();
        let credentials = SignInDto {
            email: email(),
            password: password(),
        };

        pending.set(true);
        spawn(async move {
            match api::sign_in(&config, &credentials).await {
                Ok(response) => {
                    pending.set(false);
                    error.set(None);
                    // Unmounts this page, so it must be the last write.
                    auth.write()
                        .sign_in(AuthSession::from_response(response, Utc::now()));
                }
                Err(err) => {
                    tracing::warn!(email = %credentials.email, "Sign in failed: {}", err);

                    pending.set(false);
                    error.set(Some(err.to_string()));
                }
            }
        });
    };

    rsx!(
        Page { view: View::Login, heading: "Sign in", class: "items-center justify-center min-h-screen",
            form { class: "card bg-base-200 w-full max-w-96 shadow-sm",
                onsubmit: onsubmit,
                div { class: "card-body flex flex-col gap-3",
                    if let Some(message) = error() {
                        ErrorAlert { message }
                    }
                    TextField { label: "Email", value: email, input_type: "email", required: true }
                    TextField { label: "Password", value: password, input_type: "password", required: true }
                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: pending(),
                        if pending() { "Signing in..." } else { "Sign in" }
                    }
                }
            }
        }
    )
}
