use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::{config::Config, router::Route, store::auth::use_auth_provider};

fn load_config() -> Config {
    Config::from_env().unwrap_or_else(|e| {
        tracing::error!("Configuration error, using {}: {}", Config::default().api_url, e);

        Config::default()
    })
}

#[component]
pub fn App() -> Element {
    use_context_provider(load_config);
    use_auth_provider();

    rsx!(
        Router::<Route> {}
    )
}
