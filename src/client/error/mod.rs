//! Error types for the Palm client.
//!
//! Each concern gets its own `thiserror` enum: talking to the backend ([`ApiError`]), reading
//! build-time configuration ([`ConfigError`]) and checking the route table
//! ([`RouteTableError`]). Pages render these inline, nothing here panics.

pub mod api;
pub mod config;
pub mod route;

pub use api::ApiError;
pub use config::ConfigError;
pub use route::RouteTableError;
