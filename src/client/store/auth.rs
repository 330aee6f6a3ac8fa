//! In-memory authentication state shared through the Dioxus context.
//!
//! The root [`App`](crate::client::App) provides a `Store<AuthState>`; the route shell reads
//! [`AuthState::is_logged_in`] to pick between the login page and the user layout, and the
//! API client reads [`AuthState::authorization`] to sign requests.

use chrono::{DateTime, Duration, Utc};
use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::model::auth::{Role, SignInResponseDto};

/// Lifetime of a backend token, counted from sign-in.
pub const SESSION_LIFETIME_HOURS: i64 = 24;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthSession {
    pub token_type: String,
    pub token: String,
    pub user_id: u32,
    pub role: Role,
    pub issued_at: DateTime<Utc>,
}

impl AuthSession {
    pub fn from_response(response: SignInResponseDto, issued_at: DateTime<Utc>) -> Self {
        Self {
            token_type: response.token_type,
            token: response.token,
            user_id: response.id,
            role: response.role,
            issued_at,
        }
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.issued_at + Duration::hours(SESSION_LIFETIME_HOURS)
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at()
    }

    /// Value for the `Authorization` header, e.g. `Bearer eyJhbGciOi...`.
    pub fn authorization(&self) -> String {
        format!("{} {}", self.token_type, self.token)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthState {
    pub session: Option<AuthSession>,
}

impl AuthState {
    /// Returns the live session, ignoring one that has expired.
    pub fn session(&self, now: DateTime<Utc>) -> Option<&AuthSession> {
        self.session
            .as_ref()
            .filter(|session| !session.is_expired(now))
    }

    pub fn is_logged_in(&self, now: DateTime<Utc>) -> bool {
        self.session(now).is_some()
    }

    pub fn authorization(&self, now: DateTime<Utc>) -> Option<String> {
        self.session(now).map(AuthSession::authorization)
    }

    pub fn sign_in(&mut self, session: AuthSession) {
        tracing::info!(
            user_id = session.user_id,
            role = ?session.role,
            "Signed in"
        );

        self.session = Some(session);
    }

    pub fn sign_out(&mut self) {
        if let Some(session) = self.session.take() {
            tracing::info!(user_id = session.user_id, "Signed out");
        }
    }

    /// Drops an expired session so the shell falls back to the login page.
    ///
    /// Returns `true` when a session was dropped.
    pub fn clear_expired(&mut self, now: DateTime<Utc>) -> bool {
        match &self.session {
            Some(session) if session.is_expired(now) => {
                tracing::warn!(
                    user_id = session.user_id,
                    expired_at = %session.expires_at(),
                    "Session expired"
                );

                self.session = None;
                true
            }
            _ => false,
        }
    }
}

/// Creates the signed-out auth store and shares it with every descendant.
pub fn use_auth_provider() -> Store<AuthState> {
    let auth = use_store(AuthState::default);
    use_context_provider(|| auth)
}
