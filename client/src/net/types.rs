//! Shared wire DTOs for the browser/server boundary.
//!
//! DESIGN
//! ======
//! The server crate depends on these same types, so the JSON shapes of the
//! auth and opt-in endpoints are defined exactly once.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Source tag stamped on every opt-in record created by the website form.
pub const OPT_IN_SOURCE: &str = "website_form";

/// Identity carried by an authenticated session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    /// Auth provider user identifier (UUID string).
    pub id: String,
    /// Account email, when the provider exposes one.
    #[serde(default)]
    pub email: Option<String>,
}

/// Opaque proof of authentication as seen by the browser.
///
/// Provider tokens stay in server-side `HttpOnly` cookies; the browser only
/// ever sees who is signed in and until when.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user: SessionUser,
    /// Access-token expiry in seconds since the Unix epoch, if known.
    #[serde(default)]
    pub expires_at: Option<i64>,
}

impl Session {
    /// Email of the signed-in user, if any.
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.user.email.as_deref().filter(|email| !email.is_empty())
    }
}

/// Email/password pair submitted by the auth form. Never persisted.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Response body of `POST /api/auth/signup`.
///
/// `session` is absent when the provider requires email confirmation first.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignUpResponse {
    pub user: SessionUser,
    #[serde(default)]
    pub session: Option<Session>,
}

/// Response body of `GET /api/auth/session`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionResponse {
    #[serde(default)]
    pub session: Option<Session>,
}

/// Consent-bearing contact entry written to the record store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptInRecord {
    pub user_id: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub opted_in: bool,
    pub opt_in_source: String,
}

impl OptInRecord {
    /// Build a website-form record, mapping blank fields to `None`.
    #[must_use]
    pub fn from_form(user_id: Option<&str>, email: &str, phone_number: &str, opted_in: bool) -> Self {
        Self {
            user_id: user_id.map(str::to_owned),
            email: non_blank(email),
            phone_number: non_blank(phone_number),
            opted_in,
            opt_in_source: OPT_IN_SOURCE.to_owned(),
        }
    }
}

/// Error body returned by every failing API endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Auth-state change published by the auth client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthEvent {
    SignedIn(Session),
    SignedOut,
}

/// Credential or auth-provider failure. Displays the provider message verbatim.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct AuthError(pub String);

/// Record-insert failure. Displays the store message verbatim.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct StoreError(pub String);

/// Input rejected locally before any network call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Email and password are required.")]
    MissingCredentials,
    #[error("Please agree to the terms to opt-in.")]
    ConsentRequired,
    #[error("A request is already in progress.")]
    RequestInFlight,
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() { None } else { Some(trimmed.to_owned()) }
}
