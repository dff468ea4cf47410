//! Wire types and errors for the hosted auth and record-store APIs.

use client::net::types::{Session, SessionUser};
use serde::Deserialize;
use thiserror::Error;

// =============================================================================
// ERRORS
// =============================================================================

/// Failures from the auth provider.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The provider answered with an error status. Displays its message verbatim.
    #[error("{message}")]
    Rejected { status: u16, message: String },

    /// The provider could not be reached or the request timed out.
    #[error("auth service unreachable: {0}")]
    Transport(String),

    /// The provider answered 2xx with a body we could not read.
    #[error("unexpected auth service response: {0}")]
    Unexpected(String),

    #[error("authentication is not configured")]
    NotConfigured,
}

impl AuthError {
    /// True when the provider refused the credentials or token itself.
    #[must_use]
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::Rejected { status: 400..=499, .. })
    }
}

/// Failures from the record store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("{message}")]
    Rejected { status: u16, message: String },

    #[error("record store unreachable: {0}")]
    Transport(String),

    #[error("record store is not configured")]
    NotConfigured,
}

/// Pull a human-readable message out of an error body.
///
/// Checks `msg`, `error_description`, `message`, then `error`; falls back to
/// the status code when none is a non-empty string.
#[must_use]
pub fn error_message(status: u16, body: &str) -> String {
    let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
        return status.to_string();
    };
    ["msg", "error_description", "message", "error"]
        .into_iter()
        .filter_map(|key| value.get(key).and_then(serde_json::Value::as_str))
        .map(str::trim)
        .find(|message| !message.is_empty())
        .map_or_else(|| status.to_string(), str::to_owned)
}

// =============================================================================
// AUTH WIRE TYPES
// =============================================================================

/// User object as returned by the auth provider. Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GoTrueUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}

impl From<GoTrueUser> for SessionUser {
    fn from(user: GoTrueUser) -> Self {
        Self { id: user.id, email: user.email.filter(|e| !e.is_empty()) }
    }
}

/// Token grant returned by sign-in, refresh, and auto-confirmed sign-up.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AuthTokens {
    pub access_token: String,
    pub refresh_token: String,
    /// Access-token lifetime in seconds.
    #[serde(default)]
    pub expires_in: Option<i64>,
    /// Access-token expiry in Unix seconds.
    #[serde(default)]
    pub expires_at: Option<i64>,
    pub user: GoTrueUser,
}

impl AuthTokens {
    /// Expiry in Unix seconds, derived from `expires_in` when the provider
    /// omits `expires_at`.
    #[must_use]
    pub fn expiry(&self, now_unix: i64) -> Option<i64> {
        self.expires_at.or_else(|| self.expires_in.map(|secs| now_unix + secs))
    }

    /// Browser-facing view of this grant. Tokens are not included.
    #[must_use]
    pub fn session(&self) -> Session {
        let now = time::OffsetDateTime::now_utc().unix_timestamp();
        Session { user: self.user.clone().into(), expires_at: self.expiry(now) }
    }
}

/// Result of a sign-up: the user, plus tokens when no email confirmation is
/// required.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignUpOutcome {
    pub user: GoTrueUser,
    pub tokens: Option<AuthTokens>,
}

/// Decode a sign-up response body.
///
/// A body carrying `access_token` is a full token grant; anything else is the
/// bare (unconfirmed) user.
///
/// # Errors
///
/// Returns `AuthError::Unexpected` when the body matches neither shape.
pub fn parse_sign_up_body(body: &str) -> Result<SignUpOutcome, AuthError> {
    let value: serde_json::Value = serde_json::from_str(body).map_err(|e| AuthError::Unexpected(e.to_string()))?;
    if value.get("access_token").is_some() {
        let tokens: AuthTokens = serde_json::from_value(value).map_err(|e| AuthError::Unexpected(e.to_string()))?;
        return Ok(SignUpOutcome { user: tokens.user.clone(), tokens: Some(tokens) });
    }
    let user: GoTrueUser = serde_json::from_value(value).map_err(|e| AuthError::Unexpected(e.to_string()))?;
    Ok(SignUpOutcome { user, tokens: None })
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
