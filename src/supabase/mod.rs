//! Hosted auth (GoTrue) and record store (PostgREST) clients.
//!
//! SYSTEM CONTEXT
//! ==============
//! Handlers depend on the `AuthProvider` and `RecordStore` traits, never on
//! the HTTP clients directly, so route tests run against in-memory mocks.
//! Both real clients share one `reqwest::Client` carrying the configured
//! request and connect timeouts.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx answers become `Rejected { status, message }` with the message
//! pulled from the body by `types::error_message`. Connection failures and
//! timeouts become `Transport`.

pub mod gotrue;
pub mod postgrest;
pub mod types;

use std::time::Duration;

use client::net::types::{Credentials, OptInRecord};

use crate::config::RemoteTimeouts;
use types::{AuthError, AuthTokens, GoTrueUser, SignUpOutcome, StoreError};

/// Email/password auth against the hosted provider.
#[async_trait::async_trait]
pub trait AuthProvider: Send + Sync {
    async fn sign_up(&self, credentials: &Credentials) -> Result<SignUpOutcome, AuthError>;

    async fn sign_in_with_password(&self, credentials: &Credentials) -> Result<AuthTokens, AuthError>;

    /// Exchange a refresh token for a new grant.
    async fn refresh(&self, refresh_token: &str) -> Result<AuthTokens, AuthError>;

    /// Resolve the user owning `access_token`.
    async fn get_user(&self, access_token: &str) -> Result<GoTrueUser, AuthError>;

    /// Revoke the session behind `access_token`.
    async fn sign_out(&self, access_token: &str) -> Result<(), AuthError>;
}

/// Row insertion into the hosted record store.
#[async_trait::async_trait]
pub trait RecordStore: Send + Sync {
    /// Insert `record` into `table`, acting as the owner of `access_token`
    /// when given and anonymously otherwise.
    async fn insert(&self, table: &str, record: &OptInRecord, access_token: Option<&str>) -> Result<(), StoreError>;
}

/// Build the shared HTTP client for remote calls.
///
/// # Errors
///
/// Returns an error if the TLS backend cannot be initialized.
pub fn http_client(timeouts: RemoteTimeouts) -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(timeouts.request_secs))
        .connect_timeout(Duration::from_secs(timeouts.connect_secs))
        .build()
}
