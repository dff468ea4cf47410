//! Remote auth and record clients used by the shell and forms.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components depend on the `AuthClient` / `RecordClient` traits rather than
//! on `api` directly, so form and shell flows can be driven by in-memory
//! fakes in tests. `RemoteAuth` publishes auth-state changes after every
//! successful sign-in, sign-up-with-session, or sign-out.

// Futures are polled on the single browser thread; no `Send` bound needed.
#![allow(async_fn_in_trait)]

#[cfg(test)]
#[path = "remote_test.rs"]
mod remote_test;

use super::api;
use super::auth_events::{AuthEvents, Subscription};
use super::types::{AuthError, AuthEvent, Credentials, OptInRecord, Session, SignUpResponse, StoreError};

/// Remote authentication operations plus auth-state subscription.
pub trait AuthClient {
    /// Create an account. The response carries a session only when the
    /// provider signs the user in immediately.
    async fn sign_up(&self, credentials: &Credentials) -> Result<SignUpResponse, AuthError>;

    async fn sign_in_with_password(&self, credentials: &Credentials) -> Result<Session, AuthError>;

    async fn sign_out(&self) -> Result<(), AuthError>;

    /// Session currently bound to this browser, if any. Lookup failures
    /// count as "no session".
    async fn get_session(&self) -> Option<Session>;

    /// Listen for auth-state changes until the guard drops.
    fn on_auth_state_change<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&AuthEvent) + Send + Sync + 'static;
}

/// Remote record insertion.
pub trait RecordClient {
    async fn insert(&self, record: &OptInRecord) -> Result<(), StoreError>;
}

/// `AuthClient` backed by the site's `/api/auth/*` endpoints.
#[derive(Clone, Debug, Default)]
pub struct RemoteAuth {
    events: AuthEvents,
}

impl RemoteAuth {
    #[must_use]
    pub fn new(events: AuthEvents) -> Self {
        Self { events }
    }

    #[cfg(test)]
    #[must_use]
    pub fn events(&self) -> &AuthEvents {
        &self.events
    }
}

impl AuthClient for RemoteAuth {
    async fn sign_up(&self, credentials: &Credentials) -> Result<SignUpResponse, AuthError> {
        let response = api::sign_up(credentials).await.map_err(AuthError)?;
        if let Some(session) = &response.session {
            self.events.emit(&AuthEvent::SignedIn(session.clone()));
        }
        Ok(response)
    }

    async fn sign_in_with_password(&self, credentials: &Credentials) -> Result<Session, AuthError> {
        let session = api::sign_in_with_password(credentials)
            .await
            .map_err(AuthError)?;
        self.events.emit(&AuthEvent::SignedIn(session.clone()));
        Ok(session)
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        api::sign_out().await.map_err(AuthError)?;
        self.events.emit(&AuthEvent::SignedOut);
        Ok(())
    }

    async fn get_session(&self) -> Option<Session> {
        match api::fetch_session().await {
            Ok(session) => session,
            Err(e) => {
                #[cfg(feature = "hydrate")]
                log::warn!("session lookup failed: {e}");
                #[cfg(not(feature = "hydrate"))]
                let _ = e;
                None
            }
        }
    }

    fn on_auth_state_change<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&AuthEvent) + Send + Sync + 'static,
    {
        self.events.subscribe(listener)
    }
}

/// `RecordClient` backed by `POST /api/opt-ins`.
#[derive(Clone, Copy, Debug, Default)]
pub struct RemoteRecords;

impl RecordClient for RemoteRecords {
    async fn insert(&self, record: &OptInRecord) -> Result<(), StoreError> {
        api::insert_opt_in(record).await.map_err(StoreError)
    }
}
