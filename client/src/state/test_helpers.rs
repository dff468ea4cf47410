//! In-memory fakes for the remote clients.

use std::sync::{Arc, Mutex};

use crate::net::auth_events::{AuthEvents, Subscription};
use crate::net::remote::{AuthClient, RecordClient};
use crate::net::types::{
    AuthError, AuthEvent, Credentials, OptInRecord, Session, SessionUser, SignUpResponse, StoreError,
};

#[must_use]
pub fn session(id: &str, email: &str) -> Session {
    Session { user: SessionUser { id: id.to_owned(), email: Some(email.to_owned()) }, expires_at: None }
}

/// Scripted `AuthClient`. Each operation answers with its configured result
/// and emits the same events the real client would.
#[derive(Default)]
pub struct FakeAuth {
    pub sign_up_result: Option<Result<SignUpResponse, AuthError>>,
    pub sign_in_result: Option<Result<Session, AuthError>>,
    pub sign_out_result: Option<Result<(), AuthError>>,
    pub session: Option<Session>,
    pub events: AuthEvents,
    pub calls: Mutex<Vec<String>>,
}

impl FakeAuth {
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: &str) {
        self.calls.lock().unwrap().push(call.to_owned());
    }
}

impl AuthClient for FakeAuth {
    async fn sign_up(&self, credentials: &Credentials) -> Result<SignUpResponse, AuthError> {
        self.record(&format!("sign_up:{}", credentials.email));
        let result = self
            .sign_up_result
            .clone()
            .unwrap_or_else(|| Err(AuthError("sign_up not scripted".to_owned())));
        if let Ok(SignUpResponse { session: Some(session), .. }) = &result {
            self.events.emit(&AuthEvent::SignedIn(session.clone()));
        }
        result
    }

    async fn sign_in_with_password(&self, credentials: &Credentials) -> Result<Session, AuthError> {
        self.record(&format!("sign_in:{}", credentials.email));
        let result = self
            .sign_in_result
            .clone()
            .unwrap_or_else(|| Err(AuthError("sign_in not scripted".to_owned())));
        if let Ok(session) = &result {
            self.events.emit(&AuthEvent::SignedIn(session.clone()));
        }
        result
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        self.record("sign_out");
        let result = self.sign_out_result.clone().unwrap_or(Ok(()));
        if result.is_ok() {
            self.events.emit(&AuthEvent::SignedOut);
        }
        result
    }

    async fn get_session(&self) -> Option<Session> {
        self.record("get_session");
        self.session.clone()
    }

    fn on_auth_state_change<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&AuthEvent) + Send + Sync + 'static,
    {
        self.events.subscribe(listener)
    }
}

/// `RecordClient` that captures inserted records.
#[derive(Default)]
pub struct FakeRecords {
    pub fail_with: Option<String>,
    pub inserted: Arc<Mutex<Vec<OptInRecord>>>,
}

impl FakeRecords {
    pub fn inserted(&self) -> Vec<OptInRecord> {
        self.inserted.lock().unwrap().clone()
    }
}

impl RecordClient for FakeRecords {
    async fn insert(&self, record: &OptInRecord) -> Result<(), StoreError> {
        if let Some(message) = &self.fail_with {
            return Err(StoreError(message.clone()));
        }
        self.inserted.lock().unwrap().push(record.clone());
        Ok(())
    }
}
