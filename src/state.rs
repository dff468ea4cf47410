//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! remote clients are optional trait objects: `None` means the site runs
//! without a hosted backend and the auth and opt-in endpoints answer 503.

use std::sync::Arc;

use crate::config::SiteConfig;
use crate::supabase::{AuthProvider, RecordStore};

/// Clone is required by Axum; every field is an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub auth: Option<Arc<dyn AuthProvider>>,
    pub records: Option<Arc<dyn RecordStore>>,
    pub config: Arc<SiteConfig>,
}

impl AppState {
    #[must_use]
    pub fn new(
        auth: Option<Arc<dyn AuthProvider>>,
        records: Option<Arc<dyn RecordStore>>,
        config: SiteConfig,
    ) -> Self {
        Self { auth, records, config: Arc::new(config) }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use std::sync::Mutex;

    use client::net::types::{Credentials, OptInRecord};

    use super::*;
    use crate::config::{DEFAULT_OPT_IN_TABLE, RemoteTimeouts};
    use crate::supabase::types::{AuthError, AuthTokens, GoTrueUser, SignUpOutcome, StoreError};

    #[must_use]
    pub fn test_config() -> SiteConfig {
        SiteConfig {
            supabase: None,
            port: 3000,
            cookie_secure: false,
            opt_in_table: DEFAULT_OPT_IN_TABLE.to_owned(),
            timeouts: RemoteTimeouts { request_secs: 10, connect_secs: 5 },
        }
    }

    #[must_use]
    pub fn user(id: &str, email: &str) -> GoTrueUser {
        GoTrueUser { id: id.to_owned(), email: Some(email.to_owned()) }
    }

    #[must_use]
    pub fn tokens(access: &str, refresh: &str, user: GoTrueUser) -> AuthTokens {
        AuthTokens {
            access_token: access.to_owned(),
            refresh_token: refresh.to_owned(),
            expires_in: Some(3600),
            expires_at: Some(1_700_000_000),
            user,
        }
    }

    #[must_use]
    pub fn rejected(status: u16, message: &str) -> AuthError {
        AuthError::Rejected { status, message: message.to_owned() }
    }

    /// Scripted `AuthProvider`. Every call is recorded as `"<op>:<arg>"`.
    pub struct MockAuth {
        pub sign_up: Result<SignUpOutcome, AuthError>,
        pub sign_in: Result<AuthTokens, AuthError>,
        pub refresh: Result<AuthTokens, AuthError>,
        /// `get_user` answers Ok only for this access token.
        pub valid_access_token: Option<(String, GoTrueUser)>,
        pub sign_out: Result<(), AuthError>,
        pub calls: Mutex<Vec<String>>,
    }

    impl Default for MockAuth {
        fn default() -> Self {
            let unstubbed = || rejected(400, "not stubbed");
            Self {
                sign_up: Err(unstubbed()),
                sign_in: Err(unstubbed()),
                refresh: Err(unstubbed()),
                valid_access_token: None,
                sign_out: Ok(()),
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    impl MockAuth {
        pub fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }

        fn record(&self, call: String) {
            self.calls.lock().unwrap().push(call);
        }
    }

    #[async_trait::async_trait]
    impl AuthProvider for MockAuth {
        async fn sign_up(&self, credentials: &Credentials) -> Result<SignUpOutcome, AuthError> {
            self.record(format!("sign_up:{}", credentials.email));
            self.sign_up.clone()
        }

        async fn sign_in_with_password(&self, credentials: &Credentials) -> Result<AuthTokens, AuthError> {
            self.record(format!("sign_in:{}", credentials.email));
            self.sign_in.clone()
        }

        async fn refresh(&self, refresh_token: &str) -> Result<AuthTokens, AuthError> {
            self.record(format!("refresh:{refresh_token}"));
            self.refresh.clone()
        }

        async fn get_user(&self, access_token: &str) -> Result<GoTrueUser, AuthError> {
            self.record(format!("get_user:{access_token}"));
            match &self.valid_access_token {
                Some((token, user)) if token == access_token => Ok(user.clone()),
                _ => Err(rejected(401, "invalid JWT")),
            }
        }

        async fn sign_out(&self, access_token: &str) -> Result<(), AuthError> {
            self.record(format!("sign_out:{access_token}"));
            self.sign_out.clone()
        }
    }

    /// One captured `RecordStore::insert` call.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct Insert {
        pub table: String,
        pub record: OptInRecord,
        pub access_token: Option<String>,
    }

    pub struct MockStore {
        pub result: Result<(), StoreError>,
        pub inserts: Mutex<Vec<Insert>>,
    }

    impl Default for MockStore {
        fn default() -> Self {
            Self { result: Ok(()), inserts: Mutex::new(Vec::new()) }
        }
    }

    impl MockStore {
        pub fn inserts(&self) -> Vec<Insert> {
            self.inserts.lock().unwrap().clone()
        }
    }

    #[async_trait::async_trait]
    impl RecordStore for MockStore {
        async fn insert(&self, table: &str, record: &OptInRecord, access_token: Option<&str>) -> Result<(), StoreError> {
            self.inserts.lock().unwrap().push(Insert {
                table: table.to_owned(),
                record: record.clone(),
                access_token: access_token.map(str::to_owned),
            });
            self.result.clone()
        }
    }

    /// `AppState` wired to the given mocks.
    #[must_use]
    pub fn test_app_state(auth: Arc<MockAuth>, store: Arc<MockStore>) -> AppState {
        let auth: Arc<dyn AuthProvider> = auth;
        let store: Arc<dyn RecordStore> = store;
        AppState::new(Some(auth), Some(store), test_config())
    }

    /// `AppState` with no hosted backend.
    #[must_use]
    pub fn unconfigured_app_state() -> AppState {
        AppState::new(None, None, test_config())
    }
}
