//! Session resolution from the auth cookies.
//!
//! DESIGN
//! ======
//! The browser holds no tokens; each request carries the access and refresh
//! tokens in `HttpOnly` cookies. Resolution asks the provider who owns the
//! access token and, when it has been rejected (usually expiry), trades the
//! refresh token for a new grant. The caller applies `CookieUpdate` to the
//! response so a refreshed grant replaces the stale cookies.

use client::net::types::Session;

use crate::supabase::AuthProvider;
use crate::supabase::types::{AuthError, AuthTokens};

/// What the response must do with the auth cookies.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CookieUpdate {
    #[default]
    Keep,
    Replace(AuthTokens),
    Clear,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionLookup {
    pub session: Option<Session>,
    /// Token to act as when calling the record store.
    pub access_token: Option<String>,
    pub cookies: CookieUpdate,
}

impl SessionLookup {
    fn anonymous(cookies: CookieUpdate) -> Self {
        Self { session: None, access_token: None, cookies }
    }
}

/// Resolve the caller's session from the cookie tokens.
///
/// # Errors
///
/// Transport and unexpected-response failures propagate; rejected tokens
/// resolve to an anonymous lookup that clears the cookies.
pub async fn resolve_session(
    auth: &dyn AuthProvider,
    access_token: Option<&str>,
    refresh_token: Option<&str>,
) -> Result<SessionLookup, AuthError> {
    if let Some(token) = access_token {
        match auth.get_user(token).await {
            Ok(user) => {
                return Ok(SessionLookup {
                    session: Some(Session { user: user.into(), expires_at: None }),
                    access_token: Some(token.to_owned()),
                    cookies: CookieUpdate::Keep,
                });
            }
            Err(e) if e.is_rejection() => {
                tracing::debug!(error = %e, "access token rejected; trying refresh");
            }
            Err(e) => return Err(e),
        }
    }

    let Some(refresh) = refresh_token else {
        let cookies = if access_token.is_some() { CookieUpdate::Clear } else { CookieUpdate::Keep };
        return Ok(SessionLookup::anonymous(cookies));
    };

    match auth.refresh(refresh).await {
        Ok(tokens) => Ok(SessionLookup {
            session: Some(tokens.session()),
            access_token: Some(tokens.access_token.clone()),
            cookies: CookieUpdate::Replace(tokens),
        }),
        Err(e) if e.is_rejection() => {
            tracing::info!(error = %e, "refresh token rejected; clearing session");
            Ok(SessionLookup::anonymous(CookieUpdate::Clear))
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
