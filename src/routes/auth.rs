//! Auth routes: sign-up, login, logout, session lookup.
//!
//! Provider tokens live only in `HttpOnly` cookies; response bodies carry the
//! browser-facing `Session` view.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use client::net::types::{Credentials, SessionResponse, SignUpResponse, ValidationError};
use time::Duration;

use super::{auth_failure, error_response};
use crate::services::session::{CookieUpdate, SessionLookup, resolve_session};
use crate::state::AppState;
use crate::supabase::types::{AuthError, AuthTokens};

pub const ACCESS_COOKIE: &str = "sb_access_token";
pub const REFRESH_COOKIE: &str = "sb_refresh_token";

const REFRESH_COOKIE_MAX_AGE: Duration = Duration::days(30);

// =============================================================================
// COOKIES
// =============================================================================

fn auth_cookie(name: &'static str, value: String, secure: bool, max_age: Option<Duration>) -> Cookie<'static> {
    let mut builder = Cookie::build((name, value))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure);
    if let Some(age) = max_age {
        builder = builder.max_age(age);
    }
    builder.build()
}

/// Store a fresh grant in the auth cookies.
pub(crate) fn with_session(jar: CookieJar, tokens: &AuthTokens, secure: bool) -> CookieJar {
    let access_age = tokens.expires_in.filter(|secs| *secs > 0).map(Duration::seconds);
    let access = auth_cookie(ACCESS_COOKIE, tokens.access_token.clone(), secure, access_age);
    let refresh = auth_cookie(REFRESH_COOKIE, tokens.refresh_token.clone(), secure, Some(REFRESH_COOKIE_MAX_AGE));
    jar.add(access).add(refresh)
}

/// Expire both auth cookies.
pub(crate) fn without_session(jar: CookieJar, secure: bool) -> CookieJar {
    let access = auth_cookie(ACCESS_COOKIE, String::new(), secure, Some(Duration::ZERO));
    let refresh = auth_cookie(REFRESH_COOKIE, String::new(), secure, Some(Duration::ZERO));
    jar.add(access).add(refresh)
}

pub(crate) fn apply_cookie_update(jar: CookieJar, update: &CookieUpdate, secure: bool) -> CookieJar {
    match update {
        CookieUpdate::Keep => jar,
        CookieUpdate::Replace(tokens) => with_session(jar, tokens, secure),
        CookieUpdate::Clear => without_session(jar, secure),
    }
}

fn cookie_value(jar: &CookieJar, name: &str) -> Option<String> {
    jar.get(name)
        .map(Cookie::value)
        .filter(|v| !v.is_empty())
        .map(str::to_owned)
}

/// Resolve the request's session from its cookies. Without an auth provider
/// every request is anonymous.
pub(crate) async fn lookup_session(state: &AppState, jar: &CookieJar) -> Result<SessionLookup, AuthError> {
    let Some(auth) = &state.auth else {
        return Ok(SessionLookup::default());
    };
    let access = cookie_value(jar, ACCESS_COOKIE);
    let refresh = cookie_value(jar, REFRESH_COOKIE);
    resolve_session(auth.as_ref(), access.as_deref(), refresh.as_deref()).await
}

/// Trim the email; both fields must be non-empty.
fn validate(credentials: Credentials) -> Result<Credentials, ValidationError> {
    let email = credentials.email.trim().to_owned();
    if email.is_empty() || credentials.password.is_empty() {
        return Err(ValidationError::MissingCredentials);
    }
    Ok(Credentials { email, password: credentials.password })
}

// =============================================================================
// HANDLERS
// =============================================================================

/// `POST /api/auth/signup` — create an account; signs in immediately when the
/// provider needs no email confirmation.
pub async fn signup(State(state): State<AppState>, jar: CookieJar, Json(credentials): Json<Credentials>) -> Response {
    let credentials = match validate(credentials) {
        Ok(c) => c,
        Err(e) => return error_response(StatusCode::BAD_REQUEST, e.to_string()),
    };
    let Some(auth) = &state.auth else {
        return auth_failure(&AuthError::NotConfigured);
    };

    match auth.sign_up(&credentials).await {
        Ok(outcome) => {
            tracing::info!(email = %credentials.email, confirmed = outcome.tokens.is_some(), "sign-up accepted");
            let session = outcome.tokens.as_ref().map(AuthTokens::session);
            let jar = match &outcome.tokens {
                Some(tokens) => with_session(jar, tokens, state.config.cookie_secure),
                None => jar,
            };
            (jar, Json(SignUpResponse { user: outcome.user.into(), session })).into_response()
        }
        Err(e) => auth_failure(&e),
    }
}

/// `POST /api/auth/login` — password sign-in; sets the auth cookies.
pub async fn login(State(state): State<AppState>, jar: CookieJar, Json(credentials): Json<Credentials>) -> Response {
    let credentials = match validate(credentials) {
        Ok(c) => c,
        Err(e) => return error_response(StatusCode::BAD_REQUEST, e.to_string()),
    };
    let Some(auth) = &state.auth else {
        return auth_failure(&AuthError::NotConfigured);
    };

    match auth.sign_in_with_password(&credentials).await {
        Ok(tokens) => {
            tracing::info!(email = %credentials.email, "login succeeded");
            let jar = with_session(jar, &tokens, state.config.cookie_secure);
            (jar, Json(tokens.session())).into_response()
        }
        Err(e) => auth_failure(&e),
    }
}

/// `POST /api/auth/logout` — revoke the remote session, clear cookies.
///
/// A token the provider no longer accepts counts as signed out. Only an
/// unreachable provider fails the request, leaving the cookies in place.
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> Response {
    if let (Some(auth), Some(access)) = (&state.auth, cookie_value(&jar, ACCESS_COOKIE)) {
        match auth.sign_out(&access).await {
            Ok(()) => {}
            Err(e) if e.is_rejection() => tracing::info!(error = %e, "sign-out token already invalid"),
            Err(e) => return auth_failure(&e),
        }
    }
    (without_session(jar, state.config.cookie_secure), StatusCode::NO_CONTENT).into_response()
}

/// `GET /api/auth/session` — current session, refreshing an expired access
/// token when a refresh cookie is present.
pub async fn session(State(state): State<AppState>, jar: CookieJar) -> Response {
    match lookup_session(&state, &jar).await {
        Ok(lookup) => {
            let jar = apply_cookie_update(jar, &lookup.cookies, state.config.cookie_secure);
            (jar, Json(SessionResponse { session: lookup.session })).into_response()
        }
        Err(e) => auth_failure(&e),
    }
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
