//! REST API helpers for the site's auth and opt-in endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, each raced against
//! [`CLIENT_REQUEST_TIMEOUT_MS`].
//! Server-side (SSR): stubs returning an error since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Failures surface as the server's `{ "error": ... }` message so forms can
//! show it verbatim; a missing or malformed body falls back to the status.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{Credentials, OptInRecord, Session, SignUpResponse};
#[cfg(any(test, feature = "hydrate"))]
use super::types::ErrorBody;
#[cfg(feature = "hydrate")]
use super::types::SessionResponse;

/// Upper bound on any browser → server request, in milliseconds.
pub const CLIENT_REQUEST_TIMEOUT_MS: u32 = 15_000;

pub const SIGN_UP_ENDPOINT: &str = "/api/auth/signup";
pub const LOGIN_ENDPOINT: &str = "/api/auth/login";
pub const LOGOUT_ENDPOINT: &str = "/api/auth/logout";
pub const SESSION_ENDPOINT: &str = "/api/auth/session";
pub const OPT_IN_ENDPOINT: &str = "/api/opt-ins";

#[cfg(any(test, feature = "hydrate"))]
const TIMEOUT_MESSAGE: &str = "request timed out";

#[cfg(not(feature = "hydrate"))]
const SERVER_STUB_MESSAGE: &str = "not available on server";

#[cfg(any(test, feature = "hydrate"))]
fn failure_message(status: u16, body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .map(|b| b.error)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| format!("request failed: {status}"))
}

#[cfg(feature = "hydrate")]
async fn with_timeout<F, T>(fut: F) -> Result<T, String>
where
    F: std::future::Future<Output = Result<T, String>>,
{
    use futures::future::{Either, select};

    let timeout = gloo_timers::future::TimeoutFuture::new(CLIENT_REQUEST_TIMEOUT_MS);
    futures::pin_mut!(fut, timeout);
    match select(fut, timeout).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => Err(TIMEOUT_MESSAGE.to_owned()),
    }
}

#[cfg(feature = "hydrate")]
async fn check_status(resp: gloo_net::http::Response) -> Result<gloo_net::http::Response, String> {
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    Err(failure_message(status, &body))
}

#[cfg(feature = "hydrate")]
async fn post_json<B, R>(url: &str, body: &B) -> Result<R, String>
where
    B: serde::Serialize,
    R: serde::de::DeserializeOwned,
{
    with_timeout(async {
        let resp = gloo_net::http::Request::post(url)
            .json(body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        let resp = check_status(resp).await?;
        resp.json::<R>().await.map_err(|e| e.to_string())
    })
    .await
}

/// Create an account via `POST /api/auth/signup`.
///
/// # Errors
///
/// Returns the server's error message, or a transport/timeout description.
pub async fn sign_up(credentials: &Credentials) -> Result<SignUpResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        post_json(SIGN_UP_ENDPOINT, credentials).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = credentials;
        Err(SERVER_STUB_MESSAGE.to_owned())
    }
}

/// Sign in via `POST /api/auth/login`. The server sets the session cookies.
///
/// # Errors
///
/// Returns the server's error message, or a transport/timeout description.
pub async fn sign_in_with_password(credentials: &Credentials) -> Result<Session, String> {
    #[cfg(feature = "hydrate")]
    {
        post_json(LOGIN_ENDPOINT, credentials).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = credentials;
        Err(SERVER_STUB_MESSAGE.to_owned())
    }
}

/// Sign out via `POST /api/auth/logout`.
///
/// # Errors
///
/// Returns the server's error message, or a transport/timeout description.
pub async fn sign_out() -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        with_timeout(async {
            let resp = gloo_net::http::Request::post(LOGOUT_ENDPOINT)
                .send()
                .await
                .map_err(|e| e.to_string())?;
            check_status(resp).await.map(|_| ())
        })
        .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(SERVER_STUB_MESSAGE.to_owned())
    }
}

/// Fetch the session bound to the current cookies via `GET /api/auth/session`.
///
/// # Errors
///
/// Returns an error string if the request fails; an anonymous visitor is
/// `Ok(None)`, not an error.
pub async fn fetch_session() -> Result<Option<Session>, String> {
    #[cfg(feature = "hydrate")]
    {
        with_timeout(async {
            let resp = gloo_net::http::Request::get(SESSION_ENDPOINT)
                .send()
                .await
                .map_err(|e| e.to_string())?;
            let resp = check_status(resp).await?;
            let body: SessionResponse = resp.json().await.map_err(|e| e.to_string())?;
            Ok(body.session)
        })
        .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(SERVER_STUB_MESSAGE.to_owned())
    }
}

/// Store an opt-in record via `POST /api/opt-ins`.
///
/// # Errors
///
/// Returns the server's error message, or a transport/timeout description.
pub async fn insert_opt_in(record: &OptInRecord) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        with_timeout(async {
            let resp = gloo_net::http::Request::post(OPT_IN_ENDPOINT)
                .json(record)
                .map_err(|e| e.to_string())?
                .send()
                .await
                .map_err(|e| e.to_string())?;
            check_status(resp).await.map(|_| ())
        })
        .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = record;
        Err(SERVER_STUB_MESSAGE.to_owned())
    }
}
