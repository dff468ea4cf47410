use super::*;
use crate::state::test_helpers::{MockAuth, rejected, tokens, user};
use crate::supabase::types::AuthError;

#[tokio::test]
async fn no_cookies_is_anonymous_without_remote_calls() {
    let auth = MockAuth::default();
    let lookup = resolve_session(&auth, None, None).await.unwrap();
    assert_eq!(lookup.session, None);
    assert_eq!(lookup.cookies, CookieUpdate::Keep);
    assert!(auth.calls().is_empty());
}

#[tokio::test]
async fn valid_access_token_resolves_user() {
    let auth = MockAuth { valid_access_token: Some(("at".into(), user("u1", "a@b.com"))), ..MockAuth::default() };

    let lookup = resolve_session(&auth, Some("at"), Some("rt")).await.unwrap();

    let session = lookup.session.unwrap();
    assert_eq!(session.user.id, "u1");
    assert_eq!(session.email(), Some("a@b.com"));
    assert_eq!(lookup.access_token.as_deref(), Some("at"));
    assert_eq!(lookup.cookies, CookieUpdate::Keep);
    assert_eq!(auth.calls(), vec!["get_user:at"]);
}

#[tokio::test]
async fn expired_access_token_is_refreshed() {
    let grant = tokens("at2", "rt2", user("u1", "a@b.com"));
    let auth = MockAuth { refresh: Ok(grant.clone()), ..MockAuth::default() };

    let lookup = resolve_session(&auth, Some("stale"), Some("rt")).await.unwrap();

    assert_eq!(lookup.session.unwrap().user.id, "u1");
    assert_eq!(lookup.access_token.as_deref(), Some("at2"));
    assert_eq!(lookup.cookies, CookieUpdate::Replace(grant));
    assert_eq!(auth.calls(), vec!["get_user:stale", "refresh:rt"]);
}

#[tokio::test]
async fn refresh_only_cookie_is_refreshed() {
    let auth = MockAuth { refresh: Ok(tokens("at2", "rt2", user("u1", "a@b.com"))), ..MockAuth::default() };
    let lookup = resolve_session(&auth, None, Some("rt")).await.unwrap();
    assert!(lookup.session.is_some());
    assert_eq!(auth.calls(), vec!["refresh:rt"]);
}

#[tokio::test]
async fn rejected_refresh_clears_cookies() {
    let auth = MockAuth { refresh: Err(rejected(400, "Invalid Refresh Token")), ..MockAuth::default() };
    let lookup = resolve_session(&auth, Some("stale"), Some("rt")).await.unwrap();
    assert_eq!(lookup.session, None);
    assert_eq!(lookup.access_token, None);
    assert_eq!(lookup.cookies, CookieUpdate::Clear);
}

#[tokio::test]
async fn rejected_access_without_refresh_clears_cookies() {
    let auth = MockAuth::default();
    let lookup = resolve_session(&auth, Some("stale"), None).await.unwrap();
    assert_eq!(lookup.session, None);
    assert_eq!(lookup.cookies, CookieUpdate::Clear);
}

#[tokio::test]
async fn transport_failure_propagates() {
    let auth = MockAuth { refresh: Err(AuthError::Transport("timed out".into())), ..MockAuth::default() };
    let err = resolve_session(&auth, None, Some("rt")).await.unwrap_err();
    assert_eq!(err, AuthError::Transport("timed out".into()));
}
