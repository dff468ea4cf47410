use super::*;

// =============================================================================
// error_message
// =============================================================================

#[test]
fn error_message_prefers_msg() {
    let body = r#"{"msg":"User already registered","message":"other","error":"x"}"#;
    assert_eq!(error_message(422, body), "User already registered");
}

#[test]
fn error_message_falls_through_in_order() {
    assert_eq!(
        error_message(400, r#"{"error":"invalid_grant","error_description":"Invalid login credentials"}"#),
        "Invalid login credentials"
    );
    assert_eq!(error_message(409, r#"{"code":"23505","message":"duplicate key value"}"#), "duplicate key value");
    assert_eq!(error_message(401, r#"{"error":"unauthorized"}"#), "unauthorized");
}

#[test]
fn error_message_skips_blank_and_non_string_fields() {
    assert_eq!(error_message(400, r#"{"msg":"  ","message":{"nested":true},"error":"bad"}"#), "bad");
}

#[test]
fn error_message_falls_back_to_status() {
    assert_eq!(error_message(503, "<html>upstream down</html>"), "503");
    assert_eq!(error_message(500, "{}"), "500");
    assert_eq!(error_message(500, ""), "500");
}

// =============================================================================
// AuthError
// =============================================================================

#[test]
fn rejection_covers_client_errors_only() {
    assert!(AuthError::Rejected { status: 400, message: "m".into() }.is_rejection());
    assert!(AuthError::Rejected { status: 403, message: "m".into() }.is_rejection());
    assert!(!AuthError::Rejected { status: 500, message: "m".into() }.is_rejection());
    assert!(!AuthError::Transport("timeout".into()).is_rejection());
}

#[test]
fn rejected_displays_message_verbatim() {
    let err = AuthError::Rejected { status: 400, message: "Invalid login credentials".into() };
    assert_eq!(err.to_string(), "Invalid login credentials");
}

// =============================================================================
// sign-up parsing
// =============================================================================

#[test]
fn sign_up_with_access_token_is_a_session() {
    let body = r#"{
        "access_token":"at","refresh_token":"rt","expires_in":3600,"expires_at":1700003600,
        "token_type":"bearer","user":{"id":"u1","email":"a@b.com","role":"authenticated"}
    }"#;
    let outcome = parse_sign_up_body(body).unwrap();
    assert_eq!(outcome.user.id, "u1");
    let tokens = outcome.tokens.unwrap();
    assert_eq!(tokens.access_token, "at");
    assert_eq!(tokens.refresh_token, "rt");
}

#[test]
fn sign_up_without_access_token_is_pending_user() {
    let body = r#"{"id":"u2","email":"new@b.com","confirmation_sent_at":"2024-01-01T00:00:00Z"}"#;
    let outcome = parse_sign_up_body(body).unwrap();
    assert_eq!(outcome.user, GoTrueUser { id: "u2".into(), email: Some("new@b.com".into()) });
    assert!(outcome.tokens.is_none());
}

#[test]
fn sign_up_garbage_is_unexpected() {
    assert!(matches!(parse_sign_up_body("not json"), Err(AuthError::Unexpected(_))));
    assert!(matches!(parse_sign_up_body(r#"{"email":"no id"}"#), Err(AuthError::Unexpected(_))));
}

// =============================================================================
// session view
// =============================================================================

fn grant(expires_in: Option<i64>, expires_at: Option<i64>) -> AuthTokens {
    AuthTokens {
        access_token: "at".into(),
        refresh_token: "rt".into(),
        expires_in,
        expires_at,
        user: GoTrueUser { id: "u1".into(), email: Some("a@b.com".into()) },
    }
}

#[test]
fn expiry_prefers_explicit_timestamp() {
    assert_eq!(grant(Some(3600), Some(42)).expiry(1_000), Some(42));
    assert_eq!(grant(Some(3600), None).expiry(1_000), Some(4_600));
    assert_eq!(grant(None, None).expiry(1_000), None);
}

#[test]
fn session_view_carries_user_only() {
    let session = grant(None, Some(99)).session();
    assert_eq!(session.user.id, "u1");
    assert_eq!(session.email(), Some("a@b.com"));
    assert_eq!(session.expires_at, Some(99));
}

#[test]
fn blank_provider_email_becomes_none() {
    let user: SessionUser = GoTrueUser { id: "u1".into(), email: Some(String::new()) }.into();
    assert_eq!(user.email, None);
}
