use super::*;

fn session(email: Option<&str>) -> Session {
    Session {
        user: SessionUser { id: "u1".to_owned(), email: email.map(str::to_owned) },
        expires_at: Some(1_700_000_000),
    }
}

// =============================================================
// Session
// =============================================================

#[test]
fn session_email_returns_present_email() {
    assert_eq!(session(Some("u@v.com")).email(), Some("u@v.com"));
}

#[test]
fn session_email_ignores_missing_or_empty() {
    assert_eq!(session(None).email(), None);
    assert_eq!(session(Some("")).email(), None);
}

#[test]
fn session_deserializes_without_expiry() {
    let parsed: Session = serde_json::from_str(r#"{"user":{"id":"u1","email":"a@b.com"}}"#).unwrap();
    assert_eq!(parsed.user.id, "u1");
    assert_eq!(parsed.expires_at, None);
}

#[test]
fn session_response_accepts_null_session() {
    let parsed: SessionResponse = serde_json::from_str(r#"{"session":null}"#).unwrap();
    assert!(parsed.session.is_none());
}

#[test]
fn sign_up_response_without_session_field() {
    let parsed: SignUpResponse = serde_json::from_str(r#"{"user":{"id":"u9"}}"#).unwrap();
    assert_eq!(parsed.user.id, "u9");
    assert!(parsed.session.is_none());
}

// =============================================================
// Credentials
// =============================================================

#[test]
fn credentials_debug_redacts_password() {
    let creds = Credentials { email: "a@b.com".to_owned(), password: "hunter22".to_owned() };
    let rendered = format!("{creds:?}");
    assert!(rendered.contains("a@b.com"));
    assert!(!rendered.contains("hunter22"));
}

// =============================================================
// OptInRecord
// =============================================================

#[test]
fn opt_in_record_maps_blank_fields_to_none() {
    let record = OptInRecord::from_form(None, "  ", "", true);
    assert_eq!(record.email, None);
    assert_eq!(record.phone_number, None);
    assert_eq!(record.user_id, None);
    assert!(record.opted_in);
    assert_eq!(record.opt_in_source, OPT_IN_SOURCE);
}

#[test]
fn opt_in_record_keeps_trimmed_values() {
    let record = OptInRecord::from_form(Some("u1"), " x@y.com ", "+1 555", true);
    assert_eq!(record.user_id.as_deref(), Some("u1"));
    assert_eq!(record.email.as_deref(), Some("x@y.com"));
    assert_eq!(record.phone_number.as_deref(), Some("+1 555"));
}

#[test]
fn opt_in_record_serializes_nulls() {
    let record = OptInRecord::from_form(None, "", "", true);
    let value = serde_json::to_value(&record).unwrap();
    assert!(value["user_id"].is_null());
    assert!(value["email"].is_null());
    assert_eq!(value["opt_in_source"], "website_form");
}

// =============================================================
// Errors
// =============================================================

#[test]
fn errors_display_message_verbatim() {
    assert_eq!(AuthError("Invalid credentials".to_owned()).to_string(), "Invalid credentials");
    assert_eq!(StoreError("duplicate key".to_owned()).to_string(), "duplicate key");
    assert_eq!(ValidationError::ConsentRequired.to_string(), "Please agree to the terms to opt-in.");
}
