use super::*;

#[test]
fn failure_message_uses_error_body() {
    assert_eq!(failure_message(400, r#"{"error":"Invalid credentials"}"#), "Invalid credentials");
}

#[test]
fn failure_message_falls_back_to_status_for_plain_text() {
    assert_eq!(failure_message(502, "Bad Gateway"), "request failed: 502");
}

#[test]
fn failure_message_falls_back_to_status_for_blank_error() {
    assert_eq!(failure_message(500, r#"{"error":"  "}"#), "request failed: 500");
}

#[test]
fn endpoints_live_under_api_prefix() {
    for endpoint in [SIGN_UP_ENDPOINT, LOGIN_ENDPOINT, LOGOUT_ENDPOINT, SESSION_ENDPOINT, OPT_IN_ENDPOINT] {
        assert!(endpoint.starts_with("/api/"), "{endpoint}");
    }
}

#[test]
fn timeout_message_is_human_readable() {
    assert_eq!(TIMEOUT_MESSAGE, "request timed out");
}

#[test]
fn server_stubs_report_unavailable() {
    let result = futures::executor::block_on(fetch_session());
    assert_eq!(result, Err("not available on server".to_owned()));
}
