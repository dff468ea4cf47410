use std::sync::{Arc, Mutex};

use futures::executor::block_on;

use super::*;
use crate::net::types::SessionUser;
use crate::state::shell::{LoginPanel, ShellState};
use crate::state::test_helpers::{FakeAuth, session};
use crate::state::toast::ToastVariant;

fn filled(mode: AuthMode) -> AuthFormState {
    AuthFormState { email: "a@b.com".to_owned(), password: "pw123456".to_owned(), mode, loading: false }
}

/// Shell signed out with the login panel open, wired to `auth`'s events.
fn shell_listening(auth: &FakeAuth) -> (Arc<Mutex<ShellState>>, crate::net::auth_events::Subscription) {
    let shell = Arc::new(Mutex::new(ShellState::default()));
    {
        let mut s = shell.lock().unwrap();
        s.restore(None);
        assert!(s.request_login());
    }
    let sink = Arc::clone(&shell);
    let sub = auth.on_auth_state_change(move |event| sink.lock().unwrap().apply_event(event));
    (shell, sub)
}

/// Drive one full submit the way the component does.
fn run_submit(auth: &FakeAuth, form: &mut AuthFormState, shell: &Mutex<ShellState>) -> AuthOutcome {
    let credentials = form.begin_submit().unwrap();
    let outcome = block_on(submit(auth, &credentials, form.mode));
    form.finish();
    if let Some(session) = outcome.session() {
        shell.lock().unwrap().signed_in(session.clone());
    }
    outcome
}

// =============================================================
// AuthMode
// =============================================================

#[test]
fn mode_defaults_to_login_and_toggles() {
    assert_eq!(AuthMode::default(), AuthMode::Login);
    assert_eq!(AuthMode::Login.toggled(), AuthMode::SignUp);
    assert_eq!(AuthMode::SignUp.toggled(), AuthMode::Login);
}

#[test]
fn mode_labels() {
    assert_eq!(AuthMode::Login.submit_label(), "Login");
    assert_eq!(AuthMode::SignUp.submit_label(), "Sign Up");
    assert_eq!(AuthMode::SignUp.heading(), "Create Account");
    assert!(AuthMode::Login.toggle_label().contains("Sign Up"));
}

// =============================================================
// begin_submit / finish
// =============================================================

#[test]
fn begin_submit_requires_both_fields() {
    let mut form = AuthFormState { email: "  ".to_owned(), password: "pw".to_owned(), ..AuthFormState::default() };
    assert_eq!(form.begin_submit(), Err(ValidationError::MissingCredentials));
    assert!(!form.loading);

    let mut form = AuthFormState { email: "a@b.com".to_owned(), ..AuthFormState::default() };
    assert_eq!(form.begin_submit(), Err(ValidationError::MissingCredentials));
}

#[test]
fn begin_submit_trims_email_and_marks_loading() {
    let mut form = AuthFormState { email: " a@b.com ".to_owned(), password: "pw".to_owned(), ..AuthFormState::default() };
    let creds = form.begin_submit().unwrap();
    assert_eq!(creds.email, "a@b.com");
    assert_eq!(creds.password, "pw");
    assert!(form.loading);
}

#[test]
fn only_one_submit_in_flight() {
    let mut form = filled(AuthMode::Login);
    assert!(form.begin_submit().is_ok());
    assert_eq!(form.begin_submit(), Err(ValidationError::RequestInFlight));
    form.finish();
    assert!(form.begin_submit().is_ok());
}

#[test]
fn validation_notice_is_destructive() {
    let notice = validation_notice(ValidationError::MissingCredentials);
    assert_eq!(notice.variant, ToastVariant::Destructive);
    assert_eq!(notice.description, "Email and password are required.");
}

// =============================================================
// Outcomes
// =============================================================

#[test]
fn sign_up_response_with_session_is_signed_in() {
    let s = session("u1", "a@b.com");
    let outcome = AuthOutcome::from(SignUpResponse { user: s.user.clone(), session: Some(s.clone()) });
    assert_eq!(outcome, AuthOutcome::SignedIn(s));
}

#[test]
fn sign_up_response_without_session_is_pending() {
    let user = SessionUser { id: "u1".to_owned(), email: None };
    assert_eq!(AuthOutcome::from(SignUpResponse { user, session: None }), AuthOutcome::PendingVerification);
}

#[test]
fn outcome_notices_match_mode() {
    let s = session("u1", "a@b.com");
    assert_eq!(AuthOutcome::SignedIn(s.clone()).notice(AuthMode::Login).title, "Login Successful!");
    assert_eq!(
        AuthOutcome::SignedIn(s).notice(AuthMode::SignUp).description,
        "Welcome! You are now logged in."
    );
    assert_eq!(
        AuthOutcome::PendingVerification.notice(AuthMode::SignUp).description,
        "Please check your email to verify your account."
    );
}

// =============================================================
// Scenarios
// =============================================================

#[test]
fn sign_up_with_immediate_session_logs_in_and_unmounts_form() {
    let s = session("u1", "a@b.com");
    let auth = FakeAuth {
        sign_up_result: Some(Ok(SignUpResponse { user: s.user.clone(), session: Some(s.clone()) })),
        ..FakeAuth::default()
    };
    let (shell, _sub) = shell_listening(&auth);
    let mut form = filled(AuthMode::SignUp);

    let outcome = run_submit(&auth, &mut form, &shell);

    assert_eq!(outcome.notice(AuthMode::SignUp).variant, ToastVariant::Default);
    assert_eq!(outcome.notice(AuthMode::SignUp).title, "Sign Up Successful!");
    let shell = shell.lock().unwrap();
    assert_eq!(shell.session(), Some(&s));
    assert!(!shell.auth_form_visible());
    assert_eq!(auth.calls(), vec!["sign_up:a@b.com".to_owned()]);
}

#[test]
fn sign_up_pending_verification_keeps_form_mounted() {
    let auth = FakeAuth {
        sign_up_result: Some(Ok(SignUpResponse {
            user: SessionUser { id: "u1".to_owned(), email: Some("a@b.com".to_owned()) },
            session: None,
        })),
        ..FakeAuth::default()
    };
    let (shell, _sub) = shell_listening(&auth);
    let mut form = filled(AuthMode::SignUp);

    let outcome = run_submit(&auth, &mut form, &shell);

    assert_eq!(outcome, AuthOutcome::PendingVerification);
    assert!(outcome.notice(AuthMode::SignUp).description.contains("verify your account"));
    let shell = shell.lock().unwrap();
    assert!(shell.session().is_none());
    assert!(shell.auth_form_visible());
    assert_eq!(shell.login, LoginPanel::Shown);
}

#[test]
fn login_failure_reports_message_and_reenables_submit() {
    let auth = FakeAuth {
        sign_in_result: Some(Err(AuthError("Invalid credentials".to_owned()))),
        ..FakeAuth::default()
    };
    let (shell, _sub) = shell_listening(&auth);
    let mut form = AuthFormState { password: "wrong".to_owned(), ..filled(AuthMode::Login) };

    let outcome = run_submit(&auth, &mut form, &shell);

    let notice = outcome.notice(AuthMode::Login);
    assert_eq!(notice.variant, ToastVariant::Destructive);
    assert_eq!(notice.description, "Invalid credentials");
    assert!(!form.loading);
    assert_eq!(form.email, "a@b.com");
    assert_eq!(form.password, "wrong");
    assert!(shell.lock().unwrap().session().is_none());
    assert_eq!(auth.calls().len(), 1);
}

#[test]
fn login_success_forwards_session() {
    let s = session("u2", "a@b.com");
    let auth = FakeAuth { sign_in_result: Some(Ok(s.clone())), ..FakeAuth::default() };
    let (shell, _sub) = shell_listening(&auth);
    let mut form = filled(AuthMode::Login);

    let outcome = run_submit(&auth, &mut form, &shell);

    assert_eq!(outcome.notice(AuthMode::Login).description, "Welcome back!");
    assert_eq!(shell.lock().unwrap().session(), Some(&s));
    assert!(!form.loading);
}
