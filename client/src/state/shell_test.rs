use super::*;
use crate::net::types::SessionUser;

fn session(id: &str) -> Session {
    Session { user: SessionUser { id: id.to_owned(), email: Some(format!("{id}@example.com")) }, expires_at: None }
}

fn absent_with_login_shown() -> ShellState {
    let mut state = ShellState::default();
    state.restore(None);
    assert!(state.request_login());
    state
}

// =============================================================
// Defaults and startup
// =============================================================

#[test]
fn default_is_unknown_hidden_menu_closed() {
    let state = ShellState::default();
    assert_eq!(state.phase, SessionPhase::Unknown);
    assert_eq!(state.login, LoginPanel::Hidden);
    assert!(!state.menu_open);
    assert!(!state.logout_pending);
    assert!(state.session().is_none());
}

#[test]
fn restore_with_session_moves_to_present() {
    let mut state = ShellState::default();
    state.restore(Some(session("a")));
    assert_eq!(state.session(), Some(&session("a")));
}

#[test]
fn restore_without_session_moves_to_absent() {
    let mut state = ShellState::default();
    state.restore(None);
    assert_eq!(state.phase, SessionPhase::Absent);
}

#[test]
fn late_restore_does_not_override_event() {
    let mut state = ShellState::default();
    state.apply_event(&AuthEvent::SignedIn(session("fresh")));
    state.restore(None);
    assert_eq!(state.session(), Some(&session("fresh")));
}

// =============================================================
// Auth events
// =============================================================

#[test]
fn session_tracks_last_applied_event() {
    let sequences: Vec<Vec<AuthEvent>> = vec![
        vec![AuthEvent::SignedIn(session("a"))],
        vec![AuthEvent::SignedIn(session("a")), AuthEvent::SignedOut],
        vec![AuthEvent::SignedOut, AuthEvent::SignedIn(session("b"))],
        vec![
            AuthEvent::SignedIn(session("a")),
            AuthEvent::SignedIn(session("b")),
            AuthEvent::SignedOut,
            AuthEvent::SignedIn(session("c")),
        ],
        vec![AuthEvent::SignedIn(session("a")), AuthEvent::SignedIn(session("a"))],
    ];

    for events in sequences {
        let mut state = ShellState::default();
        for event in &events {
            state.apply_event(event);
        }
        let last = events.last().and_then(AuthEvent::session);
        assert_eq!(state.session(), last, "sequence {events:?}");
    }
}

#[test]
fn signed_in_event_auto_dismisses_login_panel() {
    let mut state = absent_with_login_shown();
    state.apply_event(&AuthEvent::SignedIn(session("a")));
    assert_eq!(state.login, LoginPanel::Hidden);
    assert!(!state.auth_form_visible());
}

#[test]
fn signed_out_event_moves_to_absent() {
    let mut state = ShellState::default();
    state.restore(Some(session("a")));
    state.apply_event(&AuthEvent::SignedOut);
    assert_eq!(state.phase, SessionPhase::Absent);
}

#[test]
fn form_success_and_event_converge() {
    let mut state = absent_with_login_shown();
    state.signed_in(session("a"));
    state.apply_event(&AuthEvent::SignedIn(session("a")));
    assert_eq!(state.session(), Some(&session("a")));
    assert_eq!(state.login, LoginPanel::Hidden);
}

// =============================================================
// Login panel
// =============================================================

#[test]
fn request_login_only_valid_when_absent() {
    let mut unknown = ShellState::default();
    assert!(!unknown.request_login());
    assert_eq!(unknown.login, LoginPanel::Hidden);

    let mut present = ShellState::default();
    present.restore(Some(session("a")));
    assert!(!present.request_login());
    assert_eq!(present.login, LoginPanel::Hidden);

    let state = absent_with_login_shown();
    assert_eq!(state.login, LoginPanel::Shown);
}

#[test]
fn request_login_closes_menu() {
    let mut state = ShellState::default();
    state.restore(None);
    state.toggle_menu();
    assert!(state.request_login());
    assert!(!state.menu_open);
}

#[test]
fn auth_form_visible_iff_absent_and_shown() {
    let phases = [SessionPhase::Unknown, SessionPhase::Absent, SessionPhase::Present(session("a"))];
    for phase in phases {
        for login in [LoginPanel::Hidden, LoginPanel::Shown] {
            let state = ShellState { phase: phase.clone(), login, ..ShellState::default() };
            let expected = phase == SessionPhase::Absent && login == LoginPanel::Shown;
            assert_eq!(state.auth_form_visible(), expected, "{phase:?} x {login:?}");
        }
    }
}

#[test]
fn dismiss_login_hides_panel() {
    let mut state = absent_with_login_shown();
    state.dismiss_login();
    assert!(!state.auth_form_visible());
}

#[test]
fn dismissed_login_can_be_reopened() {
    let mut state = absent_with_login_shown();
    state.dismiss_login();
    assert!(state.login_available());
    assert!(state.session().is_none());
    assert!(state.request_login());
    assert!(state.auth_form_visible());
}

// =============================================================
// Logout
// =============================================================

#[test]
fn logout_unavailable_unless_present() {
    let mut unknown = ShellState::default();
    assert!(!unknown.begin_logout());

    let mut absent = ShellState::default();
    absent.restore(None);
    assert!(!absent.begin_logout());
    assert!(!absent.logout_pending);
    assert_eq!(absent.phase, SessionPhase::Absent);
}

#[test]
fn logout_success_clears_session() {
    let mut state = ShellState::default();
    state.restore(Some(session("a")));
    assert!(state.begin_logout());
    state.logout_succeeded();
    assert_eq!(state.phase, SessionPhase::Absent);
    assert!(!state.logout_pending);
    assert_eq!(state.login, LoginPanel::Hidden);
}

#[test]
fn logout_failure_keeps_session() {
    let mut state = ShellState::default();
    state.restore(Some(session("a")));
    assert!(state.begin_logout());
    state.logout_failed();
    assert_eq!(state.session(), Some(&session("a")));
    assert!(!state.logout_pending);
    assert!(state.logout_available());
}

#[test]
fn second_logout_while_pending_is_refused() {
    let mut state = ShellState::default();
    state.restore(Some(session("a")));
    assert!(state.begin_logout());
    assert!(!state.begin_logout());
}

#[test]
fn login_and_logout_availability_are_exclusive() {
    let mut state = ShellState::default();
    assert!(!state.login_available());
    assert!(!state.logout_available());

    state.restore(None);
    assert!(state.login_available());
    assert!(!state.logout_available());

    state.apply_event(&AuthEvent::SignedIn(session("a")));
    assert!(!state.login_available());
    assert!(state.logout_available());
}

// =============================================================
// Menu
// =============================================================

#[test]
fn navigation_closes_menu_but_keeps_login_request() {
    let mut state = absent_with_login_shown();
    state.toggle_menu();
    assert!(state.menu_open);
    state.navigated();
    assert!(!state.menu_open);
    assert_eq!(state.login, LoginPanel::Shown);
}

#[test]
fn logout_notices() {
    let ok = logout_notice(&Ok(()));
    assert_eq!(ok.title, "Logged Out");
    assert_eq!(ok.variant, crate::state::toast::ToastVariant::Default);

    let failed = logout_notice(&Err(AuthError("network down".to_owned())));
    assert_eq!(failed.title, "Logout Error");
    assert_eq!(failed.description, "network down");
    assert_eq!(failed.variant, crate::state::toast::ToastVariant::Destructive);
}
