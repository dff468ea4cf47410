//! Page-shell session and visibility state machine.
//!
//! SYSTEM CONTEXT
//! ==============
//! The shell is the single owner of the session. Navigation, the login panel
//! and the opt-in form read it through a context-provided
//! `RwSignal<ShellState>`; all mutation goes through the transition methods
//! below, fed by auth-state events, the startup session lookup, and explicit
//! login/logout actions.
//!
//! States are `{Unknown, Absent, Present} x {Hidden, Shown}` plus the mobile
//! menu flag. The auth form is visible exactly in `Absent x Shown`.

#[cfg(test)]
#[path = "shell_test.rs"]
mod shell_test;

use crate::net::types::{AuthError, AuthEvent, Session};
use crate::state::toast::Notice;

/// What the shell knows about the current session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SessionPhase {
    /// Startup lookup not answered yet and no event seen.
    #[default]
    Unknown,
    Absent,
    Present(Session),
}

/// Whether the login panel has been requested.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoginPanel {
    #[default]
    Hidden,
    Shown,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ShellState {
    pub phase: SessionPhase,
    pub login: LoginPanel,
    pub menu_open: bool,
    /// A sign-out request is in flight.
    pub logout_pending: bool,
}

impl ShellState {
    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        match &self.phase {
            SessionPhase::Present(session) => Some(session),
            SessionPhase::Unknown | SessionPhase::Absent => None,
        }
    }

    /// Apply the startup `get_session()` answer.
    ///
    /// Ignored once any event has moved the shell out of `Unknown`: events are
    /// always newer than the lookup that raced them.
    pub fn restore(&mut self, session: Option<Session>) {
        if self.phase != SessionPhase::Unknown {
            return;
        }
        self.phase = match session {
            Some(session) => SessionPhase::Present(session),
            None => SessionPhase::Absent,
        };
    }

    /// Apply an auth-state change. Last write wins.
    pub fn apply_event(&mut self, event: &AuthEvent) {
        match event {
            AuthEvent::SignedIn(session) => self.signed_in(session.clone()),
            AuthEvent::SignedOut => self.signed_out(),
        }
    }

    /// Session handed back by the auth form's success callback.
    pub fn signed_in(&mut self, session: Session) {
        self.phase = SessionPhase::Present(session);
        self.login = LoginPanel::Hidden;
    }

    fn signed_out(&mut self) {
        self.phase = SessionPhase::Absent;
        self.login = LoginPanel::Hidden;
    }

    /// Show the login panel. Only valid while signed out.
    pub fn request_login(&mut self) -> bool {
        if !self.login_available() {
            return false;
        }
        self.login = LoginPanel::Shown;
        self.menu_open = false;
        true
    }

    /// Hide the login panel without touching the session.
    pub fn dismiss_login(&mut self) {
        self.login = LoginPanel::Hidden;
    }

    /// Claim the logout slot. Returns `false` when not signed in or when a
    /// logout is already running; the caller must then not call sign-out.
    pub fn begin_logout(&mut self) -> bool {
        if !self.logout_available() || self.logout_pending {
            return false;
        }
        self.logout_pending = true;
        self.menu_open = false;
        true
    }

    pub fn logout_succeeded(&mut self) {
        self.logout_pending = false;
        self.signed_out();
    }

    /// Sign-out failed; the session is left untouched.
    pub fn logout_failed(&mut self) {
        self.logout_pending = false;
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Route changed.
    pub fn navigated(&mut self) {
        self.close_menu();
    }

    #[must_use]
    pub fn auth_form_visible(&self) -> bool {
        self.phase == SessionPhase::Absent && self.login == LoginPanel::Shown
    }

    #[must_use]
    pub fn login_available(&self) -> bool {
        self.phase == SessionPhase::Absent
    }

    #[must_use]
    pub fn logout_available(&self) -> bool {
        matches!(self.phase, SessionPhase::Present(_))
    }
}

/// Toast reporting a finished sign-out.
#[must_use]
pub fn logout_notice(result: &Result<(), AuthError>) -> Notice {
    match result {
        Ok(()) => Notice::info("Logged Out", "You have been successfully logged out."),
        Err(err) => Notice::error("Logout Error", err.to_string()),
    }
}
