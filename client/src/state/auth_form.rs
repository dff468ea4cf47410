//! Login / sign-up form state and submit flow.
//!
//! SYSTEM CONTEXT
//! ==============
//! The `AuthForm` component owns one `AuthFormState`. `begin_submit`
//! validates input and claims the single in-flight slot; `submit` talks to
//! the `AuthClient`; `finish` releases the slot whatever the outcome. The
//! resulting `AuthOutcome` decides the toast and whether the shell's success
//! callback fires.

#[cfg(test)]
#[path = "auth_form_test.rs"]
mod auth_form_test;

use crate::net::remote::AuthClient;
use crate::net::types::{AuthError, Credentials, Session, SignUpResponse, ValidationError};
use crate::state::toast::Notice;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    Login,
    SignUp,
}

impl AuthMode {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Login => Self::SignUp,
            Self::SignUp => Self::Login,
        }
    }

    #[must_use]
    pub fn heading(self) -> &'static str {
        match self {
            Self::Login => "Login to Your Account",
            Self::SignUp => "Create Account",
        }
    }

    #[must_use]
    pub fn submit_label(self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::SignUp => "Sign Up",
        }
    }

    #[must_use]
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Login => "Don't have an account? Sign Up",
            Self::SignUp => "Already have an account? Login",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthFormState {
    pub email: String,
    pub password: String,
    pub mode: AuthMode,
    pub loading: bool,
}

impl AuthFormState {
    /// Validate the fields and mark the form busy.
    ///
    /// # Errors
    ///
    /// `RequestInFlight` while a submit is outstanding, `MissingCredentials`
    /// when either field is blank. The form is left unchanged on error.
    pub fn begin_submit(&mut self) -> Result<Credentials, ValidationError> {
        if self.loading {
            return Err(ValidationError::RequestInFlight);
        }
        let email = self.email.trim();
        if email.is_empty() || self.password.is_empty() {
            return Err(ValidationError::MissingCredentials);
        }
        let credentials = Credentials { email: email.to_owned(), password: self.password.clone() };
        self.loading = true;
        Ok(credentials)
    }

    /// Release the in-flight slot. Fields stay populated.
    pub fn finish(&mut self) {
        self.loading = false;
    }

    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
    }
}

/// Result of one submit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthOutcome {
    /// Signed in (login, or sign-up with an immediate session).
    SignedIn(Session),
    /// Account created; email confirmation required before a session exists.
    PendingVerification,
    Failed(AuthError),
}

impl AuthOutcome {
    /// Session to forward to the shell's success callback, if any.
    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        match self {
            Self::SignedIn(session) => Some(session),
            Self::PendingVerification | Self::Failed(_) => None,
        }
    }

    /// Toast describing this outcome for the given mode.
    #[must_use]
    pub fn notice(&self, mode: AuthMode) -> Notice {
        match (self, mode) {
            (Self::SignedIn(_), AuthMode::SignUp) => {
                Notice::info("Sign Up Successful!", "Welcome! You are now logged in.")
            }
            (Self::SignedIn(_), AuthMode::Login) => Notice::info("Login Successful!", "Welcome back!"),
            (Self::PendingVerification, _) => {
                Notice::info("Sign Up Successful!", "Please check your email to verify your account.")
            }
            (Self::Failed(err), _) => Notice::error("Authentication Error", err.to_string()),
        }
    }
}

impl From<SignUpResponse> for AuthOutcome {
    fn from(response: SignUpResponse) -> Self {
        match response.session {
            Some(session) => Self::SignedIn(session),
            None => Self::PendingVerification,
        }
    }
}

/// Toast for input rejected before any request was made.
#[must_use]
pub fn validation_notice(err: ValidationError) -> Notice {
    Notice::error("Authentication Error", err.to_string())
}

/// Run one submit against `client`. Never retries.
pub async fn submit<C: AuthClient>(client: &C, credentials: &Credentials, mode: AuthMode) -> AuthOutcome {
    match mode {
        AuthMode::SignUp => match client.sign_up(credentials).await {
            Ok(response) => AuthOutcome::from(response),
            Err(err) => AuthOutcome::Failed(err),
        },
        AuthMode::Login => match client.sign_in_with_password(credentials).await {
            Ok(session) => AuthOutcome::SignedIn(session),
            Err(err) => AuthOutcome::Failed(err),
        },
    }
}
