//! Message opt-in form state and submit flow.
//!
//! DESIGN
//! ======
//! When a session carries an email the form adopts it and hides the email
//! field; `email_from_session` remembers that so a successful submit keeps
//! the adopted address instead of clearing it. Consent is checked before any
//! record is built, so an unchecked box never reaches the network.

#[cfg(test)]
#[path = "opt_in_test.rs"]
mod opt_in_test;

use crate::net::remote::RecordClient;
use crate::net::types::{OptInRecord, Session, StoreError, ValidationError};
use crate::state::toast::Notice;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OptInFormState {
    pub email: String,
    pub phone: String,
    pub consent: bool,
    pub loading: bool,
    /// `email` was copied from the current session.
    pub email_from_session: bool,
}

impl OptInFormState {
    /// Track the shell's session. A session email replaces the field and
    /// locks it; losing the session unlocks the field and drops the adopted
    /// address.
    pub fn sync_session(&mut self, session: Option<&Session>) {
        match session.and_then(Session::email) {
            Some(email) => {
                self.email = email.to_owned();
                self.email_from_session = true;
            }
            None if self.email_from_session => {
                self.email.clear();
                self.email_from_session = false;
            }
            None => {}
        }
    }

    /// The email input is shown only when no session email was adopted.
    #[must_use]
    pub fn email_editable(&self) -> bool {
        !self.email_from_session
    }

    /// Check consent and build the record to insert.
    ///
    /// # Errors
    ///
    /// `RequestInFlight` while a submit is outstanding, `ConsentRequired`
    /// when the consent box is unchecked.
    pub fn begin_submit(&mut self, session: Option<&Session>) -> Result<OptInRecord, ValidationError> {
        if self.loading {
            return Err(ValidationError::RequestInFlight);
        }
        if !self.consent {
            return Err(ValidationError::ConsentRequired);
        }
        let user_id = session.map(|s| s.user.id.as_str());
        let record = OptInRecord::from_form(user_id, &self.email, &self.phone, true);
        self.loading = true;
        Ok(record)
    }

    pub fn finish_success(&mut self) {
        self.loading = false;
        self.consent = false;
        self.phone.clear();
        if !self.email_from_session {
            self.email.clear();
        }
    }

    /// Failure keeps every field as typed.
    pub fn finish_failure(&mut self) {
        self.loading = false;
    }
}

#[must_use]
pub fn validation_notice(err: ValidationError) -> Notice {
    match err {
        ValidationError::ConsentRequired => Notice::error("Consent Required", err.to_string()),
        ValidationError::MissingCredentials | ValidationError::RequestInFlight => {
            Notice::error("Opt-In Error", err.to_string())
        }
    }
}

#[must_use]
pub fn outcome_notice(result: &Result<(), StoreError>) -> Notice {
    match result {
        Ok(()) => Notice::info("Opt-In Successful!", "Thanks for subscribing to our messages."),
        Err(err) => Notice::error("Opt-In Error", err.to_string()),
    }
}

/// Insert `record` through `client`. Never retries.
///
/// # Errors
///
/// Returns the store's message when the insert is rejected or unreachable.
pub async fn submit<C: RecordClient>(client: &C, record: &OptInRecord) -> Result<(), StoreError> {
    client.insert(record).await
}
