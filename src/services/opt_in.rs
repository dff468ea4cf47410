//! Opt-in submission: consent check, record normalization, insert.

use client::net::types::{OptInRecord, Session, ValidationError};
use thiserror::Error;

use crate::supabase::RecordStore;
use crate::supabase::types::StoreError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptInError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Normalize a browser-submitted record.
///
/// Consent is mandatory. The owner is always the request's session user (or
/// nobody); the browser-supplied `user_id` is discarded. Blank fields become
/// `None` and the source tag is forced.
///
/// # Errors
///
/// Returns `ValidationError::ConsentRequired` when `opted_in` is false.
pub fn prepare_record(record: &OptInRecord, session: Option<&Session>) -> Result<OptInRecord, ValidationError> {
    if !record.opted_in {
        return Err(ValidationError::ConsentRequired);
    }
    Ok(OptInRecord::from_form(
        session.map(|s| s.user.id.as_str()),
        record.email.as_deref().unwrap_or_default(),
        record.phone_number.as_deref().unwrap_or_default(),
        true,
    ))
}

/// Validate and insert one opt-in record.
///
/// # Errors
///
/// Validation failures are returned before the store is called.
pub async fn submit(
    store: &dyn RecordStore,
    table: &str,
    record: &OptInRecord,
    session: Option<&Session>,
    access_token: Option<&str>,
) -> Result<OptInRecord, OptInError> {
    let record = prepare_record(record, session)?;
    store.insert(table, &record, access_token).await?;
    Ok(record)
}

#[cfg(test)]
#[path = "opt_in_test.rs"]
mod tests;
