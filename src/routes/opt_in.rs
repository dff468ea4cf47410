//! Opt-in route.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum_extra::extract::cookie::CookieJar;
use client::net::types::OptInRecord;

use super::auth::{apply_cookie_update, lookup_session};
use super::{auth_failure, error_response, store_failure};
use crate::services::opt_in::{OptInError, submit};
use crate::state::AppState;
use crate::supabase::types::StoreError;

/// `POST /api/opt-ins` — record a messaging opt-in for the current visitor.
///
/// `422` without consent; the store is not called in that case.
pub async fn create(State(state): State<AppState>, jar: CookieJar, Json(record): Json<OptInRecord>) -> Response {
    let Some(store) = &state.records else {
        return store_failure(&StoreError::NotConfigured);
    };

    let lookup = match lookup_session(&state, &jar).await {
        Ok(lookup) => lookup,
        Err(e) => return auth_failure(&e),
    };
    let jar = apply_cookie_update(jar, &lookup.cookies, state.config.cookie_secure);

    let table = state.config.opt_in_table.as_str();
    match submit(store.as_ref(), table, &record, lookup.session.as_ref(), lookup.access_token.as_deref()).await {
        Ok(saved) => {
            tracing::info!(table, signed_in = saved.user_id.is_some(), "opt-in recorded");
            (jar, StatusCode::CREATED).into_response()
        }
        Err(OptInError::Validation(e)) => {
            (jar, error_response(StatusCode::UNPROCESSABLE_ENTITY, e.to_string())).into_response()
        }
        Err(OptInError::Store(e)) => (jar, store_failure(&e)).into_response(),
    }
}

#[cfg(test)]
#[path = "opt_in_test.rs"]
mod tests;
