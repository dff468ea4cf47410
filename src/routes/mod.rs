//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the JSON API under `/api` and stitches it with Leptos SSR rendering
//! under a single Axum router. Every path outside the API and the static
//! asset directories is rendered by the client app, which shows its own
//! "page not found" view for unknown routes.
//!
//! ERROR HANDLING
//! ==============
//! Failing endpoints answer `{ "error": "<message>" }`. Remote rejections
//! map to 400, unreachable or misbehaving remotes to 502, a missing remote
//! configuration to 503.

pub mod auth;
pub mod opt_in;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::{get, post};
use client::net::types::ErrorBody;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, file_and_error_handler, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;
use crate::supabase::types::{AuthError, StoreError};

/// JSON API routes.
fn api_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/auth/signup", post(auth::signup))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/session", get(auth::session))
        .route("/api/opt-ins", post(opt_in::create))
        .route("/healthz", get(healthz))
        .layer(cors)
        .with_state(state)
}

/// API routes + Leptos SSR for every site page.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[workspace.metadata.leptos]` section).
pub fn app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .fallback(file_and_error_handler(client::app::shell))
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .nest_service("/assets", ServeDir::new(site_root_path.join("assets")))
        .merge(leptos_router)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// `{ "error": message }` with `status`.
pub(crate) fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(ErrorBody { error: message.into() })).into_response()
}

fn remote_status(status: u16) -> StatusCode {
    if status >= 500 { StatusCode::BAD_GATEWAY } else { StatusCode::BAD_REQUEST }
}

/// Log an auth failure and turn it into a response.
pub(crate) fn auth_failure(err: &AuthError) -> Response {
    let status = match err {
        AuthError::Rejected { status, .. } => remote_status(*status),
        AuthError::Transport(_) | AuthError::Unexpected(_) => StatusCode::BAD_GATEWAY,
        AuthError::NotConfigured => StatusCode::SERVICE_UNAVAILABLE,
    };
    if status == StatusCode::BAD_REQUEST {
        tracing::warn!(error = %err, "auth request rejected");
    } else {
        tracing::error!(error = %err, "auth request failed");
    }
    error_response(status, err.to_string())
}

/// Log a record-store failure and turn it into a response.
pub(crate) fn store_failure(err: &StoreError) -> Response {
    let status = match err {
        StoreError::Rejected { status, .. } => remote_status(*status),
        StoreError::Transport(_) => StatusCode::BAD_GATEWAY,
        StoreError::NotConfigured => StatusCode::SERVICE_UNAVAILABLE,
    };
    if status == StatusCode::BAD_REQUEST {
        tracing::warn!(error = %err, "record insert rejected");
    } else {
        tracing::error!(error = %err, "record insert failed");
    }
    error_response(status, err.to_string())
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
