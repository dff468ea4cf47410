//! Networking modules for the site's JSON API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the raw HTTP calls, `remote` wraps them behind the
//! `AuthClient` / `RecordClient` traits, `auth_events` carries auth-state
//! changes to the page shell, and `types` defines the shared wire schema.

pub mod api;
pub mod auth_events;
pub mod remote;
pub mod types;
