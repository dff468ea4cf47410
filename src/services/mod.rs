//! Request-level logic shared by the route handlers.

pub mod opt_in;
pub mod session;
