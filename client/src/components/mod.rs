//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `page_shell` wraps every route with the nav bar, footer, toaster, and the
//! auth form. Components read and write shared state through Leptos context
//! (`RwSignal<ShellState>`, `RwSignal<ToastState>`, `RemoteAuth`,
//! `RemoteRecords`) provided by `app::App`.

pub mod auth_form;
pub mod cards;
pub mod footer;
pub mod nav_bar;
pub mod opt_in_form;
pub mod page_shell;
pub mod toaster;
