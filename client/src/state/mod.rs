//! Client-side state modules.
//!
//! ARCHITECTURE
//! ============
//! Plain structs with transition methods, shared through Leptos context as
//! `RwSignal`s. Nothing here touches the DOM, so every flow is testable on
//! the host.

pub mod auth_form;
pub mod opt_in;
pub mod shell;
pub mod toast;

#[cfg(test)]
pub mod test_helpers;
