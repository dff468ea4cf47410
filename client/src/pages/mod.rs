//! Page modules, one per routed `SitePage` plus the not-found fallback.
//!
//! ARCHITECTURE
//! ============
//! Pages are static copy laid out with `components::cards`. The only
//! stateful pages are `home` (hosts the opt-in form) and `contact`
//! (simulated message form).

pub mod azure_virtual_desktop_hub;
pub mod brand_identity_hub;
pub mod citrix_consulting;
pub mod construction_hub;
pub mod contact;
pub mod copilot_hub;
pub mod home;
pub mod not_found;
pub mod privacy_policy;
pub mod real_estate_hub;
pub mod resources;
pub mod team;
pub mod terms_of_service;
