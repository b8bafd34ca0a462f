//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Pages render route content only. Access control is applied around them in
//! `app.rs` with `components::route_guard`.

pub mod dashboard;
pub mod login;
pub mod settings;
