//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read shared state from Leptos context providers and wrap page
//! views with cross-cutting behavior.

pub mod route_guard;
