//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules keep pure decision logic out of components so it can be
//! tested without a reactive runtime.

pub mod auth;
