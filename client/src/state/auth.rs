//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided as context by the app shell and read by route guards. Filling in
//! the token is the job of whatever signs the user in; this module only holds
//! it.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::util::auth::Credential;

/// Authentication state holding the current session token, if any.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub token: Option<String>,
}

impl AuthState {
    /// Guard credential derived from the held token.
    #[must_use]
    pub fn credential(&self) -> Credential {
        Credential::from(self.token.clone())
    }
}
