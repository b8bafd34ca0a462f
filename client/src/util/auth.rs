//! Route authorization decision shared by every protected route.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components must apply identical unauthenticated redirect behavior.
//! The decision is a pure function of the credential so the component layer
//! only interprets it; it never inspects tokens itself.
//!
//! A credential is present when it holds a non-empty token. No structural,
//! signature, or expiry checks happen here: a malformed or expired token still
//! renders the protected view, and validation belongs to whoever owns the
//! session.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

/// Login entry point that unauthenticated navigations are sent to.
pub const LOGIN_PATH: &str = "/login";

/// Opaque authentication signal supplied by the caller on each render.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Credential(Option<String>);

impl Credential {
    /// A credential with no token.
    #[must_use]
    pub fn absent() -> Self {
        Self(None)
    }

    /// Whether a usable token is present.
    ///
    /// `None` and the empty string are absent. Any other string counts,
    /// including `"0"`, `"false"` and whitespace.
    #[must_use]
    pub fn is_present(&self) -> bool {
        self.0.as_deref().is_some_and(|token| !token.is_empty())
    }

    /// Raw token, if any.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

impl From<Option<String>> for Credential {
    fn from(token: Option<String>) -> Self {
        Self(token)
    }
}

impl From<Option<&str>> for Credential {
    fn from(token: Option<&str>) -> Self {
        Self(token.map(str::to_owned))
    }
}

impl From<String> for Credential {
    fn from(token: String) -> Self {
        Self(Some(token))
    }
}

impl From<&str> for Credential {
    fn from(token: &str) -> Self {
        Self(Some(token.to_owned()))
    }
}

/// Outcome of a guard evaluation, interpreted by the router host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RenderDecision<V> {
    /// Mount the protected view exactly as supplied.
    Render(V),
    /// Navigate to the given path instead.
    Redirect(&'static str),
}

impl<V> RenderDecision<V> {
    #[must_use]
    pub fn is_render(&self) -> bool {
        matches!(self, Self::Render(_))
    }

    #[must_use]
    pub fn is_redirect(&self) -> bool {
        matches!(self, Self::Redirect(_))
    }

    /// Target path when this is a redirect.
    #[must_use]
    pub fn redirect_target(&self) -> Option<&'static str> {
        match self {
            Self::Redirect(target) => Some(*target),
            Self::Render(_) => None,
        }
    }

    /// Transform the protected view while keeping a redirect untouched.
    pub fn map<U, F>(self, f: F) -> RenderDecision<U>
    where
        F: FnOnce(V) -> U,
    {
        match self {
            Self::Render(view) => RenderDecision::Render(f(view)),
            Self::Redirect(target) => RenderDecision::Redirect(target),
        }
    }
}

/// Decide whether `view` may be shown for `credential`.
///
/// Absent credentials redirect to [`LOGIN_PATH`]; present ones forward `view`
/// unmodified.
pub fn evaluate<V>(credential: &Credential, view: V) -> RenderDecision<V> {
    if credential.is_present() {
        RenderDecision::Render(view)
    } else {
        RenderDecision::Redirect(LOGIN_PATH)
    }
}
