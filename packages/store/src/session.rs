//! Session token persistence.
//!
//! A [`SessionStore`] holds at most one bearer token. The HTTP client reads it
//! before every request and clears it when the server reports the session as
//! forbidden; the authentication context writes it after a successful login.

use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

/// Opaque bearer token issued by the server on login.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionToken(String);

impl SessionToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// Tokens end up in log lines through `{:?}` on containing structs.
impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionToken(<redacted>)")
    }
}

impl From<String> for SessionToken {
    fn from(token: String) -> Self {
        Self(token)
    }
}

impl From<&str> for SessionToken {
    fn from(token: &str) -> Self {
        Self(token.to_string())
    }
}

/// Key-value persistence for the current session token.
pub trait SessionStore {
    /// The stored token, if any.
    fn get(&self) -> Option<SessionToken>;
    /// Replace the stored token.
    fn set(&self, token: &SessionToken);
    /// Forget the stored token. A no-op when nothing is stored.
    fn clear(&self);
}

impl<S: SessionStore + ?Sized> SessionStore for Rc<S> {
    fn get(&self) -> Option<SessionToken> {
        (**self).get()
    }

    fn set(&self, token: &SessionToken) {
        (**self).set(token);
    }

    fn clear(&self) {
        (**self).clear();
    }
}
