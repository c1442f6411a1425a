//! # Login payloads
//!
//! [`Credentials`] is what the login form collects. It crosses the wire as a
//! [`LoginRequest`], whose password field is named `senha` to match the backend
//! contract:
//!
//! ```json
//! { "email": "user@example.com", "senha": "hunter2" }
//! ```
//!
//! A successful response carries the bearer token as [`LoginResponse`]:
//!
//! ```json
//! { "token": "eyJhbGciOi..." }
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use store::SessionToken;

/// Email and password entered by the user.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Body of `POST /login`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    #[serde(rename = "senha")]
    pub password: &'a str,
}

impl<'a> From<&'a Credentials> for LoginRequest<'a> {
    fn from(credentials: &'a Credentials) -> Self {
        Self {
            email: &credentials.email,
            password: &credentials.password,
        }
    }
}

/// Body of a successful `POST /login` response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginResponse {
    pub token: SessionToken,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_uses_senha_for_password() {
        let credentials = Credentials::new("user@example.com", "hunter2");
        let body = serde_json::to_value(LoginRequest::from(&credentials)).unwrap();
        assert_eq!(
            body,
            serde_json::json!({ "email": "user@example.com", "senha": "hunter2" })
        );
    }

    #[test]
    fn response_ignores_extra_fields() {
        let body: LoginResponse =
            serde_json::from_str(r#"{"token":"abc","user":{"id":1}}"#).unwrap();
        assert_eq!(body.token.as_str(), "abc");
    }

    #[test]
    fn credentials_debug_hides_password() {
        let printed = format!("{:?}", Credentials::new("a@b.co", "hunter2"));
        assert!(printed.contains("a@b.co"));
        assert!(!printed.contains("hunter2"));
    }
}
