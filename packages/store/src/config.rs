//! # Client configuration — `client.toml`
//!
//! Defines the TOML file bundled with the front-end that tells it where the
//! backend lives and where the session token is kept
//! (filename: [`ClientConfig::filename`] = `"client.toml"`).
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:3000"
//! timeout_secs = 30          # 0 leaves the transport default in place
//!
//! [session]
//! storage_key = "token"
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`ClientConfig`] | Top-level config with builder helpers and TOML (de)serialisation. |
//! | [`ApiConfig`] | Backend base address and request timeout. |
//! | [`SessionConfig`] | Storage key for the bearer token. |
//!
//! Every section derives or implements `Default`, so a missing or empty file is
//! the default configuration.

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `client.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

/// Backend connection settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base address every request path is joined onto.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds. 0 keeps the transport default.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u32,
}

fn default_base_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_timeout() -> u32 {
    30
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

/// Session persistence settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Key the bearer token is stored under.
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
}

fn default_storage_key() -> String {
    "token".to_string()
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
        }
    }
}

impl ClientConfig {
    /// Builder method to point the client at another backend.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api.base_url = base_url.into();
        self
    }

    /// Builder method to set the request timeout.
    pub fn with_timeout(mut self, secs: u32) -> Self {
        self.api.timeout_secs = secs;
        self
    }

    /// Builder method to change the token storage key.
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.session.storage_key = key.into();
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "client.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
