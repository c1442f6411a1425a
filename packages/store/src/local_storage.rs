//! # Browser localStorage session store
//!
//! [`LocalStorageStore`] is the [`SessionStore`] used on the **web platform**.
//! The token lives under a single key (default `"token"`, see
//! [`crate::SessionConfig`]) in `window.localStorage`, so it survives page
//! reloads until the server rejects it or the user logs out.
//!
//! The struct only remembers the key; the `Storage` handle is looked up on every
//! call because `web_sys::Storage` is not `Clone`-friendly across closures.
//!
//! Storage failures (private browsing, quota, disabled storage) are logged and
//! otherwise treated as "no token".

use web_sys::Storage;

use crate::session::{SessionStore, SessionToken};

/// localStorage-backed SessionStore for the browser.
#[derive(Clone, Debug)]
pub struct LocalStorageStore {
    key: String,
}

impl LocalStorageStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage() -> Option<Storage> {
        let window = web_sys::window()?;
        match window.local_storage() {
            Ok(storage) => storage,
            Err(e) => {
                tracing::warn!("localStorage unavailable: {:?}", e);
                None
            }
        }
    }
}

impl SessionStore for LocalStorageStore {
    fn get(&self) -> Option<SessionToken> {
        let storage = Self::storage()?;
        storage
            .get_item(&self.key)
            .ok()
            .flatten()
            .filter(|token| !token.is_empty())
            .map(SessionToken::from)
    }

    fn set(&self, token: &SessionToken) {
        let Some(storage) = Self::storage() else {
            return;
        };
        if let Err(e) = storage.set_item(&self.key, token.as_str()) {
            tracing::warn!("Failed to persist session token: {:?}", e);
        }
    }

    fn clear(&self) {
        let Some(storage) = Self::storage() else {
            return;
        };
        if let Err(e) = storage.remove_item(&self.key) {
            tracing::warn!("Failed to remove session token: {:?}", e);
        }
    }
}
