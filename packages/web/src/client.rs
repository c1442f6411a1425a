//! Shared client constructor for the web app.
//!
//! Builds the [`api::ApiClient`] from the bundled `client.toml`, backed by the
//! platform-appropriate [`store::SessionStore`]:
//! - **Web** (WASM + `web` feature): `window.localStorage` via [`store::LocalStorageStore`]
//! - **Anything else**: in-memory via [`store::MemoryStore`]

use std::rc::Rc;

use api::{ApiClient, SessionEvents};
use store::{ClientConfig, SessionConfig, SessionStore};

const CLIENT_TOML: &str = include_str!("../client.toml");

/// Parse the bundled configuration, falling back to defaults if it is broken.
pub fn load_config(text: &str) -> ClientConfig {
    match ClientConfig::from_toml(text) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Invalid {}: {}; using defaults", ClientConfig::filename(), e);
            ClientConfig::default()
        }
    }
}

pub fn make_session_store(config: &SessionConfig) -> Rc<dyn SessionStore> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        Rc::new(store::LocalStorageStore::new(config.storage_key.clone()))
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        tracing::debug!("Keeping session '{}' in memory", config.storage_key);
        Rc::new(store::MemoryStore::new())
    }
}

/// Create the one client the app shares through context.
pub fn build_client() -> Result<ApiClient, api::Error> {
    let config = load_config(CLIENT_TOML);
    tracing::info!("API base address: {}", config.api.base_url);
    let session = make_session_store(&config.session);
    ApiClient::new(&config.api, session, SessionEvents::new())
}
