//! # Preconfigured HTTP client
//!
//! [`ApiClient`] wraps a [`reqwest::Client`] bound to one backend base address.
//! Every request it builds:
//!
//! 1. carries `Content-Type: application/json` by default;
//! 2. carries `Authorization: Bearer <token>` when the injected
//!    [`SessionStore`] holds a token at the moment the request is built.
//!
//! Every response it receives is checked before reaching the caller:
//!
//! - **403 Forbidden** clears the session store and fires
//!   [`SessionEvents::notify`]. The error is still returned.
//! - Any other non-2xx status becomes [`Error::Status`].
//! - A request that never produced a response becomes [`Error::Network`].
//!
//! 401 is deliberately left alone here: on the login endpoint it means "wrong
//! password", not "session gone".

use std::rc::Rc;

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use store::{ApiConfig, SessionStore, SessionToken};

use crate::error::Error;
use crate::events::SessionEvents;
use crate::models::{Credentials, LoginRequest, LoginResponse};

/// Path of the credential exchange endpoint.
pub const LOGIN_PATH: &str = "/login";

/// HTTP client bound to a base address, a session store and a session-expired registry.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: Rc<dyn SessionStore>,
    events: SessionEvents,
}

impl ApiClient {
    /// Build a client for `config.base_url`.
    pub fn new(
        config: &ApiConfig,
        session: Rc<dyn SessionStore>,
        events: SessionEvents,
    ) -> Result<Self, Error> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let builder = reqwest::Client::builder().default_headers(headers);
        #[cfg(not(target_arch = "wasm32"))]
        let builder = if config.timeout_secs > 0 {
            builder.timeout(std::time::Duration::from_secs(u64::from(config.timeout_secs)))
        } else {
            builder
        };
        let http = builder.build().map_err(Error::Build)?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            session,
            events,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The session store this client reads tokens from.
    pub fn session(&self) -> &Rc<dyn SessionStore> {
        &self.session
    }

    /// The registry notified when the server rejects the session.
    pub fn events(&self) -> &SessionEvents {
        &self.events
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Start a request to `path`, attaching the bearer token if one is stored.
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.http.request(method, self.url(path));
        match self.session.get() {
            Some(token) if !token.is_empty() => builder.bearer_auth(token.as_str()),
            _ => builder,
        }
    }

    /// Send a request built by [`ApiClient::request`] and apply the response policy.
    pub async fn send(&self, builder: RequestBuilder) -> Result<Response, Error> {
        let response = builder.send().await.map_err(|e| {
            tracing::warn!("Request failed before a response arrived: {}", e);
            Error::Network(e)
        })?;

        let status = response.status();
        if status == StatusCode::FORBIDDEN {
            self.expire_session();
        }
        if !status.is_success() {
            tracing::debug!("{} answered {}", response.url(), status);
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// POST `body` as JSON to `path` and decode a JSON response.
    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, Error>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .send(self.request(Method::POST, path).json(body))
            .await?;
        response.json::<T>().await.map_err(Error::Decode)
    }

    /// GET `path` and decode a JSON response.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let response = self.send(self.request(Method::GET, path)).await?;
        response.json::<T>().await.map_err(Error::Decode)
    }

    /// Exchange credentials for a session token via `POST /login`.
    ///
    /// The token is returned, not stored: recording the session is the
    /// authentication context's job.
    pub async fn login(&self, credentials: &Credentials) -> Result<SessionToken, Error> {
        tracing::debug!("Requesting a session token");
        let response: LoginResponse = self
            .post_json(LOGIN_PATH, &LoginRequest::from(credentials))
            .await?;
        if response.token.is_empty() {
            return Err(Error::MissingToken);
        }
        Ok(response.token)
    }

    fn expire_session(&self) {
        tracing::warn!("Server rejected the session (403), clearing token");
        self.session.clear();
        self.events.notify();
    }
}

// Two handles are equal when they talk to the same backend through the same
// session store and registry. Lets the client be passed as a component prop.
impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url
            && Rc::ptr_eq(&self.session, &other.session)
            && self.events == other.events
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("events", &self.events)
            .finish_non_exhaustive()
    }
}
