//! # API crate — HTTP client for the backend
//!
//! Everything the front-end sends over the network goes through [`ApiClient`].
//! The client is constructed once at start-up and shared through the UI context.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`]: base address, default headers, bearer token, 403 policy, `login` |
//! | [`events`] | [`SessionEvents`]: explicit registry of session-expired listeners |
//! | [`error`] | [`Error`]: network, status, and decoding failures |
//! | [`models`] | Login request/response bodies and [`Credentials`] |
//!
//! ## Collaborators
//!
//! The client never owns the session token. It reads it from an injected
//! [`store::SessionStore`] before each request and clears it when the server
//! answers 403, after which every [`SessionEvents`] listener is called.

pub mod client;
pub mod error;
pub mod events;
pub mod models;

pub use client::{ApiClient, LOGIN_PATH};
pub use error::Error;
pub use events::{ListenerId, SessionEvents};
pub use models::{Credentials, LoginRequest, LoginResponse};
