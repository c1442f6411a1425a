//! Request and response bodies exchanged with the backend.

mod login;

pub use login::{Credentials, LoginRequest, LoginResponse};
