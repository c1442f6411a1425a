//! Errors returned by [`crate::ApiClient`].

/// Everything that can go wrong between building a request and decoding its response.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The underlying HTTP client could not be constructed.
    #[error("failed to build http client: {0}")]
    Build(#[source] reqwest::Error),
    /// No response was received (DNS, refused connection, CORS, timeout).
    #[error("could not reach server: {0}")]
    Network(#[source] reqwest::Error),
    /// The server answered with a non-2xx status.
    #[error("request failed with status {status}")]
    Status { status: u16, body: String },
    /// The server answered 2xx but the body was not what we expected.
    #[error("invalid response body: {0}")]
    Decode(#[source] reqwest::Error),
    /// A login response arrived without a usable token.
    #[error("login response did not contain a token")]
    MissingToken,
}

impl Error {
    /// HTTP status of the response, when one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True when the request never produced a response.
    pub fn is_network(&self) -> bool {
        matches!(self, Error::Network(_))
    }
}
