//! API error taxonomy.

use thiserror::Error;

/// Errors surfaced to pages by the API client.
///
/// Nothing here is retried automatically; pages render the message and offer
/// a user-initiated retry where appropriate.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced an HTTP response (offline, DNS, CORS).
    #[error("network error: {0}")]
    Network(String),

    /// Authoritative 401 on an authenticated call; the client has already
    /// cleared the session and forced navigation to the login screen.
    #[error("session expired")]
    Unauthorized,

    /// Non-2xx response, carrying the server-provided message when the body
    /// had one, else a generic fallback.
    #[error("{message}")]
    Server { status: u16, message: String },

    /// The response body could not be read or parsed.
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Fallback message shown when the server does not explain a failure.
    pub const GENERIC_MESSAGE: &'static str = "Something went wrong. Please try again.";
}
