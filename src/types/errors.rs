//! SDK error types.
//!
//! All errors use `thiserror` for automatic Error trait derivation and provide
//! clear error messages with context. The SDK never retries or suppresses
//! internally; every failure propagates to the immediate caller.

use thiserror::Error;

/// SDK result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error enum for the Washline SDK.
#[derive(Error, Debug)]
pub enum Error {
    /// Credential resolution failed before any network call was attempted.
    #[error("authentication error: {0}")]
    Auth(String),

    /// The remote service answered with a non-2xx status.
    #[error("http status {status}: {body}")]
    Status {
        /// HTTP status code of the response.
        status: u16,
        /// Raw response body, surfaced verbatim.
        body: String,
    },

    /// Network-level failure (connect, TLS, read) from the HTTP transport.
    #[error("transport error: {0}")]
    Transport(String),

    /// The persistent connection refused or failed to emit a message.
    #[error("channel error: {0}")]
    Channel(String),

    /// Domain precondition failure (e.g. no user matches the given email).
    #[error("not found: {0}")]
    NotFound(String),

    /// Opt-in job timeout expired before a reply arrived.
    #[error("timeout: {0}")]
    Timeout(String),

    /// The remote service answered 2xx but the body was not what the caller
    /// asked to decode (including an empty body where one was expected).
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// Serialization/deserialization errors.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

// Convenience constructors
impl Error {
    pub fn auth(msg: impl Into<String>) -> Self {
        Self::Auth(msg.into())
    }

    pub fn channel(msg: impl Into<String>) -> Self {
        Self::Channel(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn timeout(msg: impl Into<String>) -> Self {
        Self::Timeout(msg.into())
    }

    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedResponse(msg.into())
    }

    /// True when the error is a non-2xx response with the given status.
    pub fn is_status(&self, status: u16) -> bool {
        matches!(self, Error::Status { status: s, .. } if *s == status)
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Transport(err.to_string())
    }
}
