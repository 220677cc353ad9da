//! Authentication strategies for HTTP calls.
//!
//! A [`CredentialProvider`] is consulted fresh on every HTTP call — resolved
//! credentials are never cached, so token refresh and rotation are
//! transparent to the caller. Provider failure fails the enclosing call
//! before any network I/O is attempted.

use crate::types::Result;
use base64::{engine::general_purpose::STANDARD, Engine as _};

/// How a request proves identity to the remote service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credentials {
    /// No `Authorization` header is sent.
    Unauthenticated,
    /// HTTP Basic: `Basic base64(username:password)`.
    Basic { username: String, password: String },
    /// Bearer token: `Bearer <token>`.
    Bearer { token: String },
}

impl Credentials {
    /// Render the strategy into an `Authorization` header value, or `None`
    /// for the unauthenticated strategy.
    pub fn authorization_header(&self) -> Option<String> {
        match self {
            Credentials::Unauthenticated => None,
            Credentials::Basic { username, password } => {
                let encoded = STANDARD.encode(format!("{username}:{password}"));
                Some(format!("Basic {encoded}"))
            }
            Credentials::Bearer { token } => Some(format!("Bearer {token}")),
        }
    }
}

/// Async source of credentials, injected at SDK construction.
///
/// Implementations may hit a keychain, refresh an OAuth token, or just return
/// a constant. Errors propagate to the HTTP caller unchanged.
#[async_trait::async_trait]
pub trait CredentialProvider: Send + Sync {
    async fn credentials(&self) -> Result<Credentials>;
}

/// Default provider: always resolves to [`Credentials::Unauthenticated`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Unauthenticated;

#[async_trait::async_trait]
impl CredentialProvider for Unauthenticated {
    async fn credentials(&self) -> Result<Credentials> {
        Ok(Credentials::Unauthenticated)
    }
}

/// Provider wrapping a fixed strategy. Covers the common case where the
/// application already holds a token or username/password pair.
#[derive(Debug, Clone)]
pub struct StaticCredentials(pub Credentials);

impl StaticCredentials {
    pub fn bearer(token: impl Into<String>) -> Self {
        Self(Credentials::Bearer {
            token: token.into(),
        })
    }

    pub fn basic(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self(Credentials::Basic {
            username: username.into(),
            password: password.into(),
        })
    }
}

#[async_trait::async_trait]
impl CredentialProvider for StaticCredentials {
    async fn credentials(&self) -> Result<Credentials> {
        Ok(self.0.clone())
    }
}
