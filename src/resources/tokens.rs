//! Access-token endpoints.

use super::Endpoint;
use crate::http::HttpClient;
use crate::types::Result;
use serde::de::DeserializeOwned;
use serde_json::json;
use std::sync::Arc;

/// Wrapper over `/tokens` for minting and revoking API access tokens.
#[derive(Debug, Clone)]
pub struct TokensClient {
    endpoint: Endpoint,
}

impl TokensClient {
    pub(crate) fn new(http: Arc<HttpClient>) -> Self {
        Self {
            endpoint: Endpoint::new(http, "tokens"),
        }
    }

    /// Mint a named token for the authenticated user.
    pub async fn create<T: DeserializeOwned>(&self, name: &str) -> Result<T> {
        self.endpoint
            .http()
            .post("/tokens", Some(json!({"name": name})))
            .await
    }

    /// Mint a token by proving email/password out of band — the bootstrap
    /// path for callers that do not hold credentials yet.
    pub async fn create_from_email_password<T: DeserializeOwned>(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<T> {
        self.endpoint
            .http()
            .post(
                "/tokens/email-password",
                Some(json!({"name": name, "email": email, "password": password})),
            )
            .await
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        self.endpoint.remove(id).await
    }
}
