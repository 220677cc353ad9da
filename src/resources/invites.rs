//! Invite endpoints.

use super::Endpoint;
use crate::http::HttpClient;
use crate::types::Result;
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// Wrapper over `/invites`. Invites are created through their laundry
/// ([`super::LaundriesClient::invite_user_by_email`]); this client only reads
/// and revokes them.
#[derive(Debug, Clone)]
pub struct InvitesClient {
    endpoint: Endpoint,
}

impl InvitesClient {
    pub(crate) fn new(http: Arc<HttpClient>) -> Self {
        Self {
            endpoint: Endpoint::new(http, "invites"),
        }
    }

    pub async fn get<T: DeserializeOwned>(&self, id: &str) -> Result<T> {
        self.endpoint.fetch(id).await
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        self.endpoint.remove(id).await
    }
}
