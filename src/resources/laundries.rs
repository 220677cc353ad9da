//! Laundry endpoints.

use super::Endpoint;
use crate::http::HttpClient;
use crate::types::Result;
use serde::de::DeserializeOwned;
use serde_json::json;
use std::sync::Arc;

/// CRUD and membership wrapper over `/laundries`.
#[derive(Debug, Clone)]
pub struct LaundriesClient {
    endpoint: Endpoint,
}

impl LaundriesClient {
    pub(crate) fn new(http: Arc<HttpClient>) -> Self {
        Self {
            endpoint: Endpoint::new(http, "laundries"),
        }
    }

    pub async fn get<T: DeserializeOwned>(&self, id: &str) -> Result<T> {
        self.endpoint.fetch(id).await
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        self.endpoint.remove(id).await
    }

    pub async fn create<T: DeserializeOwned>(
        &self,
        name: &str,
        google_place_id: &str,
    ) -> Result<T> {
        self.endpoint
            .http()
            .post(
                "/laundries",
                Some(json!({"name": name, "googlePlaceId": google_place_id})),
            )
            .await
    }

    /// Provision a throwaway demo laundry. No payload.
    pub async fn create_demo<T: DeserializeOwned>(&self) -> Result<T> {
        self.endpoint.http().post("/laundries/demo", None).await
    }

    pub async fn update(&self, id: &str, body: serde_json::Value) -> Result<()> {
        self.endpoint
            .http()
            .put_unit(&self.endpoint.path(id), Some(body))
            .await
    }

    pub async fn invite_user_by_email(&self, id: &str, email: &str) -> Result<()> {
        self.endpoint
            .http()
            .post_unit(
                &format!("/laundries/{id}/invite-by-email"),
                Some(json!({"email": email})),
            )
            .await
    }

    pub async fn remove_user(&self, id: &str, user_id: &str) -> Result<()> {
        self.endpoint
            .http()
            .delete(&format!("/laundries/{id}/users/{user_id}"))
            .await
    }

    /// Mint a single-use invite code. The endpoint takes POST with no payload
    /// at all.
    pub async fn create_invite_code<T: DeserializeOwned>(&self, id: &str) -> Result<T> {
        self.endpoint
            .http()
            .post(&format!("/laundries/{id}/invite-code"), None)
            .await
    }

    pub async fn add_owner(&self, id: &str, user_id: &str) -> Result<()> {
        self.endpoint
            .http()
            .post_unit(&format!("/laundries/{id}/owners/{user_id}"), None)
            .await
    }

    pub async fn remove_owner(&self, id: &str, user_id: &str) -> Result<()> {
        self.endpoint
            .http()
            .delete(&format!("/laundries/{id}/owners/{user_id}"))
            .await
    }

    pub async fn add_user_from_code(&self, id: &str, code: &str) -> Result<()> {
        self.endpoint
            .http()
            .post_unit(
                &format!("/laundries/{id}/users/add-from-code"),
                Some(json!({"key": code})),
            )
            .await
    }
}
