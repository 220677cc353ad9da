//! User endpoints.

use super::Endpoint;
use crate::http::HttpClient;
use crate::types::{Error, Result};
use serde::de::DeserializeOwned;
use serde_json::json;
use std::sync::Arc;

/// CRUD and account-management wrapper over `/users`.
#[derive(Debug, Clone)]
pub struct UsersClient {
    endpoint: Endpoint,
}

impl UsersClient {
    pub(crate) fn new(http: Arc<HttpClient>) -> Self {
        Self {
            endpoint: Endpoint::new(http, "users"),
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
        display_name: &str,
        email: &str,
        password: &str,
    ) -> Result<T> {
        self.endpoint
            .http()
            .post(
                "/users",
                Some(json!({
                    "displayName": display_name,
                    "email": email,
                    "password": password,
                })),
            )
            .await
    }

    /// Look a user up by email. Fails with a descriptive [`Error::NotFound`]
    /// when no user matches; the caller decides recovery.
    pub async fn from_email<T: DeserializeOwned>(&self, email: &str) -> Result<T> {
        // Emails carry `+` and `@`; interpolated raw they corrupt the query.
        let encoded: String = url::form_urlencoded::byte_serialize(email.as_bytes()).collect();
        let matches: Vec<T> = self
            .endpoint
            .http()
            .get(&format!("/users?email={encoded}"))
            .await?;

        matches
            .into_iter()
            .next()
            .ok_or_else(|| Error::not_found(format!("no user with email {email}")))
    }

    pub async fn update_name(&self, id: &str, name: &str) -> Result<()> {
        self.endpoint
            .http()
            .put_unit(&self.endpoint.path(id), Some(json!({"name": name})))
            .await
    }

    pub async fn change_password(
        &self,
        id: &str,
        current_password: &str,
        new_password: &str,
    ) -> Result<()> {
        self.endpoint
            .http()
            .post_unit(
                &format!("/users/{id}/password-change"),
                Some(json!({
                    "currentPassword": current_password,
                    "newPassword": new_password,
                })),
            )
            .await
    }

    /// Kick off the password-reset email flow. No payload.
    pub async fn start_password_reset(&self, id: &str) -> Result<()> {
        self.endpoint
            .http()
            .post_unit(&format!("/users/{id}/start-password-reset"), None)
            .await
    }

    pub async fn password_reset(&self, id: &str, token: &str, password: &str) -> Result<()> {
        self.endpoint
            .http()
            .post_unit(
                &format!("/users/{id}/password-reset"),
                Some(json!({"token": token, "password": password})),
            )
            .await
    }

    pub async fn start_email_verification(&self, id: &str, email: &str) -> Result<()> {
        self.endpoint
            .http()
            .post_unit(
                &format!("/users/{id}/start-email-verification"),
                Some(json!({"email": email})),
            )
            .await
    }

    pub async fn list_emails(&self, id: &str) -> Result<Vec<String>> {
        self.endpoint.http().get(&format!("/users/{id}/emails")).await
    }
}
