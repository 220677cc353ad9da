//! Machine endpoints.

use super::Endpoint;
use crate::http::HttpClient;
use crate::types::Result;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde_json::json;
use std::sync::Arc;

/// CRUD wrapper over `/machines`, plus booking creation nested under a
/// machine.
#[derive(Debug, Clone)]
pub struct MachinesClient {
    endpoint: Endpoint,
}

impl MachinesClient {
    pub(crate) fn new(http: Arc<HttpClient>) -> Self {
        Self {
            endpoint: Endpoint::new(http, "machines"),
        }
    }

    pub async fn get<T: DeserializeOwned>(&self, id: &str) -> Result<T> {
        self.endpoint.fetch(id).await
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        self.endpoint.remove(id).await
    }

    /// Machines are created under their laundry.
    pub async fn create<T: DeserializeOwned>(
        &self,
        laundry_id: &str,
        name: &str,
        kind: &str,
        broken: bool,
    ) -> Result<T> {
        self.endpoint
            .http()
            .post(
                &format!("/laundries/{laundry_id}/machines"),
                Some(json!({"name": name, "type": kind, "broken": broken})),
            )
            .await
    }

    pub async fn update(&self, id: &str, body: serde_json::Value) -> Result<()> {
        self.endpoint
            .http()
            .put_unit(&self.endpoint.path(id), Some(body))
            .await
    }

    pub async fn create_booking<T: DeserializeOwned>(
        &self,
        id: &str,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<T> {
        self.endpoint
            .http()
            .post(
                &format!("/machines/{id}/bookings"),
                Some(json!({"from": from, "to": to})),
            )
            .await
    }
}
