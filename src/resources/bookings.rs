//! Booking endpoints.

use super::Endpoint;
use crate::http::HttpClient;
use crate::types::Result;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde_json::json;
use std::sync::Arc;

/// CRUD wrapper over `/bookings`.
#[derive(Debug, Clone)]
pub struct BookingsClient {
    endpoint: Endpoint,
}

impl BookingsClient {
    pub(crate) fn new(http: Arc<HttpClient>) -> Self {
        Self {
            endpoint: Endpoint::new(http, "bookings"),
        }
    }

    pub async fn get<T: DeserializeOwned>(&self, id: &str) -> Result<T> {
        self.endpoint.fetch(id).await
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        self.endpoint.remove(id).await
    }

    /// Move a booking to a new interval.
    pub async fn update(&self, id: &str, from: DateTime<Utc>, to: DateTime<Utc>) -> Result<()> {
        self.endpoint
            .http()
            .put_unit(
                &self.endpoint.path(id),
                Some(json!({"from": from, "to": to})),
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::Unauthenticated;
    use crate::http::tests::MockTransport;
    use crate::http::Method;

    #[tokio::test]
    async fn delete_hits_bookings_path() {
        let transport = Arc::new(MockTransport::with_response(204, ""));
        let bookings = BookingsClient::new(Arc::new(HttpClient::new(
            "/api",
            Arc::new(Unauthenticated),
            transport.clone(),
        )));

        bookings.delete("b9").await.unwrap();

        let request = transport.last_request();
        assert_eq!(request.method, Method::Delete);
        assert_eq!(request.url, "/api/bookings/b9");
    }
}
