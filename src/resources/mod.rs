//! Per-resource REST facades.
//!
//! Thin wrappers over one entity type's endpoints. Each client holds an
//! [`Endpoint`] (path prefix + HTTP facade) and adds straight-line
//! compositions of the HTTP verbs; none of them carries independent control
//! flow. Resource shapes are the caller's business: read operations are
//! generic over `serde::de::DeserializeOwned`.

mod bookings;
mod invites;
mod laundries;
mod machines;
mod tokens;
mod users;

pub use bookings::BookingsClient;
pub use invites::InvitesClient;
pub use laundries::LaundriesClient;
pub use machines::MachinesClient;
pub use tokens::TokensClient;
pub use users::UsersClient;

use crate::http::HttpClient;
use crate::types::Result;
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// Shared request-building behavior parameterized by a resource path prefix.
#[derive(Debug, Clone)]
pub(crate) struct Endpoint {
    http: Arc<HttpClient>,
    prefix: &'static str,
}

impl Endpoint {
    pub(crate) fn new(http: Arc<HttpClient>, prefix: &'static str) -> Self {
        Self { http, prefix }
    }

    pub(crate) fn http(&self) -> &HttpClient {
        &self.http
    }

    pub(crate) fn path(&self, id: &str) -> String {
        format!("/{}/{}", self.prefix, id)
    }

    /// GET `/{prefix}/{id}`.
    pub(crate) async fn fetch<T: DeserializeOwned>(&self, id: &str) -> Result<T> {
        self.http.get(&self.path(id)).await
    }

    /// DELETE `/{prefix}/{id}`.
    pub(crate) async fn remove(&self, id: &str) -> Result<()> {
        self.http.delete(&self.path(id)).await
    }
}
