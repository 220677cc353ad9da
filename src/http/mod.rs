//! HTTP facade.
//!
//! [`HttpClient`] issues GET/PUT/POST/DELETE calls against a configured base
//! URL, resolving the auth header fresh for every call and serializing an
//! optional JSON body. The actual engine sits behind the [`HttpTransport`]
//! trait; [`ReqwestTransport`] is the default implementation.
//!
//! Error policy: a non-2xx response or network failure is surfaced verbatim
//! as a rejected call. The facade performs no retries.

use crate::auth::CredentialProvider;
use crate::types::{Error, Result};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

// =============================================================================
// Transport contract
// =============================================================================

/// HTTP verbs the facade exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Put,
    Post,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Put => "PUT",
            Method::Post => "POST",
            Method::Delete => "DELETE",
        }
    }
}

/// One outbound request as the transport sees it.
///
/// `body: None` means the request is sent with no payload at all — some
/// endpoints (e.g. invite-code creation) accept POST without a body, and the
/// distinction is observable server-side.
#[derive(Debug, Clone)]
pub struct Request {
    pub method: Method,
    pub url: String,
    /// Rendered `Authorization` header value, if the resolved strategy
    /// produced one.
    pub authorization: Option<String>,
    pub body: Option<Value>,
}

/// Raw response handed back by the transport.
#[derive(Debug, Clone)]
pub struct Response {
    pub status: u16,
    pub body: String,
}

impl Response {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Narrow contract for the HTTP engine: build a request for a method + URL,
/// set a single header, send an optional JSON body, return status and body.
#[async_trait::async_trait]
pub trait HttpTransport: Send + Sync {
    async fn execute(&self, request: Request) -> Result<Response>;
}

// =============================================================================
// Default transport (reqwest)
// =============================================================================

/// Default [`HttpTransport`] over a shared `reqwest::Client`.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute(&self, request: Request) -> Result<Response> {
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Put => reqwest::Method::PUT,
            Method::Post => reqwest::Method::POST,
            Method::Delete => reqwest::Method::DELETE,
        };

        let mut builder = self.client.request(method, &request.url);
        if let Some(header) = &request.authorization {
            builder = builder.header(reqwest::header::AUTHORIZATION, header);
        }
        if let Some(body) = &request.body {
            // Sets Content-Type: application/json alongside the payload.
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(Response { status, body })
    }
}

// =============================================================================
// HTTP client facade
// =============================================================================

/// The HTTP half of the SDK: verb methods over `base_url + path`.
pub struct HttpClient {
    base_url: String,
    provider: Arc<dyn CredentialProvider>,
    transport: Arc<dyn HttpTransport>,
}

impl fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl HttpClient {
    pub fn new(
        base_url: impl Into<String>,
        provider: Arc<dyn CredentialProvider>,
        transport: Arc<dyn HttpTransport>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            provider,
            transport,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolve auth, dispatch, and fail on non-2xx. All verb methods funnel
    /// through here.
    async fn send(&self, method: Method, path: &str, body: Option<Value>) -> Result<Response> {
        let authorization = self.provider.credentials().await?.authorization_header();
        let url = format!("{}{}", self.base_url, path);

        tracing::debug!(
            "{} {} (auth: {}, body: {})",
            method.as_str(),
            path,
            authorization.is_some(),
            body.is_some()
        );

        let response = self
            .transport
            .execute(Request {
                method,
                url,
                authorization,
                body,
            })
            .await?;

        if !response.is_success() {
            return Err(Error::Status {
                status: response.status,
                body: response.body,
            });
        }

        Ok(response)
    }

    fn decode<T: DeserializeOwned>(&self, response: Response) -> Result<T> {
        if response.body.trim().is_empty() {
            return Err(Error::malformed("empty response body"));
        }
        Ok(serde_json::from_str(&response.body)?)
    }

    /// GET `path`, decode the JSON body.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self.send(Method::Get, path, None).await?;
        self.decode(response)
    }

    /// DELETE `path`, discard the body.
    pub async fn delete(&self, path: &str) -> Result<()> {
        self.send(Method::Delete, path, None).await?;
        Ok(())
    }

    /// POST `path` with an optional JSON body, decode the JSON response.
    pub async fn post<T: DeserializeOwned>(&self, path: &str, body: Option<Value>) -> Result<T> {
        let response = self.send(Method::Post, path, body).await?;
        self.decode(response)
    }

    /// POST `path` with an optional JSON body, discard the response body.
    pub async fn post_unit(&self, path: &str, body: Option<Value>) -> Result<()> {
        self.send(Method::Post, path, body).await?;
        Ok(())
    }

    /// PUT `path` with an optional JSON body, decode the JSON response.
    pub async fn put<T: DeserializeOwned>(&self, path: &str, body: Option<Value>) -> Result<T> {
        let response = self.send(Method::Put, path, body).await?;
        self.decode(response)
    }

    /// PUT `path` with an optional JSON body, discard the response body.
    pub async fn put_unit(&self, path: &str, body: Option<Value>) -> Result<()> {
        self.send(Method::Put, path, body).await?;
        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================
