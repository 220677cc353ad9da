//! The top-level SDK facade.
//!
//! Wires the credential provider, HTTP transport, and persistent connection
//! into one handle. High-level calls either go through the HTTP facade
//! (resource clients) or through the job correlation engine (`invoke` and the
//! named job wrappers).

use crate::auth::{CredentialProvider, Unauthenticated};
use crate::http::{HttpClient, HttpTransport, ReqwestTransport};
use crate::jobs::{Channel, JobRouter, JobUpdate};
use crate::resources::{
    BookingsClient, InvitesClient, LaundriesClient, MachinesClient, TokensClient, UsersClient,
};
use crate::types::{Result, SdkConfig};
use chrono::{DateTime, Utc};
use serde_json::{json, Value};
use std::fmt;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::Duration;

/// Client facade for the Washline service.
///
/// Cheap to clone; all clones share the same HTTP client and job router (and
/// therefore the same correlation-id sequence).
#[derive(Clone)]
pub struct Sdk {
    http: Arc<HttpClient>,
    jobs: Arc<JobRouter>,
}

impl fmt::Debug for Sdk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sdk").field("jobs", &self.jobs).finish_non_exhaustive()
    }
}

impl Sdk {
    /// Build an SDK with defaults: base URL `"/api"`, unauthenticated, and
    /// the reqwest transport.
    pub fn new(channel: Arc<dyn Channel>) -> Self {
        Self::builder(channel).build()
    }

    pub fn builder(channel: Arc<dyn Channel>) -> SdkBuilder {
        SdkBuilder {
            config: SdkConfig::default(),
            provider: Arc::new(Unauthenticated),
            transport: Arc::new(ReqwestTransport::new()),
            channel,
        }
    }

    // =========================================================================
    // Transport primitives
    // =========================================================================

    /// The HTTP half: verb methods over `base_url + path`.
    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    /// The correlation engine behind [`invoke`](Self::invoke).
    pub fn jobs(&self) -> &Arc<JobRouter> {
        &self.jobs
    }

    /// The job-correlated RPC primitive: emit `action` with positional
    /// `args`, await the correlated reply.
    pub async fn invoke(&self, action: &str, args: Vec<Value>) -> Result<Value> {
        self.jobs.invoke(action, args).await
    }

    /// [`invoke`](Self::invoke) with an explicit opt-in deadline.
    pub async fn invoke_with_timeout(
        &self,
        action: &str,
        args: Vec<Value>,
        deadline: Duration,
    ) -> Result<Value> {
        self.jobs.invoke_with_timeout(action, args, deadline).await
    }

    /// Spawn the reply observer over the application's state store. Every
    /// job snapshot the store publishes resolves its pending call.
    pub fn attach_store(&self, store: mpsc::UnboundedReceiver<JobUpdate>) -> JoinHandle<()> {
        Arc::clone(&self.jobs).watch(store)
    }

    // =========================================================================
    // Named job wrappers (closed vocabulary over the string-keyed primitive)
    // =========================================================================

    pub async fn list_users(&self, options: Value) -> Result<Value> {
        self.invoke("listUsers", vec![options]).await
    }

    pub async fn list_users_and_invites(&self, laundry_id: &str) -> Result<Value> {
        self.invoke("listUsersAndInvites", vec![json!(laundry_id)]).await
    }

    pub async fn list_machines(&self, laundry_id: &str) -> Result<Value> {
        self.invoke("listMachines", vec![json!(laundry_id)]).await
    }

    pub async fn list_bookings_in_time(
        &self,
        laundry_id: &str,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Value> {
        self.invoke(
            "listBookingsInTime",
            vec![json!(laundry_id), json!(from), json!(to)],
        )
        .await
    }

    pub async fn fetch_laundry(&self, laundry_id: &str) -> Result<Value> {
        self.invoke("fetchLaundry", vec![json!(laundry_id)]).await
    }

    // =========================================================================
    // Resource facades
    // =========================================================================

    pub fn users(&self) -> UsersClient {
        UsersClient::new(Arc::clone(&self.http))
    }

    pub fn laundries(&self) -> LaundriesClient {
        LaundriesClient::new(Arc::clone(&self.http))
    }

    pub fn machines(&self) -> MachinesClient {
        MachinesClient::new(Arc::clone(&self.http))
    }

    pub fn bookings(&self) -> BookingsClient {
        BookingsClient::new(Arc::clone(&self.http))
    }

    pub fn invites(&self) -> InvitesClient {
        InvitesClient::new(Arc::clone(&self.http))
    }

    pub fn tokens(&self) -> TokensClient {
        TokensClient::new(Arc::clone(&self.http))
    }
}

/// Builder for [`Sdk`]; every component has a sensible default except the
/// persistent connection.
pub struct SdkBuilder {
    config: SdkConfig,
    provider: Arc<dyn CredentialProvider>,
    transport: Arc<dyn HttpTransport>,
    channel: Arc<dyn Channel>,
}

impl fmt::Debug for SdkBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SdkBuilder")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl SdkBuilder {
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = base_url.into();
        self
    }

    pub fn config(mut self, config: SdkConfig) -> Self {
        self.config = config;
        self
    }

    pub fn credential_provider(mut self, provider: Arc<dyn CredentialProvider>) -> Self {
        self.provider = provider;
        self
    }

    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = transport;
        self
    }

    pub fn build(self) -> Sdk {
        let http = Arc::new(HttpClient::new(
            self.config.base_url,
            self.provider,
            self.transport,
        ));
        let jobs = Arc::new(JobRouter::new(self.channel));

        Sdk { http, jobs }
    }
}
