//! Job correlation engine.
//!
//! Converts fire-and-forget messages on a shared persistent connection into
//! awaitable request/response pairs. Every outgoing message is tagged with a
//! fresh [`JobId`]; a one-shot waiter registered under that id resolves when
//! a correspondingly tagged reply is observed, regardless of arrival order or
//! how many calls are concurrently in flight.
//!
//! Invariants:
//!   - Job identifiers are strictly increasing and never reused.
//!   - At most one waiter is registered per identifier at any time.
//!   - Waiter registration strictly precedes message emission, so a reply can
//!     never arrive before anyone is listening.
//!   - A waiter fires at most once; a second reply for the same identifier is
//!     discarded with no observable effect.
//!
//! Plain [`JobRouter::invoke`] waits forever if no reply ever arrives — the
//! remote protocol promises exactly one reply per job and the engine does not
//! second-guess it. Callers that want a deadline use
//! [`JobRouter::invoke_with_timeout`].

use crate::types::{Error, JobId, Result};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot, RwLock};
use tokio::task::JoinHandle;
use tokio::time::Duration;

// =============================================================================
// Wire types
// =============================================================================

/// Message emitted over the persistent connection.
///
/// Serializes to the remote protocol's shape: the action name, the job id
/// under `jobId`, and each positional argument keyed by its stringified
/// index:
///
/// ```json
/// {"action": "listUsers", "jobId": 7, "0": {"limit": 10}}
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct OutgoingMessage {
    pub action: String,
    pub job_id: JobId,
    pub args: Vec<serde_json::Value>,
}

impl Serialize for OutgoingMessage {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2 + self.args.len()))?;
        map.serialize_entry("action", &self.action)?;
        map.serialize_entry("jobId", &self.job_id)?;
        for (index, arg) in self.args.iter().enumerate() {
            map.serialize_entry(&index.to_string(), arg)?;
        }
        map.end()
    }
}

/// The "current job" snapshot exposed by the surrounding application state.
///
/// The observed payload *is* the fulfillment value of the corresponding
/// pending call; the engine applies no transformation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobUpdate {
    #[serde(rename = "jobId")]
    pub job_id: JobId,
    #[serde(default)]
    pub payload: serde_json::Value,
}

/// Narrow contract for the persistent connection: fire a tagged message, no
/// delivery guarantee owned by this engine.
pub trait Channel: Send + Sync {
    fn emit(&self, message: &OutgoingMessage) -> Result<()>;
}

// =============================================================================
// Router
// =============================================================================

/// The correlation engine: id counter plus pending-waiter registry.
///
/// The counter is scoped to the router instance (one router per connection),
/// so two SDKs pointed at different channels keep independent sequences and
/// cannot collide by construction.
pub struct JobRouter {
    /// Next identifier to hand out. Starts at 1, never reset.
    next_id: AtomicU64,

    /// Pending waiters keyed by job identifier. An entry exists from the
    /// moment a message is emitted until exactly one matching reply is
    /// observed (or a timed-out caller abandons it).
    pending: RwLock<HashMap<JobId, oneshot::Sender<serde_json::Value>>>,

    channel: Arc<dyn Channel>,
}

impl fmt::Debug for JobRouter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JobRouter")
            .field("next_id", &self.next_id)
            .finish_non_exhaustive()
    }
}

impl JobRouter {
    /// Create a router emitting over the given connection.
    pub fn new(channel: Arc<dyn Channel>) -> Self {
        Self {
            next_id: AtomicU64::new(1),
            pending: RwLock::new(HashMap::new()),
            channel,
        }
    }

    /// Emit `action` with positional `args` and await the correlated reply.
    ///
    /// Completion order follows reply arrival, not invocation order; callers
    /// must not assume FIFO settlement. There is no cancellation path: if no
    /// reply ever arrives this future never resolves.
    pub async fn invoke(&self, action: &str, args: Vec<serde_json::Value>) -> Result<serde_json::Value> {
        let (id, rx) = self.register_and_emit(action, args).await?;
        rx.await
            .map_err(|_| Error::channel(format!("waiter for job {id} dropped without a reply")))
    }

    /// Like [`invoke`](Self::invoke), but gives up after `deadline`.
    ///
    /// On expiry the waiter is deregistered, so a late reply for the
    /// abandoned job is discarded like any other unknown identifier.
    pub async fn invoke_with_timeout(
        &self,
        action: &str,
        args: Vec<serde_json::Value>,
        deadline: Duration,
    ) -> Result<serde_json::Value> {
        let (id, rx) = self.register_and_emit(action, args).await?;

        match tokio::time::timeout(deadline, rx).await {
            Ok(Ok(payload)) => Ok(payload),
            Ok(Err(_)) => Err(Error::channel(format!(
                "waiter for job {id} dropped without a reply"
            ))),
            Err(_) => {
                self.pending.write().await.remove(&id);
                Err(Error::timeout(format!(
                    "no reply for job {id} within {deadline:?}"
                )))
            }
        }
    }

    /// Route an observed reply to its pending waiter.
    ///
    /// Returns `true` when a waiter was registered for `id`. Completing an
    /// unknown or already-resolved identifier is a no-op returning `false`
    /// (idempotent discard).
    pub async fn complete(&self, id: JobId, payload: serde_json::Value) -> bool {
        let waiter = self.pending.write().await.remove(&id);
        match waiter {
            Some(tx) => {
                // Send can only fail if the caller abandoned the receiver
                // (timed-out invoke); the waiter is gone either way.
                let delivered = tx.send(payload).is_ok();
                tracing::debug!("routed reply for job {} (delivered: {})", id, delivered);
                true
            }
            None => {
                tracing::debug!("discarded reply for unknown or resolved job {}", id);
                false
            }
        }
    }

    /// Bridge from a state-change observable: every current-job snapshot the
    /// store publishes is routed through [`complete`](Self::complete).
    ///
    /// The channel is unbounded so replies for jobs finishing back-to-back
    /// are all delivered; a latest-value cell would coalesce them and strand
    /// the earlier waiters.
    pub fn watch(self: Arc<Self>, mut store: mpsc::UnboundedReceiver<JobUpdate>) -> JoinHandle<()> {
        let router = self;
        tokio::spawn(async move {
            while let Some(update) = store.recv().await {
                router.complete(update.job_id, update.payload).await;
            }
            // Store dropped; in-flight waiters stay pending, matching the
            // no-cancellation contract.
        })
    }

    /// Number of jobs currently awaiting a reply.
    pub async fn pending_jobs(&self) -> usize {
        self.pending.read().await.len()
    }

    /// Draw the next id, register the waiter, then emit the tagged message.
    ///
    /// Registration must precede emission: a reply observed between the two
    /// steps already has somewhere to land. Emission failure deregisters the
    /// fresh waiter and surfaces the channel error; the burned id is never
    /// reused.
    async fn register_and_emit(
        &self,
        action: &str,
        args: Vec<serde_json::Value>,
    ) -> Result<(JobId, oneshot::Receiver<serde_json::Value>)> {
        let id = JobId::new(self.next_id.fetch_add(1, Ordering::Relaxed));
        let (tx, rx) = oneshot::channel();

        self.pending.write().await.insert(id, tx);

        let message = OutgoingMessage {
            action: action.to_string(),
            job_id: id,
            args,
        };

        if let Err(err) = self.channel.emit(&message) {
            self.pending.write().await.remove(&id);
            return Err(err);
        }

        tracing::debug!("emitted job {} action={}", id, message.action);

        Ok((id, rx))
    }
}

// =============================================================================
// Tests
// =============================================================================
