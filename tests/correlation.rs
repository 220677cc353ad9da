//! End-to-end correlation tests: drive the public `Sdk` surface with a
//! recording channel and a job-update stream, mirroring how a host
//! application wires the persistent connection.

use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;
use washline_sdk::jobs::{Channel, JobUpdate, OutgoingMessage};
use washline_sdk::{JobId, Sdk};

/// Channel double capturing everything the SDK emits.
#[derive(Default)]
struct RecordingChannel {
    messages: Mutex<Vec<OutgoingMessage>>,
}

impl RecordingChannel {
    fn recorded(&self) -> Vec<OutgoingMessage> {
        self.messages.lock().unwrap().clone()
    }
}

impl Channel for RecordingChannel {
    fn emit(&self, message: &OutgoingMessage) -> washline_sdk::Result<()> {
        self.messages.lock().unwrap().push(message.clone());
        Ok(())
    }
}

async fn wait_for_pending(sdk: &Sdk, count: usize) {
    while sdk.jobs().pending_jobs().await != count {
        tokio::task::yield_now().await;
    }
}

/// Spec scenario: with the counter at 7, `invoke("listUsers", {limit: 10})`
/// emits `{"action": "listUsers", "jobId": 7, "0": {"limit": 10}}`; when the
/// store later reports current job 7 with payload `[{"id": "u1"}]`, the
/// pending call resolves to that payload.
#[tokio::test]
async fn invoke_resolves_through_the_state_store() {
    let channel = Arc::new(RecordingChannel::default());
    let sdk = Sdk::new(channel.clone());

    let (store_tx, store_rx) = mpsc::unbounded_channel();
    let observer = sdk.attach_store(store_rx);

    // Burn ids 1..=6 so the call under test draws 7.
    for _ in 0..6 {
        let inner = sdk.clone();
        let warmup = tokio::spawn(async move { inner.invoke("updateStats", vec![]).await });
        wait_for_pending(&sdk, 1).await;
        let id = channel.recorded().last().unwrap().job_id;
        sdk.jobs().complete(id, json!(null)).await;
        warmup.await.unwrap().unwrap();
    }

    let inner = sdk.clone();
    let call =
        tokio::spawn(async move { inner.invoke("listUsers", vec![json!({"limit": 10})]).await });
    wait_for_pending(&sdk, 1).await;

    let message = channel.recorded().last().unwrap().clone();
    assert_eq!(message.job_id, JobId::new(7));
    assert_eq!(
        serde_json::to_value(&message).unwrap(),
        json!({"action": "listUsers", "jobId": 7, "0": {"limit": 10}})
    );

    store_tx
        .send(JobUpdate {
            job_id: JobId::new(7),
            payload: json!([{"id": "u1"}]),
        })
        .unwrap();

    assert_eq!(call.await.unwrap().unwrap(), json!([{"id": "u1"}]));

    drop(store_tx);
    observer.await.unwrap();
}

/// Spec scenario: two concurrent calls; the reply for the later id arrives
/// first and resolves only its own caller.
#[tokio::test]
async fn later_reply_does_not_unblock_earlier_call() {
    let channel = Arc::new(RecordingChannel::default());
    let sdk = Sdk::new(channel.clone());

    let (store_tx, store_rx) = mpsc::unbounded_channel();
    let _observer = sdk.attach_store(store_rx);

    let a = sdk.clone();
    let first = tokio::spawn(async move { a.fetch_laundry("l1").await });
    wait_for_pending(&sdk, 1).await;

    let b = sdk.clone();
    let second = tokio::spawn(async move { b.fetch_laundry("l2").await });
    wait_for_pending(&sdk, 2).await;

    let messages = channel.recorded();
    let (id1, id2) = (messages[0].job_id, messages[1].job_id);
    assert!(id1 < id2);

    store_tx
        .send(JobUpdate {
            job_id: id2,
            payload: json!({"id": "l2"}),
        })
        .unwrap();

    assert_eq!(second.await.unwrap().unwrap(), json!({"id": "l2"}));
    tokio::task::yield_now().await;
    assert!(!first.is_finished());

    store_tx
        .send(JobUpdate {
            job_id: id1,
            payload: json!({"id": "l1"}),
        })
        .unwrap();

    assert_eq!(first.await.unwrap().unwrap(), json!({"id": "l1"}));
}

/// Two jobs finishing in the same tick publish two updates with no await in
/// between; both calls must still resolve.
#[tokio::test]
async fn rapid_successive_updates_resolve_all_calls() {
    let channel = Arc::new(RecordingChannel::default());
    let sdk = Sdk::new(channel.clone());

    let (store_tx, store_rx) = mpsc::unbounded_channel();
    let _observer = sdk.attach_store(store_rx);

    let a = sdk.clone();
    let first = tokio::spawn(async move { a.fetch_laundry("l1").await });
    wait_for_pending(&sdk, 1).await;

    let b = sdk.clone();
    let second = tokio::spawn(async move { b.fetch_laundry("l2").await });
    wait_for_pending(&sdk, 2).await;

    let messages = channel.recorded();
    store_tx
        .send(JobUpdate {
            job_id: messages[0].job_id,
            payload: json!({"id": "l1"}),
        })
        .unwrap();
    store_tx
        .send(JobUpdate {
            job_id: messages[1].job_id,
            payload: json!({"id": "l2"}),
        })
        .unwrap();

    assert_eq!(first.await.unwrap().unwrap(), json!({"id": "l1"}));
    assert_eq!(second.await.unwrap().unwrap(), json!({"id": "l2"}));
    assert_eq!(sdk.jobs().pending_jobs().await, 0);
}

#[tokio::test]
async fn invoke_with_timeout_gives_up_cleanly() {
    let channel = Arc::new(RecordingChannel::default());
    let sdk = Sdk::new(channel);

    let err = sdk
        .invoke_with_timeout("listUsers", vec![], std::time::Duration::from_millis(20))
        .await
        .unwrap_err();

    assert!(matches!(err, washline_sdk::Error::Timeout(_)));
    assert_eq!(sdk.jobs().pending_jobs().await, 0);
}

/// Sharing one SDK clone pair keeps a single id sequence; ids never collide
/// across concurrent callers.
#[tokio::test]
async fn clones_share_one_id_sequence() {
    let channel = Arc::new(RecordingChannel::default());
    let sdk = Sdk::new(channel.clone());

    let handles: Vec<_> = (0..5)
        .map(|_| {
            let clone = sdk.clone();
            tokio::spawn(async move { clone.invoke("listMachines", vec![]).await })
        })
        .collect();

    wait_for_pending(&sdk, 5).await;

    let mut ids: Vec<u64> = channel.recorded().iter().map(|m| m.job_id.as_u64()).collect();
    ids.sort_unstable();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);

    for message in channel.recorded() {
        sdk.jobs().complete(message.job_id, Value::Null).await;
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }
}
