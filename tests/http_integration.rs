//! HTTP integration tests — real round trips through the reqwest transport
//! against an in-process axum listener, asserting auth headers and body
//! presence server-side.

use axum::extract::Path;
use axum::http::HeaderMap;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use std::sync::Arc;
use washline_sdk::auth::StaticCredentials;
use washline_sdk::jobs::{Channel, OutgoingMessage};
use washline_sdk::{Error, Sdk};

/// The persistent connection is irrelevant here; satisfy the contract with a
/// sink.
struct NullChannel;

impl Channel for NullChannel {
    fn emit(&self, _message: &OutgoingMessage) -> washline_sdk::Result<()> {
        Ok(())
    }
}

async fn get_user(Path(id): Path<String>) -> Json<Value> {
    Json(json!({"id": id}))
}

/// Echo what the server observed: the Authorization header and the raw body.
async fn echo(headers: HeaderMap, body: String) -> Json<Value> {
    let auth = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    Json(json!({"auth": auth, "body": body}))
}

async fn not_found() -> (axum::http::StatusCode, &'static str) {
    (axum::http::StatusCode::NOT_FOUND, "no such resource")
}

/// Spin up the test server on a random port, return its base URL.
async fn start_test_server() -> String {
    let app = Router::new()
        .route(
            "/api/users/{id}",
            get(get_user).delete(|| async { axum::http::StatusCode::NO_CONTENT }),
        )
        .route("/api/echo", post(echo))
        .route("/api/laundries/{id}/invite-code", post(echo))
        .route("/api/missing", get(not_found));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}/api")
}

fn sdk(base_url: &str, provider: StaticCredentials) -> Sdk {
    Sdk::builder(Arc::new(NullChannel))
        .base_url(base_url)
        .credential_provider(Arc::new(provider))
        .build()
}

#[tokio::test]
async fn get_round_trip_parses_body() {
    let base_url = start_test_server().await;
    let sdk = sdk(&base_url, StaticCredentials::bearer("tok"));

    let user: Value = sdk.users().get("u42").await.unwrap();
    assert_eq!(user, json!({"id": "u42"}));
}

#[tokio::test]
async fn bearer_header_reaches_the_server() {
    let base_url = start_test_server().await;
    let sdk = sdk(&base_url, StaticCredentials::bearer("xyz"));

    let seen: Value = sdk.http().post("/echo", Some(json!({"x": 1}))).await.unwrap();
    assert_eq!(seen["auth"], "Bearer xyz");
    assert_eq!(seen["body"], r#"{"x":1}"#);
}

#[tokio::test]
async fn basic_header_is_base64_of_the_pair() {
    let base_url = start_test_server().await;
    let sdk = sdk(&base_url, StaticCredentials::basic("a", "b"));

    let seen: Value = sdk.http().post("/echo", Some(json!({}))).await.unwrap();
    assert_eq!(seen["auth"], "Basic YTpi");
}

#[tokio::test]
async fn invite_code_post_arrives_with_empty_body() {
    let base_url = start_test_server().await;
    let sdk = sdk(&base_url, StaticCredentials::bearer("tok"));

    let seen: Value = sdk.laundries().create_invite_code("l1").await.unwrap();
    assert_eq!(seen["body"], "");
}

#[tokio::test]
async fn non_2xx_surfaces_status_and_body_verbatim() {
    let base_url = start_test_server().await;
    let sdk = sdk(&base_url, StaticCredentials::bearer("tok"));

    let err = sdk.http().get::<Value>("/missing").await.unwrap_err();
    match err {
        Error::Status { status, body } => {
            assert_eq!(status, 404);
            assert_eq!(body, "no such resource");
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn delete_round_trip() {
    let base_url = start_test_server().await;
    let sdk = sdk(&base_url, StaticCredentials::bearer("tok"));

    sdk.users().delete("u1").await.unwrap();
}
