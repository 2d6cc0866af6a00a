//! End-to-end dispatch tests
//!
//! Drives the client through the full request/response pipeline against a
//! scripted transport: envelope building, wire shape, result extraction,
//! typed results, and notifications.

use std::sync::Arc;

use serde::Deserialize;
use serde_json::json;
use strix_jsonrpc::RequestId;
use strix_jsonrpc_client::{ClientError, RpcClient, TransportError};
use strix_test_support::MockTransport;

fn client_with(transport: Arc<MockTransport>) -> RpcClient {
    RpcClient::builder("http://127.0.0.1:4000/rpc")
        .with_transport(transport)
        .build()
        .expect("client should build")
}

#[tokio::test]
async fn test_result_round_trip() {
    let _ = tracing_subscriber::fmt::try_init();

    let transport = MockTransport::new();
    transport.reply_result(1, json!({"name": "alice", "age": 30}));
    let client = client_with(transport.clone());

    let result = client
        .request("user.get", json!({"id": 42}))
        .await
        .expect("request should succeed");

    assert_eq!(result, json!({"name": "alice", "age": 30}));

    // The wire request carried the full envelope.
    let requests = transport.requests();
    assert_eq!(requests.len(), 1);
    let body = serde_json::to_value(&requests[0].body).expect("body should serialize");
    assert_eq!(body["jsonrpc"], "2.0");
    assert_eq!(body["id"], 1);
    assert_eq!(body["method"], "user.get");
    assert_eq!(body["params"], json!({"id": 42}));
}

#[tokio::test]
async fn test_ids_increase_across_calls() {
    let _ = tracing_subscriber::fmt::try_init();

    let transport = MockTransport::new();
    transport.reply_result(1, json!(null));
    transport.reply_result(2, json!(null));
    transport.reply_result(3, json!(null));
    let client = client_with(transport.clone());

    client.request("a", json!(null)).await.unwrap();
    client.request("b", json!([1])).await.unwrap();
    client.request("c", json!({"k": 1})).await.unwrap();

    let ids: Vec<_> = transport
        .requests()
        .iter()
        .map(|request| request.body.id().cloned())
        .collect();
    assert_eq!(
        ids,
        vec![
            Some(RequestId::Number(1)),
            Some(RequestId::Number(2)),
            Some(RequestId::Number(3))
        ]
    );
}

#[tokio::test]
async fn test_first_id_offsets_the_sequence() {
    let _ = tracing_subscriber::fmt::try_init();

    let transport = MockTransport::new();
    transport.reply_result(100, json!(null));
    let client = RpcClient::builder("http://127.0.0.1:4000/rpc")
        .with_transport(transport.clone())
        .first_id(100)
        .build()
        .expect("client should build");

    client.request("a", json!(null)).await.unwrap();

    let requests = transport.requests();
    assert_eq!(requests[0].body.id(), Some(&RequestId::Number(100)));
}

#[tokio::test]
async fn test_request_as_gives_typed_result() {
    #[derive(Debug, Deserialize, PartialEq)]
    struct User {
        name: String,
        age: u32,
    }

    let _ = tracing_subscriber::fmt::try_init();

    let transport = MockTransport::new();
    transport.reply_result(1, json!({"name": "alice", "age": 30}));
    let client = client_with(transport);

    let user: User = client
        .request_as("user.get", json!({"id": 42}))
        .await
        .expect("request should succeed");

    assert_eq!(
        user,
        User {
            name: "alice".to_string(),
            age: 30
        }
    );
}

#[tokio::test]
async fn test_typed_result_shape_mismatch_is_json_error() {
    #[derive(Debug, Deserialize)]
    struct User {
        #[allow(dead_code)]
        name: String,
    }

    let _ = tracing_subscriber::fmt::try_init();

    let transport = MockTransport::new();
    transport.reply_result(1, json!(42));
    let client = client_with(transport);

    let result = client.request_as::<User>("user.get", json!(null)).await;

    assert!(matches!(result, Err(ClientError::Json(_))));
}

#[tokio::test]
async fn test_notify_has_no_id_and_skips_payload_decoding() {
    let _ = tracing_subscriber::fmt::try_init();

    let transport = MockTransport::new();
    // An empty body would fail JSON decoding, so this also proves the
    // notification path never looks at the payload.
    transport.reply_raw(204, "No Content", "");
    let client = client_with(transport.clone());

    client
        .notify("cache.flush", json!({"scope": "all"}))
        .await
        .expect("notification should succeed");

    let requests = transport.requests();
    assert_eq!(requests.len(), 1);
    let body = serde_json::to_value(&requests[0].body).expect("body should serialize");
    assert_eq!(body["jsonrpc"], "2.0");
    assert_eq!(body["method"], "cache.flush");
    assert_eq!(body.get("id"), None);
}

#[tokio::test]
async fn test_rejected_notification_is_a_transport_error() {
    let _ = tracing_subscriber::fmt::try_init();

    let transport = MockTransport::new();
    transport.reply_raw(503, "Service Unavailable", "try later");
    let client = client_with(transport);

    let result = client.notify("cache.flush", json!(null)).await;

    match result {
        Err(ClientError::Transport(TransportError::Status { status, .. })) => {
            assert_eq!(status, 503)
        }
        other => panic!("expected transport status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_connection_failure_surfaces() {
    let _ = tracing_subscriber::fmt::try_init();

    let transport = MockTransport::new();
    transport.fail(TransportError::ConnectionFailed(
        "Failed to reach http://127.0.0.1:4000/rpc".to_string(),
    ));
    let client = client_with(transport);

    let result = client.request("user.get", json!(null)).await;

    assert!(matches!(
        result,
        Err(ClientError::Transport(TransportError::ConnectionFailed(_)))
    ));
}
