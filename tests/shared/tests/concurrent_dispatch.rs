//! Concurrency behaviour of a shared client
//!
//! A client wrapped in an `Arc` is meant to be shared across tasks, with the
//! id counter keeping concurrent calls distinct.

use std::collections::HashSet;
use std::sync::Arc;

use serde_json::json;
use strix_jsonrpc_client::RpcClient;
use strix_test_support::MockTransport;

const TASKS: usize = 50;

#[tokio::test]
async fn test_concurrent_requests_get_distinct_ids() {
    let _ = tracing_subscriber::fmt::try_init();

    let transport = MockTransport::new();
    for _ in 0..TASKS {
        // The dispatcher never correlates reply ids, so a fixed body works
        // for every in-flight call.
        transport.reply_raw(200, "OK", r#"{"jsonrpc":"2.0","id":0,"result":null}"#);
    }

    let client = Arc::new(
        RpcClient::builder("http://127.0.0.1:4000/rpc")
            .with_transport(transport.clone())
            .build()
            .expect("client should build"),
    );

    let mut handles = Vec::new();
    for _ in 0..TASKS {
        let client = Arc::clone(&client);
        handles.push(tokio::spawn(async move {
            client.request("ping", json!(null)).await
        }));
    }
    for handle in handles {
        handle
            .await
            .expect("task should not panic")
            .expect("request should succeed");
    }

    let ids: HashSet<i64> = transport
        .requests()
        .iter()
        .filter_map(|request| request.body.id().and_then(|id| id.as_i64()))
        .collect();

    assert_eq!(ids.len(), TASKS);
    assert_eq!(ids.iter().min(), Some(&1));
    assert_eq!(ids.iter().max(), Some(&(TASKS as i64)));
}

#[tokio::test]
async fn test_shared_header_updates_are_seen_by_other_tasks() {
    let _ = tracing_subscriber::fmt::try_init();

    let transport = MockTransport::new();
    transport.reply_result(1, json!(null));

    let client = Arc::new(
        RpcClient::builder("http://127.0.0.1:4000/rpc")
            .with_transport(transport.clone())
            .build()
            .expect("client should build"),
    );

    let writer = Arc::clone(&client);
    tokio::spawn(async move {
        writer.set_headers(std::collections::HashMap::from([(
            "X-Tenant".to_string(),
            "acme".to_string(),
        )]));
    })
    .await
    .expect("task should not panic");

    client
        .request("ping", json!(null))
        .await
        .expect("request should succeed");

    let requests = transport.requests();
    assert_eq!(
        requests[0].headers.get("X-Tenant").map(String::as_str),
        Some("acme")
    );
}
