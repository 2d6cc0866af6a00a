//! Demonstrates status-keyed and payload-guarded response hooks
//!
//! Points a client at a JSON-RPC endpoint, registers a hook that reacts to
//! auth rejections and a payload-guarded hook that only fires on error
//! replies, then issues a call.

use serde_json::json;
use strix_jsonrpc_client::{ClientError, RpcClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let endpoint = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "http://127.0.0.1:4000/rpc".to_string());

    println!("Dispatching against {endpoint}");

    let client = RpcClient::builder(&endpoint)
        .debug(true)
        .on_statuses(vec![401, 403], || {
            println!("  hook: auth rejected, a real app would redirect to login");
            Ok(())
        })
        .on_payload(
            |payload| payload.get("error").is_some(),
            || {
                println!("  hook: server reported a method-level failure");
                Ok(())
            },
        )
        .build()?;

    match client.request("system.listMethods", json!(null)).await {
        Ok(result) => println!("✅ result: {result}"),
        Err(ClientError::Rpc(err)) => {
            println!(
                "❌ method {} failed: {} (code {:?})",
                err.request().method,
                err.message(),
                err.code()
            );
        }
        Err(other) => println!("❌ request never completed: {other}"),
    }

    Ok(())
}
