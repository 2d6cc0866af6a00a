//! Request envelope construction
//!
//! Pure construction: wraps method and params in a JSON-RPC 2.0 envelope
//! under the id the facade assigned, and pairs it with a transport
//! descriptor carrying the credentials mode and a snapshot of the current
//! headers.

use std::collections::HashMap;

use strix_jsonrpc::{JsonRpcNotification, JsonRpcRequest, RequestParams};

use crate::config::CredentialsMode;
use crate::transport::{RequestBody, TransportRequest};

/// Build a call envelope and its transport descriptor.
pub(crate) fn build(
    id: i64,
    method: &str,
    params: Option<RequestParams>,
    credentials: CredentialsMode,
    headers: HashMap<String, String>,
) -> (JsonRpcRequest, TransportRequest) {
    let envelope = JsonRpcRequest::new(id, method, params);
    let descriptor = TransportRequest {
        headers,
        credentials,
        body: RequestBody::Call(envelope.clone()),
    };
    (envelope, descriptor)
}

/// Build a notification descriptor. Notifications carry no id and expect no
/// reply body.
pub(crate) fn build_notification(
    method: &str,
    params: Option<RequestParams>,
    credentials: CredentialsMode,
    headers: HashMap<String, String>,
) -> TransportRequest {
    TransportRequest {
        headers,
        credentials,
        body: RequestBody::Notification(JsonRpcNotification::new(method, params)),
    }
}
