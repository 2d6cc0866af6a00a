//! Transport layer for the JSON-RPC client

use async_trait::async_trait;
use bytes::Bytes;
use once_cell::sync::OnceCell;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;

use strix_jsonrpc::{JsonRpcNotification, JsonRpcRequest, RequestId};

use crate::config::CredentialsMode;
use crate::error::TransportError;

pub mod http;

pub use http::HttpTransport;

/// Outbound JSON-RPC body: a call expecting a reply, or a fire-and-forget
/// notification
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum RequestBody {
    Call(JsonRpcRequest),
    Notification(JsonRpcNotification),
}

impl RequestBody {
    pub fn method(&self) -> &str {
        match self {
            RequestBody::Call(request) => &request.method,
            RequestBody::Notification(notification) => &notification.method,
        }
    }

    pub fn id(&self) -> Option<&RequestId> {
        match self {
            RequestBody::Call(request) => Some(&request.id),
            RequestBody::Notification(_) => None,
        }
    }
}

/// Everything the transport needs to put one request on the wire.
///
/// The header map is a snapshot taken when the envelope was built; header
/// mutations on the client after this point do not affect it.
#[derive(Debug, Clone)]
pub struct TransportRequest {
    pub headers: HashMap<String, String>,
    pub credentials: CredentialsMode,
    pub body: RequestBody,
}

/// Raw transport response: the status line plus the undecoded body
#[derive(Debug)]
pub struct TransportResponse {
    status: u16,
    status_text: String,
    body: Bytes,
    decoded: OnceCell<Value>,
}

impl TransportResponse {
    pub fn new(status: u16, status_text: impl Into<String>, body: Bytes) -> Self {
        Self {
            status,
            status_text: status_text.into(),
            body,
            decoded: OnceCell::new(),
        }
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn status_text(&self) -> &str {
        &self.status_text
    }

    pub fn body(&self) -> &Bytes {
        &self.body
    }

    /// Decode the body as JSON.
    ///
    /// The body is parsed at most once; repeated calls return the cached
    /// value without rereading the bytes.
    pub fn payload(&self) -> Result<&Value, serde_json::Error> {
        self.decoded.get_or_try_init(|| serde_json::from_slice(&self.body))
    }
}

/// Transport trait defining the interface for request execution.
///
/// Implementations speak one wire protocol (HTTP POST here) and report
/// failures before JSON-RPC semantics apply; everything downstream of the
/// status line is the pipeline's business.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Put one request on the wire and return the raw response
    async fn execute(
        &self,
        request: &TransportRequest,
    ) -> Result<TransportResponse, TransportError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use strix_jsonrpc::RequestParams;

    #[test]
    fn test_request_body_serializes_flat() {
        let body = RequestBody::Call(JsonRpcRequest::new(
            3,
            "math.add",
            Some(RequestParams::from(vec![json!(1), json!(2)])),
        ));

        let encoded = serde_json::to_value(&body).unwrap();
        assert_eq!(
            encoded,
            json!({"jsonrpc": "2.0", "id": 3, "method": "math.add", "params": [1, 2]})
        );
    }

    #[test]
    fn test_notification_body_has_no_id() {
        let body = RequestBody::Notification(JsonRpcNotification::new_no_params("cache.flush"));
        assert_eq!(body.id(), None);
        assert_eq!(body.method(), "cache.flush");

        let encoded = serde_json::to_value(&body).unwrap();
        assert!(encoded.get("id").is_none());
    }

    #[test]
    fn test_payload_is_decoded_once() {
        let response = TransportResponse::new(
            200,
            "OK",
            Bytes::from_static(b"{\"jsonrpc\":\"2.0\",\"id\":1,\"result\":{\"ok\":true}}"),
        );

        let first = response.payload().unwrap() as *const Value;
        let second = response.payload().unwrap() as *const Value;
        assert_eq!(first, second);
    }

    #[test]
    fn test_payload_decode_failure() {
        let response = TransportResponse::new(200, "OK", Bytes::from_static(b"not json"));
        assert!(response.payload().is_err());
        // a failed decode is retried on the next access, not cached
        assert!(response.payload().is_err());
    }
}
