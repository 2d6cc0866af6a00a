use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::JsonRpcError;
use crate::types::{JsonRpcVersion, RequestId};

/// A successful JSON-RPC response
///
/// The `result` member is kept as a raw [`Value`]; interpreting it is the
/// caller's business. A `null` result is still a success.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    #[serde(rename = "jsonrpc", default)]
    pub version: JsonRpcVersion,
    pub id: RequestId,
    pub result: Value,
}

impl JsonRpcResponse {
    pub fn new(id: RequestId, result: Value) -> Self {
        Self {
            version: JsonRpcVersion::V2_0,
            id,
            result,
        }
    }
}

/// Union type that represents either a successful response or an error response
///
/// The error variant is listed first so that a payload carrying both `result`
/// and `error` members decodes as an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum JsonRpcMessage {
    /// Error response with error field
    Error(JsonRpcError),
    /// Successful response with result field
    Response(JsonRpcResponse),
}

impl JsonRpcMessage {
    /// Check if this is an error response
    pub fn is_error(&self) -> bool {
        matches!(self, JsonRpcMessage::Error(_))
    }

    /// Get the request ID from either response or error
    pub fn id(&self) -> Option<&RequestId> {
        match self {
            JsonRpcMessage::Response(resp) => Some(&resp.id),
            JsonRpcMessage::Error(err) => err.id.as_ref(),
        }
    }

    /// Split the message into the `result` value or the error envelope.
    pub fn into_result(self) -> Result<Value, JsonRpcError> {
        match self {
            JsonRpcMessage::Response(resp) => Ok(resp.result),
            JsonRpcMessage::Error(err) => Err(err),
        }
    }
}

impl From<JsonRpcResponse> for JsonRpcMessage {
    fn from(response: JsonRpcResponse) -> Self {
        Self::Response(response)
    }
}

impl From<JsonRpcError> for JsonRpcMessage {
    fn from(error: JsonRpcError) -> Self {
        Self::Error(error)
    }
}
