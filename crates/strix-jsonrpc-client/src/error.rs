//! Error types for JSON-RPC client operations

use bytes::Bytes;
use serde_json::Value;
use thiserror::Error;

use strix_jsonrpc::{JsonRpcRequest, ParamsError};

/// Result type for JSON-RPC client operations
pub type ClientResult<T> = Result<T, ClientError>;

/// Comprehensive error type for JSON-RPC client operations
#[derive(Error, Debug)]
pub enum ClientError {
    /// Transport-level errors (bad status or network failure)
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// The server answered, but with a JSON-RPC error
    #[error("RPC error: {0}")]
    Rpc(#[from] RpcError),

    /// JSON parsing errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Request parameters were not an array, an object, or null
    #[error("Invalid params: {0}")]
    InvalidParams(#[from] ParamsError),

    /// A registered callback reported a failure
    #[error("Callback error: {0}")]
    Callback(String),

    /// Response body decoded, but carries neither `result` nor `error`
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ClientError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Check if the error came from the HTTP layer rather than the server's
    /// JSON-RPC handler
    pub fn is_transport_error(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// Check if the error was reported by the remote method itself
    pub fn is_rpc_error(&self) -> bool {
        matches!(self, Self::Rpc(_))
    }

    /// Get the server-supplied error code if this is an RPC error
    pub fn rpc_code(&self) -> Option<i64> {
        match self {
            Self::Rpc(err) => err.code(),
            _ => None,
        }
    }
}

/// Transport-specific errors
#[derive(Error, Debug)]
pub enum TransportError {
    /// The server answered with a status outside the accepted range
    #[error("HTTP status {status}: {status_text}")]
    Status {
        status: u16,
        status_text: String,
        body: Bytes,
    },

    #[error("HTTP transport error: {0}")]
    Http(String),

    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
}

impl TransportError {
    /// Get the HTTP status if this failure carries one
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Get the raw response body if this failure carries one
    pub fn body(&self) -> Option<&Bytes> {
        match self {
            Self::Status { body, .. } => Some(body),
            _ => None,
        }
    }
}

/// Failure reported by the remote method itself, carried in the JSON-RPC
/// `error` field of an otherwise well-formed response.
///
/// Keeps the originating request envelope so callers can tell which call
/// failed without tracking ids themselves.
#[derive(Error, Debug)]
#[error("{message}")]
pub struct RpcError {
    message: String,
    request: JsonRpcRequest,
    data: Option<Value>,
    code: Option<i64>,
}

impl RpcError {
    pub fn new(
        message: impl Into<String>,
        request: JsonRpcRequest,
        data: Option<Value>,
        code: Option<i64>,
    ) -> Self {
        Self {
            message: message.into(),
            request,
            data,
            code,
        }
    }

    /// The human-readable message the server sent
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The request envelope (method, params, id) that produced this error
    pub fn request(&self) -> &JsonRpcRequest {
        &self.request
    }

    /// The server-supplied `error.data` value, if any
    pub fn data(&self) -> Option<&Value> {
        self.data.as_ref()
    }

    /// The server-supplied `error.code`, if any
    pub fn code(&self) -> Option<i64> {
        self.code
    }

    pub fn has_message(&self) -> bool {
        !self.message.is_empty()
    }

    pub fn has_data(&self) -> bool {
        self.data.is_some()
    }
}
