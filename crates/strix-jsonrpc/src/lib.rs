//! # JSON-RPC 2.0 Wire Types
//!
//! A pure, transport-agnostic model of the JSON-RPC 2.0 wire format as seen
//! from the client side. This crate provides the envelope types and nothing
//! else; request dispatch, HTTP plumbing, and response handling live in the
//! client crate.
//!
//! ## Features
//! - Full JSON-RPC 2.0 specification compliance for requests and notifications
//! - Lenient response decoding (a missing `jsonrpc` member is tolerated)
//! - Error responses win over success when a server sends both members
//! - No transport-specific code

pub mod error;
pub mod notification;
pub mod request;
pub mod response;
pub mod types;

pub mod prelude;

// Re-export main types
pub use error::{JsonRpcError, JsonRpcErrorCode, JsonRpcErrorObject};
pub use notification::JsonRpcNotification;
pub use request::{JsonRpcRequest, ParamsError, RequestParams};
pub use response::{JsonRpcMessage, JsonRpcResponse};
pub use types::{JsonRpcVersion, RequestId};

/// JSON-RPC 2.0 version constant
pub const JSONRPC_VERSION: &str = "2.0";

/// Standard JSON-RPC 2.0 error codes
pub mod error_codes {
    pub const PARSE_ERROR: i64 = -32700;
    pub const INVALID_REQUEST: i64 = -32600;
    pub const METHOD_NOT_FOUND: i64 = -32601;
    pub const INVALID_PARAMS: i64 = -32602;
    pub const INTERNAL_ERROR: i64 = -32603;

    // Server error range: -32099 to -32000
    pub const SERVER_ERROR_START: i64 = -32099;
    pub const SERVER_ERROR_END: i64 = -32000;
}
