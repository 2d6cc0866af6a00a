//! # JSON-RPC Wire Types Prelude
//!
//! This module provides convenient re-exports of the most commonly used types
//! from the wire format library.
//!
//! ```rust
//! use strix_jsonrpc::prelude::*;
//! ```

// Core JSON-RPC types
pub use crate::error::{JsonRpcError, JsonRpcErrorCode, JsonRpcErrorObject};
pub use crate::notification::JsonRpcNotification;
pub use crate::request::{JsonRpcRequest, ParamsError, RequestParams};
pub use crate::response::{JsonRpcMessage, JsonRpcResponse};
pub use crate::types::{JsonRpcVersion, RequestId};

// Standard error codes
pub use crate::error_codes::*;
