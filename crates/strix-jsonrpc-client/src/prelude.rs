//! # JSON-RPC Client Prelude
//!
//! This module provides convenient re-exports of the most commonly used
//! types and traits from the client library.
//!
//! ```rust
//! use strix_jsonrpc_client::prelude::*;
//! ```

// Core client types
pub use crate::callbacks::{CallbackRegistry, Trigger};
pub use crate::client::{RpcClient, RpcClientBuilder};
pub use crate::config::{ClientConfig, CredentialsMode};
pub use crate::error::{ClientError, ClientResult, RpcError, TransportError};

// Transport types
pub use crate::transport::{HttpTransport, Transport, TransportRequest, TransportResponse};

// Re-export wire types for convenience
pub use strix_jsonrpc::prelude::*;

// Standard library types commonly used alongside the client
pub use std::time::Duration;
