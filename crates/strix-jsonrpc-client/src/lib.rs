//! # JSON-RPC Client Library
//!
//! An async JSON-RPC 2.0 request dispatcher. The client builds request
//! envelopes, posts them over a pluggable transport, and runs every reply
//! through a response pipeline with caller-registered hooks before handing
//! back the `result` value.
//!
//! ## Features
//!
//! - **Envelope building**: monotonically increasing ids and params
//!   validation, shared safely across concurrent tasks
//! - **Pluggable transport**: HTTP POST out of the box, or any [`Transport`]
//!   implementation
//! - **Response hooks**: status-keyed callbacks and payload-guarded
//!   callbacks with veto semantics
//! - **Typed errors**: transport failures, server-reported JSON-RPC errors,
//!   and malformed payloads each surface as their own variant
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use serde_json::json;
//! use strix_jsonrpc_client::RpcClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = RpcClient::builder("https://api.example.com/rpc")
//!         .debug(true)
//!         .build()?;
//!
//!     let user = client.request("user.get", json!({"id": 42})).await?;
//!     println!("user: {user}");
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Response Hooks
//!
//! Hooks run against every response, in registration order. Status hooks
//! fire before status validation, so they see rejected statuses too;
//! payload hooks run after the body decodes, and a predicate returning
//! `false` vetoes every hook behind it.
//!
//! ```rust,no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use strix_jsonrpc_client::RpcClient;
//!
//! let client = RpcClient::builder("https://api.example.com/rpc")
//!     .on_statuses(vec![401, 403], || {
//!         println!("session expired, redirecting to login");
//!         Ok(())
//!     })
//!     .on_payload(
//!         |payload| payload.get("error").is_none(),
//!         || {
//!             println!("call went through");
//!             Ok(())
//!         },
//!     )
//!     .build()?;
//! # Ok(())
//! # }
//! ```

pub mod callbacks;
pub mod client;
pub mod config;
pub mod error;
pub mod prelude;
pub mod transport;

mod envelope;
mod pipeline;

// Re-export main types
pub use callbacks::{CallbackRegistry, Trigger};
pub use client::{RpcClient, RpcClientBuilder};
pub use config::{ClientConfig, CredentialsMode, default_headers};
pub use error::{ClientError, ClientResult, RpcError, TransportError};

// Re-export transport types
pub use transport::{HttpTransport, Transport, TransportRequest, TransportResponse};

// Re-export wire types for convenience
pub use strix_jsonrpc::*;
