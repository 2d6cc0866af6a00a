//! Shared Testing Utilities for the JSON-RPC Client Workspace
//!
//! This crate provides a scriptable transport and payload helpers used by
//! the integration tests, so they can drive the full dispatch pipeline
//! without a network.

pub mod mock;

// Re-export the main types for convenience
pub use mock::MockTransport;
