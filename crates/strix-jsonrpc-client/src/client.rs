//! Main JSON-RPC client implementation

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;

use parking_lot::RwLock;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use strix_jsonrpc::RequestParams;

use crate::callbacks::CallbackRegistry;
use crate::config::{ClientConfig, CredentialsMode, merge_headers};
use crate::envelope;
use crate::error::ClientResult;
use crate::pipeline;
use crate::transport::{HttpTransport, Transport};

/// JSON-RPC 2.0 request dispatcher.
///
/// Builds request envelopes with monotonically increasing ids, posts them
/// through a [`Transport`], and runs every reply through the response
/// pipeline: status callbacks, status validation, payload decoding, payload
/// callbacks, and result extraction.
///
/// All methods take `&self`; a client wrapped in an [`Arc`] can be shared
/// across tasks and concurrent calls still get distinct ids.
pub struct RpcClient {
    /// Transport layer
    transport: Arc<dyn Transport>,
    /// Credentials mode stamped on every outgoing descriptor
    credentials: CredentialsMode,
    /// Whether to log response outcomes
    debug: bool,
    /// Headers applied to every request, snapshotted at build time
    headers: RwLock<HashMap<String, String>>,
    /// Response hooks, dispatched in registration order
    callbacks: CallbackRegistry,
    /// Next request id
    next_id: AtomicI64,
}

impl RpcClient {
    /// Create a client for the given endpoint with default settings.
    pub fn new(endpoint: &str) -> ClientResult<Self> {
        Self::builder(endpoint).build()
    }

    /// Start building a client for the given endpoint.
    pub fn builder(endpoint: &str) -> RpcClientBuilder {
        RpcClientBuilder {
            endpoint: endpoint.to_string(),
            config: ClientConfig::default(),
            callbacks: CallbackRegistry::new(),
            transport: None,
            first_id: 1,
        }
    }

    /// Call a remote method and return its `result` value.
    ///
    /// `params` must be a JSON array, object, or `null`; anything else is
    /// rejected before the request is dispatched. A reply carrying an
    /// `error` member surfaces as [`ClientError::Rpc`], with the originating
    /// envelope attached for context.
    ///
    /// [`ClientError::Rpc`]: crate::error::ClientError::Rpc
    pub async fn request(&self, method: &str, params: Value) -> ClientResult<Value> {
        let params = RequestParams::from_value(params)?;
        let headers = self.headers.read().clone();
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let (envelope, descriptor) =
            envelope::build(id, method, params, self.credentials, headers);

        debug!(method = %envelope.method, id = %envelope.id, "Dispatching request");

        let response = self.transport.execute(&descriptor).await?;
        pipeline::run(&self.callbacks, envelope, response, self.debug)
    }

    /// Call a remote method and deserialize its `result` into `T`.
    pub async fn request_as<T: DeserializeOwned>(
        &self,
        method: &str,
        params: Value,
    ) -> ClientResult<T> {
        let value = self.request(method, params).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Fire a notification: a call without an id, expecting no reply body.
    ///
    /// Status callbacks and status validation still run, so a rejected
    /// notification surfaces as a transport error.
    pub async fn notify(&self, method: &str, params: Value) -> ClientResult<()> {
        let params = RequestParams::from_value(params)?;
        let headers = self.headers.read().clone();
        let descriptor = envelope::build_notification(method, params, self.credentials, headers);

        debug!(method = %descriptor.body.method(), "Dispatching notification");

        let response = self.transport.execute(&descriptor).await?;
        self.callbacks.dispatch_status(response.status())?;
        pipeline::check_status(&response)?;
        Ok(())
    }

    /// Merge `updates` into the header set used by subsequent requests.
    ///
    /// Requests already built keep the snapshot they were built with.
    pub fn set_headers(&self, updates: HashMap<String, String>) {
        let mut headers = self.headers.write();
        merge_headers(&mut headers, updates);
    }

    /// Current header set.
    pub fn headers(&self) -> HashMap<String, String> {
        self.headers.read().clone()
    }

    /// The credentials mode stamped on outgoing requests.
    pub fn credentials(&self) -> CredentialsMode {
        self.credentials
    }
}

/// Builder for creating JSON-RPC clients
pub struct RpcClientBuilder {
    endpoint: String,
    config: ClientConfig,
    callbacks: CallbackRegistry,
    transport: Option<Arc<dyn Transport>>,
    first_id: i64,
}

impl RpcClientBuilder {
    /// Set the credentials mode (defaults to [`CredentialsMode::Include`]).
    pub fn credentials(mut self, credentials: CredentialsMode) -> Self {
        self.config.credentials = credentials;
        self
    }

    /// Add or replace a single default header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.headers.insert(name.into(), value.into());
        self
    }

    /// Merge a batch of headers into the defaults.
    pub fn headers(mut self, headers: HashMap<String, String>) -> Self {
        self.config.merge_headers(headers);
        self
    }

    /// Enable logging of response outcomes.
    pub fn debug(mut self, debug: bool) -> Self {
        self.config.debug = debug;
        self
    }

    /// Set the request timeout for the default HTTP transport.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set the id assigned to the first request (defaults to 1).
    pub fn first_id(mut self, first_id: i64) -> Self {
        self.first_id = first_id;
        self
    }

    /// Register a reaction for a single status code.
    pub fn on_status<F>(mut self, status: u16, reaction: F) -> Self
    where
        F: Fn() -> Result<(), String> + Send + Sync + 'static,
    {
        self.callbacks.on_status(status, reaction);
        self
    }

    /// Register a reaction for a set of status codes.
    pub fn on_statuses<F>(mut self, statuses: Vec<u16>, reaction: F) -> Self
    where
        F: Fn() -> Result<(), String> + Send + Sync + 'static,
    {
        self.callbacks.on_statuses(statuses, reaction);
        self
    }

    /// Register a payload-guarded reaction.
    pub fn on_payload<P, F>(mut self, predicate: P, reaction: F) -> Self
    where
        P: Fn(&Value) -> bool + Send + Sync + 'static,
        F: Fn() -> Result<(), String> + Send + Sync + 'static,
    {
        self.callbacks.on_payload(predicate, reaction);
        self
    }

    /// Register a payload-guarded reaction limited to some statuses.
    pub fn on_payload_for_statuses<P, F>(
        mut self,
        statuses: Vec<u16>,
        predicate: P,
        reaction: F,
    ) -> Self
    where
        P: Fn(&Value) -> bool + Send + Sync + 'static,
        F: Fn() -> Result<(), String> + Send + Sync + 'static,
    {
        self.callbacks.on_payload_for_statuses(statuses, predicate, reaction);
        self
    }

    /// Replace the default HTTP transport.
    pub fn with_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Build the client.
    ///
    /// Unless a transport was injected, this constructs an HTTP transport
    /// for the endpoint, which fails on an unusable URL.
    pub fn build(self) -> ClientResult<RpcClient> {
        let transport: Arc<dyn Transport> = match self.transport {
            Some(transport) => transport,
            None => Arc::new(
                HttpTransport::builder(&self.endpoint)
                    .timeout(self.config.timeout)
                    .credentials(self.config.credentials)
                    .build()?,
            ),
        };

        Ok(RpcClient {
            transport,
            credentials: self.config.credentials,
            debug: self.config.debug,
            headers: RwLock::new(self.config.headers),
            callbacks: self.callbacks,
            next_id: AtomicI64::new(self.first_id),
        })
    }
}
