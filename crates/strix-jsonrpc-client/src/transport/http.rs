//! HTTP transport implementation

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;
use url::Url;

use crate::config::CredentialsMode;
use crate::error::TransportError;
use crate::transport::{Transport, TransportRequest, TransportResponse};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP transport posting JSON-RPC bodies to a fixed endpoint.
///
/// The cookie policy is fixed when the transport is built: `omit` disables
/// the cookie store, the other modes enable it. Since every request goes to
/// the one configured endpoint, `same-origin` and `include` behave alike
/// here.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    /// HTTP client
    client: Client,
    /// Server endpoint URL
    endpoint: Url,
}

impl HttpTransport {
    /// Create a new HTTP transport with default settings
    pub fn new(endpoint: &str) -> Result<Self, TransportError> {
        Self::builder(endpoint).build()
    }

    /// Start configuring a transport for the given endpoint
    pub fn builder(endpoint: &str) -> HttpTransportBuilder {
        HttpTransportBuilder {
            endpoint: endpoint.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("strix-jsonrpc-client/{}", env!("CARGO_PKG_VERSION")),
            credentials: CredentialsMode::default(),
        }
    }

    /// Create an HTTP transport with a custom reqwest client
    pub fn with_client(endpoint: &str, client: Client) -> Result<Self, TransportError> {
        let url = parse_endpoint(endpoint)?;
        Ok(Self {
            client,
            endpoint: url,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

fn parse_endpoint(endpoint: &str) -> Result<Url, TransportError> {
    let url = Url::parse(endpoint)
        .map_err(|e| TransportError::ConnectionFailed(format!("Invalid URL: {}", e)))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(TransportError::ConnectionFailed(format!(
            "Invalid scheme for HTTP transport: {}",
            url.scheme()
        )));
    }

    Ok(url)
}

/// Builder for [`HttpTransport`]
#[derive(Debug, Clone)]
pub struct HttpTransportBuilder {
    endpoint: String,
    timeout: Duration,
    user_agent: String,
    credentials: CredentialsMode,
}

impl HttpTransportBuilder {
    /// Set the request timeout (default 30s)
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the cookie policy
    pub fn credentials(mut self, credentials: CredentialsMode) -> Self {
        self.credentials = credentials;
        self
    }

    pub fn build(self) -> Result<HttpTransport, TransportError> {
        let url = parse_endpoint(&self.endpoint)?;

        let client = Client::builder()
            .timeout(self.timeout)
            .user_agent(self.user_agent)
            .cookie_store(self.credentials != CredentialsMode::Omit)
            .build()
            .map_err(|e| TransportError::Http(format!("Failed to create HTTP client: {}", e)))?;

        Ok(HttpTransport {
            client,
            endpoint: url,
        })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(
        &self,
        request: &TransportRequest,
    ) -> Result<TransportResponse, TransportError> {
        debug!(
            method = request.body.method(),
            id = ?request.body.id(),
            endpoint = %self.endpoint,
            "Sending HTTP request"
        );

        let body = serde_json::to_vec(&request.body)
            .map_err(|e| TransportError::Http(format!("Failed to encode request body: {}", e)))?;

        let mut req_builder = self.client.post(self.endpoint.clone());
        for (name, value) in &request.headers {
            req_builder = req_builder.header(name, value);
        }

        let response = req_builder.body(body).send().await.map_err(|e| {
            if e.is_connect() {
                TransportError::ConnectionFailed(format!(
                    "Failed to reach {}: {}",
                    self.endpoint, e
                ))
            } else {
                TransportError::Http(format!("Failed to send request: {}", e))
            }
        })?;

        let status = response.status();
        let status_text = status.canonical_reason().unwrap_or("").to_string();

        let bytes = response
            .bytes()
            .await
            .map_err(|e| TransportError::Http(format!("Failed to read response body: {}", e)))?;

        debug!(
            status = status.as_u16(),
            bytes = bytes.len(),
            "Received HTTP response"
        );

        Ok(TransportResponse::new(status.as_u16(), status_text, bytes))
    }
}
