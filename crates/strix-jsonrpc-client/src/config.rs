//! Configuration types for the JSON-RPC client

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

/// Cookie/credentials policy for outgoing requests.
///
/// Mirrors the fetch `credentials` option so configurations written for
/// browser clients port over unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CredentialsMode {
    /// Never send cookies
    Omit,
    /// Send cookies for the endpoint's own origin only
    SameOrigin,
    /// Always send cookies
    #[default]
    Include,
}

impl CredentialsMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            CredentialsMode::Omit => "omit",
            CredentialsMode::SameOrigin => "same-origin",
            CredentialsMode::Include => "include",
        }
    }
}

impl std::fmt::Display for CredentialsMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Main client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Cookie policy for the underlying transport
    pub credentials: CredentialsMode,

    /// Headers sent with every request; later updates overwrite on key collision
    pub headers: HashMap<String, String>,

    /// When set, successful responses and JSON-RPC errors are reported to the
    /// diagnostic sink
    pub debug: bool,

    /// Request timeout for individual operations
    #[serde(with = "duration_serde")]
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            credentials: CredentialsMode::default(),
            headers: default_headers(),
            debug: false,
            timeout: Duration::from_secs(30),
        }
    }
}

impl ClientConfig {
    /// Merge header updates into this configuration.
    ///
    /// Updates overwrite existing keys; keys absent from `updates` are kept.
    pub fn merge_headers(&mut self, updates: HashMap<String, String>) {
        merge_headers(&mut self.headers, updates);
    }
}

/// The headers every request starts from.
///
/// `X-Requested-With` marks the call as a scripted request.
pub fn default_headers() -> HashMap<String, String> {
    HashMap::from([
        (
            "Accept".to_string(),
            "application/json, text/plain, */*".to_string(),
        ),
        ("Content-Type".to_string(), "application/json".to_string()),
        ("X-Requested-With".to_string(), "XMLHttpRequest".to_string()),
    ])
}

/// Merge `updates` into `existing`: updates win on key collision, everything
/// else is retained.
pub fn merge_headers(existing: &mut HashMap<String, String>, updates: HashMap<String, String>) {
    for (key, value) in updates {
        existing.insert(key, value);
    }
}

// Helper module for Duration serialization
mod duration_serde {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(duration.as_millis() as u64)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis = u64::deserialize(deserializer)?;
        Ok(Duration::from_millis(millis))
    }
}
