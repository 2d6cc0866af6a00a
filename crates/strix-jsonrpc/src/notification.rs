use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

use crate::{request::RequestParams, types::JsonRpcVersion};

/// A JSON-RPC notification: a request without an `id`.
///
/// The server must not reply to a notification, so the client fires it and
/// only checks that the transport accepted it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcNotification {
    #[serde(rename = "jsonrpc")]
    pub version: JsonRpcVersion,
    pub method: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<RequestParams>,
}

impl JsonRpcNotification {
    pub fn new(method: impl Into<String>, params: Option<RequestParams>) -> Self {
        Self {
            version: JsonRpcVersion::V2_0,
            method: method.into(),
            params,
        }
    }

    /// Create a notification with no parameters.
    pub fn new_no_params(method: impl Into<String>) -> Self {
        Self::new(method, None)
    }

    /// Create a notification with named (object) parameters.
    pub fn new_with_object_params(
        method: impl Into<String>,
        params: HashMap<String, Value>,
    ) -> Self {
        Self::new(method, Some(RequestParams::Object(params)))
    }

    /// Get a named parameter (if params are an object).
    pub fn get_param(&self, name: &str) -> Option<&Value> {
        self.params.as_ref()?.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{from_str, json, to_string};

    #[test]
    fn test_notification_has_no_id() {
        let notification = JsonRpcNotification::new_no_params("cache.flush");
        let json_str = to_string(&notification).unwrap();

        assert!(!json_str.contains("\"id\""));
        assert!(json_str.contains("\"jsonrpc\":\"2.0\""));
        assert!(json_str.contains("\"method\":\"cache.flush\""));
    }

    #[test]
    fn test_notification_round_trip() {
        let mut params = HashMap::new();
        params.insert("level".to_string(), json!("warn"));

        let notification = JsonRpcNotification::new_with_object_params("log.set_level", params);
        let parsed: JsonRpcNotification = from_str(&to_string(&notification).unwrap()).unwrap();

        assert_eq!(parsed.method, "log.set_level");
        assert_eq!(parsed.get_param("level"), Some(&json!("warn")));
    }
}
