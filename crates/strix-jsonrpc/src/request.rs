use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

use crate::types::{JsonRpcVersion, RequestId};

/// Parameters for a JSON-RPC request.
///
/// JSON-RPC 2.0 restricts `params` to structured values, so this is either
/// positional (array) or named (object), never a bare scalar.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(untagged)]
pub enum RequestParams {
    /// Positional parameters as an array
    Array(Vec<Value>),
    /// Named parameters as an object
    Object(HashMap<String, Value>),
}

/// Rejected `params` value: JSON-RPC 2.0 allows only arrays, objects or null.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("params must be an array, an object, or null, got {0}")]
pub struct ParamsError(pub &'static str);

impl RequestParams {
    /// Convert an arbitrary JSON value into params.
    ///
    /// `Null` means "no params" and maps to `None`; scalars are rejected.
    pub fn from_value(value: Value) -> Result<Option<Self>, ParamsError> {
        match value {
            Value::Null => Ok(None),
            Value::Array(items) => Ok(Some(RequestParams::Array(items))),
            Value::Object(map) => Ok(Some(RequestParams::Object(map.into_iter().collect()))),
            Value::Bool(_) => Err(ParamsError("a boolean")),
            Value::Number(_) => Err(ParamsError("a number")),
            Value::String(_) => Err(ParamsError("a string")),
        }
    }

    /// Get a named parameter (object params only).
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            RequestParams::Object(map) => map.get(key),
            RequestParams::Array(_) => None,
        }
    }

    /// Get a positional parameter (array params only).
    pub fn get_index(&self, index: usize) -> Option<&Value> {
        match self {
            RequestParams::Array(vec) => vec.get(index),
            RequestParams::Object(_) => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            RequestParams::Object(map) => map.is_empty(),
            RequestParams::Array(vec) => vec.is_empty(),
        }
    }

    /// Serialize back into a `serde_json::Value`.
    pub fn to_value(&self) -> Value {
        match self {
            RequestParams::Object(map) => {
                Value::Object(map.iter().map(|(k, v)| (k.clone(), v.clone())).collect())
            }
            RequestParams::Array(arr) => Value::Array(arr.clone()),
        }
    }
}

impl From<HashMap<String, Value>> for RequestParams {
    fn from(map: HashMap<String, Value>) -> Self {
        RequestParams::Object(map)
    }
}

impl From<Vec<Value>> for RequestParams {
    fn from(vec: Vec<Value>) -> Self {
        RequestParams::Array(vec)
    }
}

/// A JSON-RPC request envelope, as sent over the transport.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    #[serde(rename = "jsonrpc")]
    pub version: JsonRpcVersion,
    pub id: RequestId,
    pub method: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<RequestParams>,
}

impl JsonRpcRequest {
    pub fn new(
        id: impl Into<RequestId>,
        method: impl Into<String>,
        params: Option<RequestParams>,
    ) -> Self {
        Self {
            version: JsonRpcVersion::V2_0,
            id: id.into(),
            method: method.into(),
            params,
        }
    }

    /// Create a request with no parameters.
    pub fn new_no_params(id: impl Into<RequestId>, method: impl Into<String>) -> Self {
        Self::new(id, method, None)
    }

    /// Create a request with named (object) parameters.
    pub fn new_with_object_params(
        id: impl Into<RequestId>,
        method: impl Into<String>,
        params: HashMap<String, Value>,
    ) -> Self {
        Self::new(id, method, Some(RequestParams::Object(params)))
    }

    /// Create a request with positional (array) parameters.
    pub fn new_with_array_params(
        id: impl Into<RequestId>,
        method: impl Into<String>,
        params: Vec<Value>,
    ) -> Self {
        Self::new(id, method, Some(RequestParams::Array(params)))
    }

    /// Get a named parameter (if params are an object).
    pub fn get_param(&self, name: &str) -> Option<&Value> {
        self.params.as_ref()?.get(name)
    }

    /// Get a positional parameter (if params are an array).
    pub fn get_param_index(&self, index: usize) -> Option<&Value> {
        self.params.as_ref()?.get_index(index)
    }
}
