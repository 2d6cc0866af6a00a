//! Response pipeline
//!
//! Every transport response passes through a fixed sequence of stages:
//! status-keyed callbacks, status validation, payload decoding,
//! payload-gated callbacks, and result extraction. A failing stage aborts
//! the stages after it, so a bad status never reaches payload decoding and
//! a vetoing callback never reaches the entries behind it.

use std::ops::RangeInclusive;

use serde_json::Value;
use tracing::{debug, error};

use strix_jsonrpc::{JsonRpcMessage, JsonRpcRequest};

use crate::callbacks::CallbackRegistry;
use crate::error::{ClientError, ClientResult, RpcError, TransportError};
use crate::transport::TransportResponse;

/// Statuses treated as a completed exchange. Anything outside becomes a
/// transport error, though only after the status-keyed callbacks have run.
const VALID_STATUS: RangeInclusive<u16> = 200..=400;

pub(crate) fn run(
    registry: &CallbackRegistry,
    envelope: JsonRpcRequest,
    response: TransportResponse,
    debug_enabled: bool,
) -> ClientResult<Value> {
    registry.dispatch_status(response.status())?;
    check_status(&response)?;

    let payload = response.payload().map_err(|e| {
        ClientError::MalformedResponse(format!("response body is not valid JSON: {e}"))
    })?;
    registry.dispatch_payload(response.status(), payload)?;

    extract(payload, envelope, debug_enabled)
}

/// Reject statuses outside the accepted range, keeping the raw body so
/// callers can inspect whatever the server sent back.
pub(crate) fn check_status(response: &TransportResponse) -> Result<(), TransportError> {
    if VALID_STATUS.contains(&response.status()) {
        return Ok(());
    }
    Err(TransportError::Status {
        status: response.status(),
        status_text: response.status_text().to_string(),
        body: response.body().clone(),
    })
}

/// Classify the decoded payload as a result or an error envelope.
///
/// A payload carrying both members counts as an error; a payload carrying
/// neither is malformed and surfaces as [`ClientError::MalformedResponse`].
fn extract(payload: &Value, envelope: JsonRpcRequest, debug_enabled: bool) -> ClientResult<Value> {
    let message: JsonRpcMessage = serde_json::from_value(payload.clone()).map_err(|e| {
        ClientError::MalformedResponse(format!("payload has neither result nor error member: {e}"))
    })?;

    match message {
        JsonRpcMessage::Error(failure) => {
            if debug_enabled {
                error!(
                    id = ?failure.id,
                    code = failure.error.code,
                    "Request failed: {}", failure.error.message
                );
            }
            Err(RpcError::new(
                failure.error.message,
                envelope,
                failure.error.data,
                Some(failure.error.code),
            )
            .into())
        }
        JsonRpcMessage::Response(success) => {
            if debug_enabled {
                debug!(id = %success.id, result = %success.result, "Got response");
            }
            Ok(success.result)
        }
    }
}
