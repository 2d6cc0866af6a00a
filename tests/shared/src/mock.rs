//! Scriptable transport for driving the client without a network

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use parking_lot::Mutex;
use serde_json::{Value, json};

use strix_jsonrpc_client::{Transport, TransportError, TransportRequest, TransportResponse};

/// One scripted exchange: a wire reply or a transport failure.
enum Scripted {
    Reply {
        status: u16,
        status_text: &'static str,
        body: Bytes,
    },
    Failure(TransportError),
}

/// Transport that replays a scripted queue of replies and records every
/// request it sees.
///
/// Each `execute` call pops the next scripted entry. Running past the end of
/// the script panics, which in a test points at a missing `reply_*` call.
pub struct MockTransport {
    script: Mutex<VecDeque<Scripted>>,
    requests: Mutex<Vec<TransportRequest>>,
}

impl MockTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            script: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
        })
    }

    /// Script a raw reply.
    pub fn reply_raw(&self, status: u16, status_text: &'static str, body: &str) {
        self.script.lock().push_back(Scripted::Reply {
            status,
            status_text,
            body: Bytes::from(body.to_string()),
        });
    }

    /// Script a 200 reply whose payload carries `result`.
    pub fn reply_result(&self, id: i64, result: Value) {
        let body = json!({"jsonrpc": "2.0", "id": id, "result": result});
        self.reply_raw(200, "OK", &body.to_string());
    }

    /// Script a 200 reply whose payload carries an `error` member.
    pub fn reply_error(&self, id: i64, code: i64, message: &str, data: Option<Value>) {
        let mut error = json!({"code": code, "message": message});
        if let Some(data) = data {
            error["data"] = data;
        }
        let body = json!({"jsonrpc": "2.0", "id": id, "error": error});
        self.reply_raw(200, "OK", &body.to_string());
    }

    /// Script a transport-level failure.
    pub fn fail(&self, error: TransportError) {
        self.script.lock().push_back(Scripted::Failure(error));
    }

    /// Everything the client has sent so far, in dispatch order.
    pub fn requests(&self) -> Vec<TransportRequest> {
        self.requests.lock().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().len()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn execute(
        &self,
        request: &TransportRequest,
    ) -> Result<TransportResponse, TransportError> {
        self.requests.lock().push(request.clone());

        let scripted = self
            .script
            .lock()
            .pop_front()
            .expect("mock transport script exhausted");

        match scripted {
            Scripted::Reply {
                status,
                status_text,
                body,
            } => Ok(TransportResponse::new(status, status_text, body)),
            Scripted::Failure(error) => Err(error),
        }
    }
}
