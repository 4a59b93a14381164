//! In-memory [`NotionApi`] fake for unit tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;

use super::{NotionApi, NotionError, NotionRequest};

type Responder = Box<dyn Fn(&NotionRequest) -> Result<Value, NotionError> + Send + Sync>;

/// Records every request and answers with a caller-supplied responder.
pub(crate) struct RecordingApi {
    requests: Mutex<Vec<NotionRequest>>,
    responder: Responder,
}

impl RecordingApi {
    pub(crate) fn new(
        responder: impl Fn(&NotionRequest) -> Result<Value, NotionError> + Send + Sync + 'static,
    ) -> Arc<Self> {
        Arc::new(Self {
            requests: Mutex::new(Vec::new()),
            responder: Box::new(responder),
        })
    }

    /// Always answer with `value`.
    pub(crate) fn ok(value: Value) -> Arc<Self> {
        Self::new(move |_| Ok(value.clone()))
    }

    /// Always fail with a Notion API error carrying `message`.
    pub(crate) fn failing(message: &'static str) -> Arc<Self> {
        Self::new(move |_| Err(NotionError::api(400, "validation_error", message)))
    }

    pub(crate) fn requests(&self) -> Vec<NotionRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl NotionApi for RecordingApi {
    async fn send(&self, request: NotionRequest) -> Result<Value, NotionError> {
        let response = (self.responder)(&request);
        self.requests.lock().unwrap().push(request);
        response
    }
}
