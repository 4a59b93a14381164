//! Helpers shared by tool tests.

use std::sync::Arc;

use rmcp::model::{CallToolResult, RawContent};
use serde_json::Value;

use crate::core::config::Config;
use crate::domains::tools::handlers::{NotionTool, parse_params};
use crate::domains::tools::service::NotionService;
use crate::notion::testing::RecordingApi;

pub(crate) fn service(api: Arc<RecordingApi>) -> NotionService {
    NotionService::with_api(api, Arc::new(Config::default()))
}

pub(crate) fn unconfigured() -> NotionService {
    NotionService::unconfigured(Arc::new(Config::default()))
}

/// Parse JSON arguments the way the router does.
pub(crate) fn params<T: NotionTool>(args: Value) -> T::Params {
    match args {
        Value::Object(map) => parse_params::<T>(map).unwrap(),
        other => panic!("arguments must be an object, got {}", other),
    }
}

/// The JSON carried by a result's text content.
pub(crate) fn payload(result: &CallToolResult) -> Value {
    match &result.content[0].raw {
        RawContent::Text(t) => serde_json::from_str(&t.text).unwrap(),
        _ => panic!("Expected text content"),
    }
}

pub(crate) fn is_error(result: &CallToolResult) -> bool {
    result.is_error.unwrap_or(false)
}

/// Assert the result is the initialization failure.
pub(crate) fn assert_not_initialized(result: &CallToolResult) {
    assert!(is_error(result));
    assert_eq!(payload(result)["error"], "Notion client initialization failed");
}
