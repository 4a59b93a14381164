//! Shared helpers for Notion tool definitions.

use rmcp::model::{CallToolResult, Content};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::domains::tools::ToolError;
use crate::notion::Pagination;

/// Largest `page_size` the Notion API accepts.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Wrap a response as a successful tool result.
///
/// The JSON is returned as text content; objects are also attached as
/// structured content.
pub fn success_result(data: Value) -> CallToolResult {
    let text = serde_json::to_string_pretty(&data).unwrap_or_else(|_| data.to_string());
    CallToolResult {
        content: vec![Content::text(text)],
        structured_content: data.is_object().then_some(data),
        is_error: Some(false),
        meta: None,
    }
}

/// Serialize a typed result as a successful tool result.
pub fn success_json<T: Serialize>(result: &T) -> CallToolResult {
    match serde_json::to_value(result) {
        Ok(value) => success_result(value),
        Err(e) => ToolError::export(format!("Failed to serialize result: {}", e)).into_call_result(),
    }
}

pub fn validate_page_size(page_size: Option<u32>) -> Result<(), ToolError> {
    match page_size {
        Some(size) if size == 0 || size > MAX_PAGE_SIZE => Err(ToolError::validation(format!(
            "page_size must be between 1 and {}",
            MAX_PAGE_SIZE
        ))),
        _ => Ok(()),
    }
}

/// Validate and build list pagination.
pub fn pagination(
    start_cursor: Option<String>,
    page_size: Option<u32>,
) -> Result<Pagination, ToolError> {
    validate_page_size(page_size)?;
    Ok(Pagination::new(start_cursor, page_size))
}

/// Insert `value` under `key` unless it is absent or `null`.
pub fn insert_if_present(body: &mut Map<String, Value>, key: &str, value: Option<Value>) {
    match value {
        None | Some(Value::Null) => {}
        Some(value) => {
            body.insert(key.to_string(), value);
        }
    }
}

/// Require a Notion identifier: a UUID, with or without hyphens.
///
/// Only ASCII letters, digits and `-` are accepted, so an identifier can
/// never change which endpoint a request goes to.
pub fn require_id(name: &str, value: &str) -> Result<String, ToolError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ToolError::validation(format!("{} is required", name)));
    }
    if !trimmed.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        return Err(ToolError::validation(format!(
            "{} must contain only letters, digits and hyphens",
            name
        )));
    }
    Ok(trimmed.to_string())
}

/// Return early with an error result when `$expr` fails.
macro_rules! try_tool {
    ($expr:expr) => {
        match $expr {
            Ok(value) => value,
            Err(e) => return $crate::domains::tools::ToolError::into_call_result(e.into()),
        }
    };
}

pub(crate) use try_tool;
