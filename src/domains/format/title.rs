//! Page title and rich-text helpers.

use serde_json::Value;

/// Title used when a page has no title property or an empty one.
pub const UNTITLED: &str = "Untitled";

/// Extract a page's title from its property bag.
///
/// Looks for the property whose `type` is `"title"` and joins the plain
/// text of its rich-text segments.
pub fn extract_title(page: &Value) -> String {
    let Some(properties) = page.get("properties").and_then(Value::as_object) else {
        return UNTITLED.to_string();
    };

    let title_property = properties
        .values()
        .find(|prop| prop.get("type").and_then(Value::as_str) == Some("title"))
        .or_else(|| properties.get("title"));

    title_property
        .and_then(|prop| prop.get("title"))
        .and_then(Value::as_array)
        .map(|segments| plain_text(segments))
        .filter(|title| !title.trim().is_empty())
        .unwrap_or_else(|| UNTITLED.to_string())
}

/// Concatenate the plain text of rich-text segments.
pub fn plain_text(segments: &[Value]) -> String {
    segments.iter().map(segment_text).collect()
}

/// Plain text of a single segment, preferring `plain_text` over `text.content`.
pub(crate) fn segment_text(segment: &Value) -> &str {
    segment
        .get("plain_text")
        .and_then(Value::as_str)
        .or_else(|| {
            segment
                .get("text")
                .and_then(|t| t.get("content"))
                .and_then(Value::as_str)
        })
        .unwrap_or("")
}
