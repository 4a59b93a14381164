//! Business logic, split by concern.
//!
//! `format` turns Notion responses into markdown; `tools` exposes each
//! Notion operation as an MCP tool.

pub mod format;
pub mod tools;
