//! Notion MCP Server Library
//!
//! A Model Context Protocol server exposing the Notion API as tools, with
//! optional markdown rendering of page objects.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, export path checks, the MCP
//!   server handler and the transports (STDIO, TCP, HTTP)
//! - **notion**: the Notion REST client and the typed request enum
//! - **domains**: business logic
//!   - **format**: page-to-markdown rendering and response formatting
//!   - **tools**: one MCP tool per Notion operation
//!
//! # Example
//!
//! ```rust,no_run
//! use notion_mcp_server::{core::McpServer, core::Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config);
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;
pub mod notion;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
