//! Core module containing shared infrastructure components.
//!
//! Configuration, the unified error type, export path checks, the MCP
//! server handler and the transport layer.

pub mod config;
pub mod error;
pub mod security;
pub mod server;
pub mod transport;

pub use config::Config;
pub use error::{Error, Result};
pub use security::{PathSecurityError, validate_export_dir};
pub use server::McpServer;
pub use transport::{TransportConfig, TransportService};
