//! Transports that carry MCP messages to and from the Notion server.
//!
//! - **STDIO** (`stdio`, default): the client spawns the server and talks
//!   over stdin/stdout. Logs go to stderr.
//! - **TCP** (`tcp`): one rmcp session per accepted connection.
//! - **HTTP** (`http`): an axum JSON-RPC endpoint plus `/health`.
//!
//! [`TransportConfig::from_env`] picks the transport from `MCP_TRANSPORT`;
//! [`TransportService::run_until`] runs it until a shutdown signal.

mod config;
mod error;
mod service;

#[cfg(feature = "http")]
pub mod http;

#[cfg(feature = "tcp")]
pub mod tcp;

#[cfg(feature = "stdio")]
pub mod stdio;

pub use config::TransportConfig;
pub use error::{TransportError, TransportResult};
pub use service::TransportService;

#[cfg(feature = "tcp")]
pub use config::{DEFAULT_TCP_PORT, TcpConfig};

#[cfg(feature = "http")]
pub use config::{DEFAULT_HTTP_PORT, DEFAULT_RPC_PATH, HttpConfig};
