//! MCP Server Entry Point
//!
//! Loads configuration (including `.env`), initializes logging, builds the
//! Notion-backed server and runs it on the configured transport until the
//! transport ends or the process receives Ctrl-C / SIGTERM.

use anyhow::Result;
use tracing::{Level, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use notion_mcp_server::core::{Config, McpServer, TransportService};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration from environment
    let config = Config::from_env();

    // Initialize logging
    init_logging(&config.logging.level);

    info!("Starting {} v{}", config.server.name, config.server.version);

    // Create the MCP server
    let server = McpServer::new(config.clone());

    if server.is_configured() {
        info!(
            "Server initialized (markdown conversion {})",
            if config.notion.markdown_conversion { "enabled" } else { "disabled" }
        );
    } else {
        warn!("Server initialized without a Notion client");
    }

    serve(server, TransportService::new(config.transport)).await?;

    info!("Server shutting down");

    Ok(())
}

/// Run the transport until it ends or a shutdown signal arrives.
async fn serve(server: McpServer, transport: TransportService) -> notion_mcp_server::Result<()> {
    transport.run_until(server, shutdown_signal()).await?;
    Ok(())
}

/// Initialize the logging subsystem.
///
/// `RUST_LOG`, when set and valid, takes precedence over `MCP_LOG_LEVEL`.
fn init_logging(level: &str) {
    let filter = log_filter(std::env::var("RUST_LOG").ok().as_deref(), level);

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Build the log filter from `RUST_LOG`, falling back to the configured level.
fn log_filter(rust_log: Option<&str>, level: &str) -> EnvFilter {
    if let Some(directives) = rust_log.filter(|d| !d.trim().is_empty()) {
        match EnvFilter::try_new(directives) {
            Ok(filter) => return filter,
            Err(e) => eprintln!("Ignoring invalid RUST_LOG '{}': {}", directives, e),
        }
    }

    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" | "warning" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    EnvFilter::new(level.to_string())
}

/// Resolve on Ctrl-C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl-C"),
        _ = terminate => info!("Received SIGTERM"),
    }
}
