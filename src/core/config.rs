//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables (optionally via a `.env` file) or
//! defaults. Configuration is read once at startup.

use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{info, warn};

/// Default Notion API endpoint.
pub const DEFAULT_NOTION_BASE_URL: &str = "https://api.notion.com";

/// Notion API version pinned by this server.
pub const DEFAULT_NOTION_VERSION: &str = "2022-06-28";

/// Main configuration structure for the MCP server.
///
/// This struct contains all configurable aspects of the server, organized
/// by concern for clarity and maintainability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Notion API access configuration.
    pub notion: NotionConfig,

    /// Security and path validation configuration.
    pub security: SecurityConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

/// Configuration for the Notion API client.
#[derive(Clone, Serialize, Deserialize)]
pub struct NotionConfig {
    /// Integration token. Without it every tool reports an
    /// initialization failure instead of calling the API.
    pub api_token: Option<String>,

    /// Enables Markdown post-processing of responses (`format = "markdown"`).
    pub markdown_conversion: bool,

    /// API base URL.
    pub base_url: String,

    /// Value of the `Notion-Version` header.
    pub api_version: String,

    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for NotionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotionConfig")
            .field("api_token", &self.api_token.as_ref().map(|_| "[REDACTED]"))
            .field("markdown_conversion", &self.markdown_conversion)
            .field("base_url", &self.base_url)
            .field("api_version", &self.api_version)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// Configuration for security and path validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityConfig {
    /// Optional root directory for Markdown exports.
    /// If None, no path restrictions are enforced.
    pub root_path: Option<PathBuf>,

    /// Whether to allow symlinks in path validation.
    /// If false, symlinks pointing outside the root are rejected.
    pub allow_symlinks: bool,
}

impl Default for NotionConfig {
    fn default() -> Self {
        Self {
            api_token: None,
            markdown_conversion: false,
            base_url: DEFAULT_NOTION_BASE_URL.to_string(),
            api_version: DEFAULT_NOTION_VERSION.to_string(),
            timeout_secs: 30,
        }
    }
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            root_path: None,
            allow_symlinks: true,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "notion".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                with_timestamps: true,
            },
            transport: TransportConfig::default(),
            notion: NotionConfig::default(),
            security: SecurityConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Notion settings use the `NOTION_` prefix (`NOTION_API_TOKEN`,
    /// `NOTION_MARKDOWN_CONVERSION`, ...); server settings use `MCP_`
    /// (`MCP_SERVER_NAME`, `MCP_LOG_LEVEL`, ...).
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        // Load transport configuration from environment
        config.transport = TransportConfig::from_env();

        config.notion = NotionConfig::from_env();

        // Load security configuration
        if let Ok(root_path) = std::env::var("MCP_ROOT_PATH") {
            config.security.root_path = Some(PathBuf::from(root_path));
            info!("Path security enabled: root directory set to {:?}", config.security.root_path);
        }

        if let Ok(allow_symlinks) = std::env::var("MCP_ALLOW_SYMLINKS") {
            config.security.allow_symlinks = allow_symlinks.parse().unwrap_or(true);
            info!("Symlinks allowed: {}", config.security.allow_symlinks);
        }

        config
    }
}

impl NotionConfig {
    /// Load the Notion section from environment variables.
    pub fn from_env() -> Self {
        let mut notion = Self::default();

        match std::env::var("NOTION_API_TOKEN") {
            Ok(token) if !token.trim().is_empty() => {
                notion.api_token = Some(token.trim().to_string());
                info!("Notion API token loaded from environment");
            }
            _ => {
                warn!(
                    "NOTION_API_TOKEN is not set. Every Notion tool will report an \
                     initialization failure until a token is configured."
                );
            }
        }

        // Only the exact string "true" enables conversion.
        notion.markdown_conversion = std::env::var("NOTION_MARKDOWN_CONVERSION")
            .map(|v| v == "true")
            .unwrap_or(false);

        if let Ok(base_url) = std::env::var("NOTION_API_BASE_URL") {
            notion.base_url = base_url;
        }

        if let Ok(version) = std::env::var("NOTION_API_VERSION") {
            notion.api_version = version;
        }

        if let Ok(timeout) = std::env::var("NOTION_TIMEOUT_SECS") {
            match timeout.parse() {
                Ok(secs) => notion.timeout_secs = secs,
                Err(_) => warn!("Ignoring invalid NOTION_TIMEOUT_SECS value: {}", timeout),
            }
        }

        notion
    }

    /// Whether a token is available.
    pub fn has_token(&self) -> bool {
        self.api_token.is_some()
    }
}
