//! Errors that stop the server as a whole.
//!
//! Tool-level failures never get here: they are reported to the client as
//! tool results. This type covers startup and transport failures.

use thiserror::Error;

/// A specialized Result type for server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Server-level error.
#[derive(Debug, Error)]
pub enum Error {
    /// The Notion client could not be built from the configuration.
    #[error("Notion error: {0}")]
    Notion(#[from] crate::notion::NotionError),

    /// A transport stopped with an error.
    #[error("Transport error: {0}")]
    Transport(#[from] super::transport::TransportError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::transport::TransportError;
    use crate::notion::NotionError;

    #[test]
    fn test_error_conversions() {
        let err: Error = NotionError::Build("invalid base URL 'x'".to_string()).into();
        assert_eq!(
            err.to_string(),
            "Notion error: Failed to build Notion client: invalid base URL 'x'"
        );

        let err: Error = TransportError::init("connection closed").into();
        assert_eq!(
            err.to_string(),
            "Transport error: Server initialization error: connection closed"
        );
    }
}
