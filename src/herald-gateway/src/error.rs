//! Error types for gateway registration.
//!
//! Registry and builder validation failures are reported as
//! [`CommandError`]; everything that involves configuration files or the
//! connected client is a [`GatewayError`].

use herald_commands::CommandError;
use thiserror::Error;

/// Errors that can occur while configuring or talking to the gateway.
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Configuration error (missing or invalid config).
    #[error("Configuration error: {0}")]
    Config(String),

    /// A registry or builder rule was violated.
    #[error(transparent)]
    Command(#[from] CommandError),

    /// The client rejected the command batch.
    #[error("Command submission rejected ({code}): {message}")]
    Rejected {
        /// Error code reported by the platform.
        code: String,
        /// Human-readable error message.
        message: String,
    },

    /// API rate limited.
    #[error("Rate limited: retry after {retry_after_secs} seconds")]
    RateLimited {
        /// Seconds to wait before retrying.
        retry_after_secs: u64,
    },

    /// The connection is not usable.
    #[error("Connection error: {0}")]
    Connection(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for GatewayError {
    fn from(err: serde_json::Error) -> Self {
        GatewayError::Json(err.to_string())
    }
}

impl From<toml::de::Error> for GatewayError {
    fn from(err: toml::de::Error) -> Self {
        GatewayError::Config(err.to_string())
    }
}

/// Result type for gateway operations.
pub type GatewayResult<T> = std::result::Result<T, GatewayError>;
