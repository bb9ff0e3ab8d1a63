//! Custom error types for ctop-rs
//!
//! User-friendly error messages for all failure scenarios.

use thiserror::Error;

/// Main error type for the ctop-rs application
#[derive(Error, Debug)]
pub enum CtopError {
    /// Terminal/TUI error
    #[error("Terminal error: {0}\n\n  → Make sure ctop is running in an interactive terminal.")]
    Terminal(String),

    /// Docker CLI invocation failed
    #[error("Docker request failed: {0}\n\n  → Check that the docker daemon is running.\n  → Run 'docker ps' to verify access.")]
    Docker(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// TOML serialization/deserialization error
    #[error("Configuration file is invalid: {0}")]
    Toml(String),

    /// IO error
    #[error("File operation failed: {0}")]
    Io(#[from] std::io::Error),

    /// JSON deserialization error
    #[error("Failed to parse docker output: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid input from user
    #[error("{0}")]
    InvalidInput(String),
}

impl From<toml::de::Error> for CtopError {
    fn from(err: toml::de::Error) -> Self {
        CtopError::Toml(err.to_string())
    }
}

impl From<toml::ser::Error> for CtopError {
    fn from(err: toml::ser::Error) -> Self {
        CtopError::Toml(err.to_string())
    }
}

/// Result type alias using CtopError
pub type Result<T> = std::result::Result<T, CtopError>;
