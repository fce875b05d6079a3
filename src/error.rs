//! Error types for loaders, configuration and the CLI
//!
//! Index and tree operations never fail; only the code that touches files
//! or parses external input returns a `TragResult`.

use thiserror::Error;

/// Errors that can occur outside the infallible core
#[derive(Debug, Error)]
pub enum TragError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid config: {0}")]
    Config(String),
}

/// Result type for fallible operations
pub type TragResult<T> = Result<T, TragError>;
