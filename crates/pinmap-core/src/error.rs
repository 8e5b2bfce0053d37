//! Error types for pinmap-core

use thiserror::Error;

/// Result type alias using pinmap-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in pinmap-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// HTTP client error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Storage backend error
    #[error("Storage error: {0}")]
    Storage(String),
}
