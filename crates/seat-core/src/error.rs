//! Error types for catalog loading and run configuration.

use thiserror::Error;

/// Result type alias for catalog and config operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised while reading a room catalog or a `seat.toml`.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("room table is missing required column: {0}")]
    MissingColumn(&'static str),

    #[error("invalid room table row at line {line}: {reason}")]
    InvalidRow { line: usize, reason: String },

    #[error("configuration names no room catalog (set catalog.path or catalog.blocks)")]
    NoCatalog,
}
