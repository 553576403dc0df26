//! Railbar error types
//!
//! Geometry never fails (degenerate input short-circuits to `None`), so these
//! only cover the ambient edges: configuration loading and validation.

use std::path::PathBuf;

use thiserror::Error;

/// Railbar error type
#[derive(Debug, Error)]
pub enum RailbarError {
    /// Config file exists but could not be read
    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for `ScrollbarConfig`
    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Config could not be rendered back to TOML
    #[error("failed to serialize config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    /// Config parsed but holds unusable values
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

/// Result alias for fallible railbar operations
pub type Result<T> = std::result::Result<T, RailbarError>;
