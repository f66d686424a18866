//! Domain error types for lunchpick
//!
//! Provides structured error types for different domains:
//! - `StoreError` for loading the store list
//! - `ConfigError` for the configuration file
//! - `PickerError` as the top-level error type

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for lunchpick
#[derive(Debug, Error)]
pub enum PickerError {
    #[error("Store data error: {0}")]
    Store(#[from] StoreError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors related to the store data file
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid JSON in store data: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors related to the configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Result type alias for PickerError
pub type Result<T> = std::result::Result<T, PickerError>;

/// Result type alias for StoreError
pub type StoreResult<T> = std::result::Result<T, StoreError>;
