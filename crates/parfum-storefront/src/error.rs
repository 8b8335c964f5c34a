//! Storefront error types.

use std::path::PathBuf;

use parfum_commerce::CommerceError;
use thiserror::Error;

/// Errors raised by the storefront runtime.
#[derive(Error, Debug)]
pub enum StorefrontError {
    /// Catalog or selection error.
    #[error(transparent)]
    Commerce(#[from] CommerceError),

    /// A file could not be read.
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A config file could not be parsed or written.
    #[error("Config format error: {0}")]
    ConfigFormat(String),

    /// A config value is out of range.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// The carousel timer needs a running Tokio runtime.
    #[error("No async runtime available to drive the carousel timer")]
    RuntimeUnavailable,
}

/// Result type for storefront operations.
pub type StorefrontResult<T> = Result<T, StorefrontError>;
