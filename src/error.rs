//! Error types for the page renderer

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for render operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading assets or rendering the page
#[derive(Error, Debug)]
pub enum Error {
    /// A required asset file does not exist
    #[error("Asset not found: {}", .path.display())]
    AssetNotFound { path: PathBuf },

    /// A required asset exists but could not be read
    #[error("Failed to read asset {}: {source}", .path.display())]
    AssetUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A required asset is larger than the configured limit
    #[error("Asset {} is {size} bytes, over the {limit} byte limit", .path.display())]
    AssetTooLarge { path: PathBuf, size: u64, limit: u64 },

    /// Asset bytes cannot be embedded as an image data-URI
    #[error("Encoding failed: {0}")]
    Encoding(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    /// Output or host I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether this error means an asset file could not be obtained.
    pub fn is_resource_error(&self) -> bool {
        matches!(
            self,
            Error::AssetNotFound { .. } | Error::AssetUnreadable { .. } | Error::AssetTooLarge { .. }
        )
    }
}
