//! Error types for the Shrinkray resizing pipeline.
//!
//! Errors are organized by stage: per-item fetch/decode failures that the
//! batch recovers from, batch-level validation failures, and packaging
//! failures that abort the whole response.

use thiserror::Error;

/// Top-level error type for Shrinkray operations.
#[derive(Error, Debug)]
pub enum ShrinkrayError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Batch validation or outcome errors
    #[error("Batch error: {0}")]
    Batch(#[from] BatchError),

    /// Deliverable packaging errors
    #[error("Package error: {0}")]
    Package(#[from] PackageError),

    /// HTTP client construction errors
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the config file from disk
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    /// Failed to parse TOML configuration
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Configuration values are invalid
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Per-item failures. Always recovered: the orchestrator logs the error,
/// drops the item, and continues with the rest of the batch.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The outbound request failed or returned a non-success status
    #[error("Network error for {url}: {message}")]
    Network { url: String, message: String },

    /// The source bytes could not be decoded as an image
    #[error("Decode error for {name}: {message}")]
    Decode { name: String, message: String },
}

/// Batch-level errors surfaced to the caller before or after processing.
#[derive(Error, Debug)]
pub enum BatchError {
    /// Neither URLs nor uploads were supplied
    #[error("no images provided")]
    NoInput,

    /// The requested width is not a positive integer
    #[error("invalid target width {0:?}")]
    InvalidWidth(String),

    /// Every item in the batch failed
    #[error("no images could be processed")]
    AllFailed,
}

/// Packaging errors. The one failure mode that is fatal to an
/// otherwise-successful batch.
#[derive(Error, Debug)]
pub enum PackageError {
    /// JPEG encoding of a processed item failed
    #[error("Encoding failed for {name}: {message}")]
    Encode { name: String, message: String },

    /// Writing the archive container failed
    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// I/O on the in-memory archive buffer failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Shrinkray results.
pub type Result<T> = std::result::Result<T, ShrinkrayError>;

/// Convenience type alias for per-item pipeline results.
pub type ItemResult<T> = std::result::Result<T, FetchError>;
