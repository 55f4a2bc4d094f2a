//! Error types for the colorfinder facade

use thiserror::Error;

/// Errors that can occur while finding colors
#[derive(Debug, Error)]
pub enum FinderError {
    /// Quantization error
    #[error("quantization error: {0}")]
    Quantize(#[from] colorfinder_core::Error),

    /// Image loading or sampling error
    #[error("image error: {0}")]
    Io(#[from] colorfinder_io::IoError),

    /// Invalid configuration value
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Background worker failure
    #[error("worker error: {0}")]
    Worker(String),
}

/// Result type for colorfinder operations
pub type FinderResult<T> = Result<T, FinderError>;
