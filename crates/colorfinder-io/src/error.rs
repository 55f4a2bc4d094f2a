//! Error types for colorfinder-io

use thiserror::Error;

/// Errors that can occur while loading or sampling images
#[derive(Debug, Error)]
pub enum IoError {
    /// Invalid image dimensions
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Pixel buffer does not match the dimensions
    #[error("pixel buffer length {len} does not match {width}x{height} RGBA")]
    BufferSizeMismatch { len: usize, width: u32, height: u32 },

    /// Invalid extraction parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    /// Image decode error
    #[cfg(feature = "decode")]
    #[error("decode error: {0}")]
    Decode(#[from] image::ImageError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for image loading and sampling
pub type IoResult<T> = Result<T, IoError>;
