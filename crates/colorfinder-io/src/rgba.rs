//! Decoded RGBA8 pixel buffer

use crate::error::{IoError, IoResult};

/// An owned, decoded image with 4 bytes (R, G, B, A) per pixel in row-major
/// order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbaImage {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl RgbaImage {
    /// Wrap an RGBA8 buffer
    ///
    /// # Errors
    ///
    /// Fails on zero dimensions or when `data.len() != width * height * 4`.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> IoResult<Self> {
        if width == 0 || height == 0 {
            return Err(IoError::InvalidDimension { width, height });
        }
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(4));
        if expected != Some(data.len()) {
            return Err(IoError::BufferSizeMismatch {
                len: data.len(),
                width,
                height,
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Image width in pixels
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of pixels
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Raw RGBA bytes
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// RGBA components of the pixel at linear position `i`
    #[inline]
    pub fn rgba_at(&self, i: usize) -> Option<[u8; 4]> {
        let offset = i.checked_mul(4)?;
        let px = self.data.get(offset..offset + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Consume the image, returning its bytes
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }
}
