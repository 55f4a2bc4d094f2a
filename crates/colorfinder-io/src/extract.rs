//! Pixel extraction from decoded images
//!
//! Samples every `quality`-th pixel and drops pixels that are mostly
//! transparent or nearly white before they reach the quantizer.

use colorfinder_core::Rgb;

use crate::error::{IoError, IoResult};
use crate::rgba::RgbaImage;

/// Options for pixel extraction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Sampling stride in pixels; 1 keeps every pixel
    pub quality: usize,
    /// Minimum alpha for a pixel to be kept
    pub min_alpha: u8,
    /// Pixels whose three channels all exceed this are treated as white
    pub white_threshold: u8,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            quality: 10,
            min_alpha: 125,
            white_threshold: 250,
        }
    }
}

impl ExtractOptions {
    /// Whether a pixel passes the opacity and near-white filters
    #[inline]
    pub fn accepts(&self, [r, g, b, a]: [u8; 4]) -> bool {
        a >= self.min_alpha
            && (r <= self.white_threshold || g <= self.white_threshold || b <= self.white_threshold)
    }
}

/// Collect the pixels of `image` that the quantizer should see.
///
/// Visits pixel positions `0, quality, 2*quality, ...` in row-major order.
///
/// # Errors
///
/// Returns [`IoError::InvalidParameters`] when `quality` is zero.
pub fn extract_pixels(image: &RgbaImage, options: &ExtractOptions) -> IoResult<Vec<Rgb>> {
    if options.quality == 0 {
        return Err(IoError::InvalidParameters(
            "quality must be at least 1".to_string(),
        ));
    }

    let pixels = (0..image.pixel_count())
        .step_by(options.quality)
        .filter_map(|i| image.rgba_at(i))
        .filter(|&px| options.accepts(px))
        .map(|[r, g, b, _]| Rgb::new(r, g, b))
        .collect();
    Ok(pixels)
}
