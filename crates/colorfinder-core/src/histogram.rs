//! Quantized color histogram
//!
//! A fixed-size frequency table over the reduced color cube. Built once
//! per quantization call and read-only afterwards.

use crate::color::{HISTO_SIZE, Rgb, color_index};

/// Pixel counts per bucket of the quantized color cube.
///
/// Buckets never visited hold zero.
#[derive(Debug, Clone)]
pub struct Histogram {
    counts: Vec<u64>,
    total: u64,
}

impl Histogram {
    /// Build the histogram of a pixel sequence
    pub fn from_pixels(pixels: &[Rgb]) -> Self {
        let mut counts = vec![0u64; HISTO_SIZE];
        for pixel in pixels {
            counts[pixel.bucket_index()] += 1;
        }
        Self {
            counts,
            total: pixels.len() as u64,
        }
    }

    /// Count stored at a bucket index (0 when out of range)
    #[inline]
    pub fn get(&self, index: usize) -> u64 {
        self.counts.get(index).copied().unwrap_or(0)
    }

    /// Count stored at a quantized coordinate triple
    #[inline]
    pub fn count_at(&self, r: u8, g: u8, b: u8) -> u64 {
        self.get(color_index(r, g, b))
    }

    /// Number of non-empty buckets
    pub fn distinct_colors(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    /// Total number of pixels recorded
    #[inline]
    pub fn total(&self) -> u64 {
        self.total
    }
}
