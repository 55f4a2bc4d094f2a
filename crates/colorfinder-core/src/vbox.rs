//! Color boxes in the quantized color cube
//!
//! A [`ColorBox`] is an axis-aligned region `[r1,r2]×[g1,g2]×[b1,b2]` of
//! quantized coordinates that borrows the histogram it was built from.
//! Volume, population and average color are computed on first access and
//! cached for the lifetime of the box. Boxes are never resized in place;
//! splitting produces new boxes.

use std::cell::OnceCell;

use crate::color::{BUCKET_WIDTH, QUANT_MAX, Rgb};
use crate::error::{Error, Result};
use crate::histogram::Histogram;

/// Color axis of the quantized cube
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Red,
    Green,
    Blue,
}

/// Inclusive bounds of a box in quantized coordinates.
///
/// Always satisfies `lo <= hi <= QUANT_MAX` on every axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoxBounds {
    r1: u8,
    r2: u8,
    g1: u8,
    g2: u8,
    b1: u8,
    b2: u8,
}

impl BoxBounds {
    /// Create bounds, rejecting inverted ranges or coordinates outside the cube
    pub fn new(r1: u8, r2: u8, g1: u8, g2: u8, b1: u8, b2: u8) -> Result<Self> {
        let valid = |lo: u8, hi: u8| lo <= hi && hi <= QUANT_MAX;
        if !(valid(r1, r2) && valid(g1, g2) && valid(b1, b2)) {
            return Err(Error::InvalidBounds {
                r1,
                r2,
                g1,
                g2,
                b1,
                b2,
            });
        }
        Ok(Self {
            r1,
            r2,
            g1,
            g2,
            b1,
            b2,
        })
    }

    /// Smallest bounds enclosing every pixel, or `None` for no pixels
    pub fn from_pixels(pixels: &[Rgb]) -> Option<Self> {
        let first = pixels.first()?.quantized();
        let (mut lo, mut hi) = (first, first);
        for pixel in &pixels[1..] {
            let q = pixel.quantized();
            for c in 0..3 {
                lo[c] = lo[c].min(q[c]);
                hi[c] = hi[c].max(q[c]);
            }
        }
        Some(Self {
            r1: lo[0],
            r2: hi[0],
            g1: lo[1],
            g2: hi[1],
            b1: lo[2],
            b2: hi[2],
        })
    }

    /// `(lo, hi)` along an axis
    #[inline]
    pub fn axis(&self, axis: Axis) -> (u8, u8) {
        match axis {
            Axis::Red => (self.r1, self.r2),
            Axis::Green => (self.g1, self.g2),
            Axis::Blue => (self.b1, self.b2),
        }
    }

    /// Number of coordinates covered along an axis
    #[inline]
    pub fn extent(&self, axis: Axis) -> u32 {
        let (lo, hi) = self.axis(axis);
        (hi - lo) as u32 + 1
    }

    /// Copy of these bounds with one axis replaced
    pub fn with_axis(&self, axis: Axis, lo: u8, hi: u8) -> Result<Self> {
        let b = *self;
        match axis {
            Axis::Red => Self::new(lo, hi, b.g1, b.g2, b.b1, b.b2),
            Axis::Green => Self::new(b.r1, b.r2, lo, hi, b.b1, b.b2),
            Axis::Blue => Self::new(b.r1, b.r2, b.g1, b.g2, lo, hi),
        }
    }

    /// Number of buckets inside the bounds
    #[inline]
    pub fn volume(&self) -> u64 {
        self.extent(Axis::Red) as u64 * self.extent(Axis::Green) as u64 * self.extent(Axis::Blue) as u64
    }

    /// Whether a quantized coordinate triple lies inside the bounds
    #[inline]
    pub fn contains_quantized(&self, [r, g, b]: [u8; 3]) -> bool {
        r >= self.r1 && r <= self.r2 && g >= self.g1 && g <= self.g2 && b >= self.b1 && b <= self.b2
    }

    /// Whether a pixel falls inside the bounds after quantization
    #[inline]
    pub fn contains(&self, pixel: Rgb) -> bool {
        self.contains_quantized(pixel.quantized())
    }

    /// Iterate every quantized coordinate triple inside the bounds,
    /// red outermost and blue innermost.
    pub fn coordinates(&self) -> impl Iterator<Item = (u8, u8, u8)> + '_ {
        (self.r1..=self.r2).flat_map(move |r| {
            (self.g1..=self.g2).flat_map(move |g| (self.b1..=self.b2).map(move |b| (r, g, b)))
        })
    }
}

/// A box of the quantized cube with lazily computed statistics.
#[derive(Debug)]
pub struct ColorBox<'h> {
    bounds: BoxBounds,
    histo: &'h Histogram,
    volume: OnceCell<u64>,
    count: OnceCell<u64>,
    avg: OnceCell<Rgb>,
}

impl<'h> ColorBox<'h> {
    /// Create a box over `histo`
    pub fn new(bounds: BoxBounds, histo: &'h Histogram) -> Self {
        Self {
            bounds,
            histo,
            volume: OnceCell::new(),
            count: OnceCell::new(),
            avg: OnceCell::new(),
        }
    }

    /// Smallest box enclosing every pixel, or `None` for no pixels
    pub fn from_pixels(pixels: &[Rgb], histo: &'h Histogram) -> Option<Self> {
        BoxBounds::from_pixels(pixels).map(|bounds| Self::new(bounds, histo))
    }

    /// Bounds of this box
    #[inline]
    pub fn bounds(&self) -> BoxBounds {
        self.bounds
    }

    /// Histogram this box reads from
    #[inline]
    pub fn histogram(&self) -> &'h Histogram {
        self.histo
    }

    /// Independent box with identical bounds over the same histogram
    pub fn copy(&self) -> Self {
        Self::new(self.bounds, self.histo)
    }

    /// Independent box over the same histogram with one axis replaced
    pub fn copy_with_axis(&self, axis: Axis, lo: u8, hi: u8) -> Result<Self> {
        Ok(Self::new(self.bounds.with_axis(axis, lo, hi)?, self.histo))
    }

    /// Product of the per-axis extents
    pub fn volume(&self) -> u64 {
        *self.volume.get_or_init(|| self.bounds.volume())
    }

    /// Number of pixels inside the box
    pub fn count(&self) -> u64 {
        *self.count.get_or_init(|| {
            self.bounds
                .coordinates()
                .map(|(r, g, b)| self.histo.count_at(r, g, b))
                .sum()
        })
    }

    /// Population-weighted average color.
    ///
    /// Each bucket contributes its midpoint scaled back to 8 bits. An empty
    /// box falls back to its geometric center.
    pub fn avg(&self) -> Rgb {
        *self.avg.get_or_init(|| {
            let mult = BUCKET_WIDTH as f64;
            let mut ntot = 0u64;
            let (mut rsum, mut gsum, mut bsum) = (0.0f64, 0.0f64, 0.0f64);
            for (r, g, b) in self.bounds.coordinates() {
                let hval = self.histo.count_at(r, g, b);
                if hval == 0 {
                    continue;
                }
                let h = hval as f64;
                ntot += hval;
                rsum += h * (r as f64 + 0.5) * mult;
                gsum += h * (g as f64 + 0.5) * mult;
                bsum += h * (b as f64 + 0.5) * mult;
            }

            if ntot > 0 {
                let n = ntot as f64;
                Rgb::new((rsum / n) as u8, (gsum / n) as u8, (bsum / n) as u8)
            } else {
                let center = |axis| {
                    let (lo, hi) = self.bounds.axis(axis);
                    (BUCKET_WIDTH * (lo as u32 + hi as u32 + 1) / 2) as u8
                };
                Rgb::new(center(Axis::Red), center(Axis::Green), center(Axis::Blue))
            }
        })
    }

    /// Whether a pixel falls inside the box after quantization
    #[inline]
    pub fn contains(&self, pixel: Rgb) -> bool {
        self.bounds.contains(pixel)
    }
}
