//! RGB pixel type and quantized color space helpers
//!
//! Channels are reduced to [`SIGBITS`] significant bits. A quantized
//! coordinate triple maps to a single bucket index
//! `(r << 2*SIGBITS) + (g << SIGBITS) + b`.

/// Significant bits kept per channel
pub const SIGBITS: u32 = 5;

/// Right shift applied to an 8-bit channel to quantize it
pub const RSHIFT: u32 = 8 - SIGBITS;

/// Largest quantized coordinate
pub const QUANT_MAX: u8 = (1 << SIGBITS) - 1;

/// Number of buckets in the quantized cube
pub const HISTO_SIZE: usize = 1 << (3 * SIGBITS);

/// Width of one bucket in 8-bit units
pub const BUCKET_WIDTH: u32 = 1 << RSHIFT;

/// An 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    /// Red component
    pub r: u8,
    /// Green component
    pub g: u8,
    /// Blue component
    pub b: u8,
}

impl Rgb {
    /// Create a new color
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Components as an array
    #[inline]
    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Quantized coordinates of this color
    #[inline]
    pub fn quantized(self) -> [u8; 3] {
        [
            quantize_channel(self.r),
            quantize_channel(self.g),
            quantize_channel(self.b),
        ]
    }

    /// Bucket index of this color in the quantized cube
    #[inline]
    pub fn bucket_index(self) -> usize {
        let [r, g, b] = self.quantized();
        color_index(r, g, b)
    }

    /// Largest of the three components
    #[inline]
    pub fn max_component(self) -> u8 {
        self.r.max(self.g).max(self.b)
    }

    /// Squared Euclidean distance in RGB space.
    ///
    /// Orders candidates exactly like the true distance.
    #[inline]
    pub fn distance_squared(self, other: Rgb) -> u32 {
        let dr = self.r as i32 - other.r as i32;
        let dg = self.g as i32 - other.g as i32;
        let db = self.b as i32 - other.b as i32;
        (dr * dr + dg * dg + db * db) as u32
    }

    /// Euclidean distance in RGB space
    #[inline]
    pub fn distance(self, other: Rgb) -> f64 {
        (self.distance_squared(other) as f64).sqrt()
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(c: Rgb) -> Self {
        c.to_array()
    }
}

impl From<Rgb> for (u8, u8, u8) {
    fn from(c: Rgb) -> Self {
        (c.r, c.g, c.b)
    }
}

/// Reduce an 8-bit channel to its quantized coordinate
#[inline]
pub fn quantize_channel(value: u8) -> u8 {
    value >> RSHIFT
}

/// Bucket index of a quantized coordinate triple
#[inline]
pub fn color_index(r: u8, g: u8, b: u8) -> usize {
    ((r as usize) << (2 * SIGBITS)) + ((g as usize) << SIGBITS) + b as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert_eq!(RSHIFT, 3);
        assert_eq!(QUANT_MAX, 31);
        assert_eq!(HISTO_SIZE, 32768);
        assert_eq!(BUCKET_WIDTH, 8);
    }

    #[test]
    fn test_quantize_channel() {
        assert_eq!(quantize_channel(0), 0);
        assert_eq!(quantize_channel(7), 0);
        assert_eq!(quantize_channel(8), 1);
        assert_eq!(quantize_channel(255), 31);
    }

    #[test]
    fn test_color_index() {
        assert_eq!(color_index(0, 0, 0), 0);
        assert_eq!(color_index(0, 0, 1), 1);
        assert_eq!(color_index(0, 1, 0), 32);
        assert_eq!(color_index(1, 0, 0), 1024);
        assert_eq!(color_index(31, 31, 31), HISTO_SIZE - 1);
    }

    #[test]
    fn test_bucket_index() {
        // 128 >> 3 = 16, 64 >> 3 = 8, 32 >> 3 = 4
        let c = Rgb::new(128, 64, 32);
        assert_eq!(c.quantized(), [16, 8, 4]);
        assert_eq!(c.bucket_index(), 16 * 1024 + 8 * 32 + 4);
    }

    #[test]
    fn test_distance() {
        let a = Rgb::new(0, 0, 0);
        let b = Rgb::new(3, 4, 0);
        assert_eq!(a.distance_squared(b), 25);
        assert!((a.distance(b) - 5.0).abs() < 1e-12);
        assert_eq!(Rgb::new(255, 0, 0).distance_squared(Rgb::new(0, 0, 0)), 65025);
    }

    #[test]
    fn test_conversions() {
        let c: Rgb = [1, 2, 3].into();
        assert_eq!(c, Rgb::new(1, 2, 3));
        let t: (u8, u8, u8) = c.into();
        assert_eq!(t, (1, 2, 3));
        let a: [u8; 3] = Rgb::from((9, 8, 7)).into();
        assert_eq!(a, [9, 8, 7]);
        assert_eq!(Rgb::new(10, 200, 30).max_component(), 200);
    }
}
