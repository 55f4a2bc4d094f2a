//! ColorFinder IO - Turning images into quantizer input
//!
//! - [`RgbaImage`] - Owned decoded RGBA8 buffer
//! - [`extract_pixels`] - Strided sampling with opacity and near-white filtering
//! - [`read_image`] / [`decode_image`] - Decoding through the `image` crate
//!   (feature `decode`, enabled by default)

#[cfg(feature = "decode")]
pub mod decode;
pub mod error;
pub mod extract;
pub mod rgba;

pub use error::{IoError, IoResult};
pub use extract::{ExtractOptions, extract_pixels};
pub use rgba::RgbaImage;

#[cfg(feature = "decode")]
pub use decode::{decode_image, read_image};
