//! ColorFinder - Dominant color extraction for images
//!
//! This crate ties the colorfinder crates together:
//!
//! - `colorfinder-core` - Modified median cut quantization over RGB pixels,
//!   re-exported at the crate root
//! - [`io`] - RGBA buffers, pixel sampling and image decoding
//!
//! On top of them it provides [`ColorFinder`], which samples an image,
//! quantizes the samples and returns the most representative color with
//! its brightness capped by [`FinderConfig::max_color_value`]. With the
//! `worker` feature (enabled by default) the palette can be computed on a
//! background Tokio task, see [`PaletteWorker`].
//!
//! # Example
//!
//! ```
//! use colorfinder::{ColorFinder, FinderConfig, Rgb};
//! use colorfinder::io::RgbaImage;
//!
//! let mut data = [200u8, 40, 40, 255].repeat(30);
//! data.extend([40u8, 40, 200, 255].repeat(10));
//! let image = RgbaImage::new(8, 5, data).unwrap();
//!
//! let config = FinderConfig { quality: 1, ..Default::default() };
//! let finder = ColorFinder::new(config).unwrap();
//! let color = finder.dominant_color(&image).unwrap();
//! assert_eq!(color, Rgb::new(204, 44, 44));
//! ```

pub mod config;
pub mod error;
pub mod finder;
pub mod normalize;
#[cfg(feature = "worker")]
pub mod worker;

// Re-export the quantizer at the crate root
pub use colorfinder_core::*;

pub use colorfinder_io as io;

pub use config::FinderConfig;
pub use error::{FinderError, FinderResult};
pub use finder::{ColorFinder, palette_from_image};
pub use normalize::normalize_color;
#[cfg(feature = "worker")]
pub use worker::{PaletteWorker, WorkerRequest, WorkerResponse};
