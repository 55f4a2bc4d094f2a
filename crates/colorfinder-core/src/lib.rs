//! ColorFinder Core - Modified median cut color quantization
//!
//! This crate extracts a small representative palette from a set of RGB
//! pixels using modified median cut quantization (MMCQ):
//!
//! - [`Rgb`] and quantized color space helpers ([`color`])
//! - [`Histogram`] - Pixel counts over the reduced 5-bit color cube
//! - [`ColorBox`] / [`BoxBounds`] - Boxes of the cube with cached statistics
//! - [`median_cut_apply`] - Splitting one box along its widest axis
//! - [`PQueue`] - Lazily sorted priority queue with stable ordering
//! - [`quantize`] - Two-round iterative splitting to a target palette size
//! - [`ColorMap`] - The resulting palette with containment and nearest lookup
//!
//! The computation is synchronous, deterministic and holds no state
//! between calls.
//!
//! # Example
//!
//! ```
//! use colorfinder_core::{Rgb, quantize};
//!
//! let pixels = vec![Rgb::new(250, 10, 10), Rgb::new(10, 10, 250), Rgb::new(250, 10, 10)];
//! let cmap = quantize(&pixels, 2).unwrap();
//! assert_eq!(cmap.size(), 2);
//! assert_eq!(cmap.dominant(), Rgb::new(252, 12, 12));
//! ```

pub mod color;
pub mod colormap;
pub mod error;
pub mod histogram;
pub mod median_cut;
pub mod pqueue;
pub mod quantize;
pub mod vbox;

pub use color::Rgb;
pub use colormap::{ColorMap, ColorMapEntry};
pub use error::{Error, Result};
pub use histogram::Histogram;
pub use median_cut::{Cut, median_cut_apply, widest_axis};
pub use pqueue::PQueue;
pub use quantize::{
    FRACT_BY_POPULATIONS, MAX_COLORS, MAX_ITERATIONS, MIN_COLORS, QuantizeOptions, quantize,
    quantize_with_options,
};
pub use vbox::{Axis, BoxBounds, ColorBox};
