//! colorfinder-test - Regression test helpers for ColorFinder
//!
//! Provides a small regression harness in the style of a `*_reg` test
//! program: every check bumps an index, failures are collected, and
//! [`RegParams::cleanup`] reports the outcome.
//!
//! - **Compare** (default): run checks and report failures
//! - **Display**: additionally print every palette that is checked
//!
//! # Usage
//!
//! ```ignore
//! use colorfinder_test::RegParams;
//!
//! let mut rp = RegParams::new("mmcq");
//! rp.compare_values(2.0, cmap.size() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "compare" or "display"

pub mod fixtures;
mod params;

pub use params::{RegParams, RegTestMode};
