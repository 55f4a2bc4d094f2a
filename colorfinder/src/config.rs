//! Typed configuration for [`ColorFinder`](crate::ColorFinder)

use std::time::Duration;

use colorfinder_core::{MAX_COLORS, MIN_COLORS};
use colorfinder_io::ExtractOptions;

use crate::error::{FinderError, FinderResult};

/// Configuration of a [`ColorFinder`](crate::ColorFinder)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinderConfig {
    /// Sampling stride in pixels
    pub quality: usize,
    /// Palette size requested from the quantizer
    pub max_colors: usize,
    /// Minimum alpha for a pixel to be sampled
    pub min_alpha: u8,
    /// Pixels with all channels above this are skipped as white
    pub white_threshold: u8,
    /// Brightness ceiling applied to the dominant color
    pub max_color_value: u8,
    /// Prefer the background worker when one is running
    pub use_worker: bool,
    /// How long to wait for the worker before computing in place
    pub worker_timeout: Duration,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            quality: 10,
            max_colors: 10,
            min_alpha: 125,
            white_threshold: 250,
            max_color_value: 230,
            use_worker: true,
            worker_timeout: Duration::from_secs(2),
        }
    }
}

impl FinderConfig {
    /// Check every field against its valid range
    pub fn validate(&self) -> FinderResult<()> {
        if self.quality == 0 {
            return Err(FinderError::InvalidConfig(
                "quality must be at least 1".to_string(),
            ));
        }
        if !(MIN_COLORS..=MAX_COLORS).contains(&self.max_colors) {
            return Err(FinderError::InvalidConfig(format!(
                "max_colors must be between {MIN_COLORS} and {MAX_COLORS}, got {}",
                self.max_colors
            )));
        }
        Ok(())
    }

    /// Extraction options derived from this configuration
    pub fn extract_options(&self) -> ExtractOptions {
        ExtractOptions {
            quality: self.quality,
            min_alpha: self.min_alpha,
            white_threshold: self.white_threshold,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FinderConfig::default();
        assert_eq!(config.max_color_value, 230);
        assert_eq!(config.quality, 10);
        assert_eq!(config.max_colors, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let config = FinderConfig {
            quality: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(FinderError::InvalidConfig(_))));
        let config = FinderConfig {
            max_colors: 1,
            ..Default::default()
        };
        assert!(config.validate().is_err());
        let config = FinderConfig {
            max_colors: 257,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_extract_options() {
        let config = FinderConfig {
            quality: 3,
            min_alpha: 10,
            white_threshold: 200,
            ..Default::default()
        };
        let opts = config.extract_options();
        assert_eq!(opts.quality, 3);
        assert_eq!(opts.min_alpha, 10);
        assert_eq!(opts.white_threshold, 200);
    }
}
