//! Dominant color lookup over decoded images

use std::path::Path;

use colorfinder_core::{Rgb, quantize};
use colorfinder_io::{ExtractOptions, RgbaImage, decode_image, extract_pixels, read_image};

use crate::config::FinderConfig;
use crate::error::FinderResult;
use crate::normalize::normalize_color;

/// Quantize the sampled pixels of `image` into at most `max_colors` colors.
///
/// The palette is returned in ascending priority order, so the most
/// representative color is last.
pub fn palette_from_image(
    image: &RgbaImage,
    max_colors: usize,
    options: &ExtractOptions,
) -> FinderResult<Vec<Rgb>> {
    let pixels = extract_pixels(image, options)?;
    log::debug!(
        "sampled {} of {} pixels from {}x{} image",
        pixels.len(),
        image.pixel_count(),
        image.width(),
        image.height()
    );
    let cmap = quantize(&pixels, max_colors)?;
    Ok(cmap.palette())
}

/// Finds the dominant color of images
///
/// # Example
///
/// ```
/// use colorfinder::{ColorFinder, FinderConfig, Rgb};
/// use colorfinder::io::RgbaImage;
///
/// let data = [250u8, 10, 10, 255].repeat(64);
/// let image = RgbaImage::new(8, 8, data).unwrap();
/// let finder = ColorFinder::new(FinderConfig { quality: 1, ..Default::default() }).unwrap();
/// assert_eq!(finder.dominant_color(&image).unwrap(), Rgb::new(230, 0, 0));
/// ```
#[derive(Debug)]
pub struct ColorFinder {
    pub(crate) config: FinderConfig,
    #[cfg(feature = "worker")]
    pub(crate) worker: Option<crate::worker::PaletteWorker>,
}

impl Default for ColorFinder {
    fn default() -> Self {
        Self {
            config: FinderConfig::default(),
            #[cfg(feature = "worker")]
            worker: None,
        }
    }
}

impl ColorFinder {
    /// Create a finder after validating `config`
    pub fn new(config: FinderConfig) -> FinderResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            ..Default::default()
        })
    }

    /// Current configuration
    pub fn config(&self) -> &FinderConfig {
        &self.config
    }

    /// Replace the configuration.
    ///
    /// The previous configuration is kept when `config` is invalid. A
    /// running worker is not restarted.
    pub fn set_config(&mut self, config: FinderConfig) -> FinderResult<&mut Self> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    /// Palette of `image` under the current configuration
    pub fn palette(&self, image: &RgbaImage) -> FinderResult<Vec<Rgb>> {
        palette_from_image(
            image,
            self.config.max_colors,
            &self.config.extract_options(),
        )
    }

    /// Dominant color of `image`, darkened to the configured ceiling
    pub fn dominant_color(&self, image: &RgbaImage) -> FinderResult<Rgb> {
        let pixels = extract_pixels(image, &self.config.extract_options())?;
        let cmap = quantize(&pixels, self.config.max_colors)?;
        Ok(self.finish(cmap.dominant()))
    }

    /// Read and decode the image at `path`, then find its dominant color
    pub fn from_path<P: AsRef<Path>>(&self, path: P) -> FinderResult<Rgb> {
        let image = read_image(path)?;
        self.dominant_color(&image)
    }

    /// Decode an encoded image held in memory, then find its dominant color
    pub fn from_bytes(&self, bytes: &[u8]) -> FinderResult<Rgb> {
        let image = decode_image(bytes)?;
        self.dominant_color(&image)
    }

    pub(crate) fn finish(&self, color: Rgb) -> Rgb {
        normalize_color(color, self.config.max_color_value)
    }
}
