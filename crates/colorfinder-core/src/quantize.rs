//! Modified median cut quantization (MMCQ)
//!
//! Two rounds of iterative splitting over a priority queue of boxes:
//! first by population until a fraction of the target palette exists, then
//! by population × volume until the full target is reached. Both rounds
//! are bounded by an iteration cap, so a smaller palette is a normal
//! outcome for low-diversity input.

use std::cmp::Ordering;

use log::debug;

use crate::color::Rgb;
use crate::colormap::ColorMap;
use crate::error::{Error, Result};
use crate::histogram::Histogram;
use crate::median_cut::{Cut, median_cut_apply};
use crate::pqueue::PQueue;
use crate::vbox::ColorBox;

/// Smallest palette that may be requested
pub const MIN_COLORS: usize = 2;

/// Largest palette that may be requested
pub const MAX_COLORS: usize = 256;

/// Iteration cap for each round of splitting
pub const MAX_ITERATIONS: usize = 1000;

/// Share of the target palette produced by the population-ordered round
pub const FRACT_BY_POPULATIONS: f64 = 0.75;

/// Options for median cut quantization
#[derive(Debug, Clone, PartialEq)]
pub struct QuantizeOptions {
    /// Maximum number of colors in the palette, in `[2, 256]`
    pub max_colors: usize,
    /// Iteration cap for each round
    pub max_iterations: usize,
    /// Share of `max_colors` produced by the population-ordered round
    pub fract_by_populations: f64,
}

impl Default for QuantizeOptions {
    fn default() -> Self {
        Self {
            max_colors: 10,
            max_iterations: MAX_ITERATIONS,
            fract_by_populations: FRACT_BY_POPULATIONS,
        }
    }
}

impl QuantizeOptions {
    /// Check every option against its valid range
    pub fn validate(&self) -> Result<()> {
        if !(MIN_COLORS..=MAX_COLORS).contains(&self.max_colors) {
            return Err(Error::InvalidMaxColors(self.max_colors));
        }
        if self.max_iterations == 0 {
            return Err(Error::InvalidOptions(
                "max_iterations must be at least 1".to_string(),
            ));
        }
        if !(self.fract_by_populations > 0.0 && self.fract_by_populations <= 1.0) {
            return Err(Error::InvalidOptions(format!(
                "fract_by_populations must be in (0, 1], got {}",
                self.fract_by_populations
            )));
        }
        Ok(())
    }

    /// Number of boxes the population-ordered round aims for
    fn population_target(&self) -> usize {
        ((self.fract_by_populations * self.max_colors as f64) as usize).max(1)
    }
}

fn by_population(a: &ColorBox<'_>, b: &ColorBox<'_>) -> Ordering {
    a.count().cmp(&b.count())
}

fn by_population_volume(a: &ColorBox<'_>, b: &ColorBox<'_>) -> Ordering {
    (a.count() * a.volume()).cmp(&(b.count() * b.volume()))
}

/// Split boxes from the top of `queue` until it holds `target` boxes, the
/// iteration cap is reached, or the queue runs dry. Returns the number of
/// iterations used.
///
/// Empty boxes are pushed straight back and still use up an iteration.
fn iterate<'h, F>(
    queue: &mut PQueue<ColorBox<'h>, F>,
    target: usize,
    max_iterations: usize,
) -> Result<usize>
where
    F: Fn(&ColorBox<'h>, &ColorBox<'h>) -> Ordering,
{
    let mut ncolors = queue.len();
    let mut niters = 0;
    while ncolors < target && niters < max_iterations {
        let Some(vbox) = queue.pop() else {
            break;
        };
        niters += 1;

        if vbox.count() == 0 {
            queue.push(vbox);
            continue;
        }

        match median_cut_apply(&vbox)? {
            Cut::Unchanged(vbox) => queue.push(vbox),
            Cut::Split(first, second) => {
                queue.push(first);
                queue.push(second);
                ncolors += 1;
            }
        }
    }
    Ok(niters)
}

/// Quantize pixels to at most `max_colors` colors.
///
/// # Errors
///
/// - [`Error::InvalidMaxColors`] when `max_colors` is outside `[2, 256]`
/// - [`Error::EmptyInput`] when `pixels` is empty
/// - [`Error::InvariantViolation`] if a box cannot be cut
///
/// # Example
///
/// ```
/// use colorfinder_core::{Rgb, quantize};
///
/// let pixels = vec![Rgb::new(250, 10, 10); 10];
/// let cmap = quantize(&pixels, 4).unwrap();
/// assert_eq!(cmap.size(), 1);
/// assert_eq!(cmap.dominant(), Rgb::new(252, 12, 12));
/// ```
pub fn quantize(pixels: &[Rgb], max_colors: usize) -> Result<ColorMap> {
    quantize_with_options(
        pixels,
        &QuantizeOptions {
            max_colors,
            ..Default::default()
        },
    )
}

/// Quantize pixels with explicit options
pub fn quantize_with_options(pixels: &[Rgb], options: &QuantizeOptions) -> Result<ColorMap> {
    options.validate()?;
    if pixels.is_empty() {
        return Err(Error::EmptyInput);
    }

    let histo = Histogram::from_pixels(pixels);
    let root = ColorBox::from_pixels(pixels, &histo).ok_or(Error::EmptyInput)?;
    debug!(
        "quantizing {} pixels ({} distinct buckets) to at most {} colors",
        histo.total(),
        histo.distinct_colors(),
        options.max_colors
    );

    let mut pq: PQueue<ColorBox<'_>, _> = PQueue::new(by_population);
    pq.push(root);
    let iters = iterate(&mut pq, options.population_target(), options.max_iterations)?;
    debug!("population round: {} boxes after {} iterations", pq.len(), iters);

    let mut pq2: PQueue<ColorBox<'_>, _> = PQueue::new(by_population_volume);
    while let Some(vbox) = pq.pop() {
        pq2.push(vbox);
    }

    let iters = iterate(&mut pq2, options.max_colors, options.max_iterations)?;
    debug!("volume round: {} boxes after {} iterations", pq2.len(), iters);

    let mut boxes = Vec::with_capacity(pq2.len());
    while let Some(vbox) = pq2.pop() {
        boxes.push(vbox);
    }
    ColorMap::from_boxes(boxes)
}
