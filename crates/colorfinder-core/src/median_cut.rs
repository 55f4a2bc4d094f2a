//! Median cut splitting of a single color box
//!
//! The box is cut across its widest axis near the population median, with
//! the cut plane pushed toward the larger side and then nudged so neither
//! child is left empty when that can be avoided.

use log::{error, trace};

use crate::error::{Error, Result};
use crate::vbox::{Axis, BoxBounds, ColorBox};

/// Outcome of cutting one box
#[derive(Debug)]
pub enum Cut<'h> {
    /// The box holds a single pixel or a single bucket and was not divided
    Unchanged(ColorBox<'h>),
    /// The box was divided into a lower and an upper part
    Split(ColorBox<'h>, ColorBox<'h>),
}

impl<'h> Cut<'h> {
    /// Number of boxes produced
    pub fn len(&self) -> usize {
        match self {
            Cut::Unchanged(_) => 1,
            Cut::Split(..) => 2,
        }
    }

    /// Always false; a cut yields at least one box
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Split into the first box and the optional second box
    pub fn into_boxes(self) -> (ColorBox<'h>, Option<ColorBox<'h>>) {
        match self {
            Cut::Unchanged(vbox) => (vbox, None),
            Cut::Split(first, second) => (first, Some(second)),
        }
    }
}

/// Axis with the largest extent; ties resolve red, then green, then blue
pub fn widest_axis(bounds: &BoxBounds) -> Axis {
    let rw = bounds.extent(Axis::Red);
    let gw = bounds.extent(Axis::Green);
    let bw = bounds.extent(Axis::Blue);
    let maxw = rw.max(gw).max(bw);
    if rw == maxw {
        Axis::Red
    } else if gw == maxw {
        Axis::Green
    } else {
        Axis::Blue
    }
}

/// Population of every plane perpendicular to `axis`, accumulated from
/// the low bound.
fn partial_sums(vbox: &ColorBox<'_>, axis: Axis) -> Result<Vec<u64>> {
    let bounds = vbox.bounds();
    let histo = vbox.histogram();
    let (lo, hi) = bounds.axis(axis);

    let mut total = 0u64;
    let mut partial = Vec::with_capacity((hi - lo) as usize + 1);
    for coord in lo..=hi {
        let plane = bounds.with_axis(axis, coord, coord)?;
        total += plane
            .coordinates()
            .map(|(r, g, b)| histo.count_at(r, g, b))
            .sum::<u64>();
        partial.push(total);
    }
    Ok(partial)
}

/// Cut a box in two along its widest axis.
///
/// A box holding one pixel, or confined to one bucket, is returned
/// unchanged. The first child covers `[lo, d2]` on the cut axis and the
/// second `[d2 + 1, hi]`; both keep the parent's other bounds, so their
/// populations always sum to the parent's.
///
/// # Errors
///
/// Returns [`Error::InvariantViolation`] for an empty box or when no
/// median plane exists.
pub fn median_cut_apply<'h>(vbox: &ColorBox<'h>) -> Result<Cut<'h>> {
    let total = vbox.count();
    if total == 0 {
        return Err(Error::InvariantViolation(
            "median cut applied to an empty box".to_string(),
        ));
    }
    if total == 1 {
        return Ok(Cut::Unchanged(vbox.copy()));
    }

    let bounds = vbox.bounds();
    let axis = widest_axis(&bounds);
    let (lo, hi) = bounds.axis(axis);
    if lo == hi {
        return Ok(Cut::Unchanged(vbox.copy()));
    }

    let partial = partial_sums(vbox, axis)?;
    let Some(offset) = partial.iter().position(|&sum| 2 * sum > total) else {
        error!("no median plane in box {bounds:?} with {total} pixels");
        return Err(Error::InvariantViolation(format!(
            "no median plane found for box with {total} pixels"
        )));
    };

    let (lo, hi) = (lo as i32, hi as i32);
    let pre = |d: i32| partial[(d - lo) as usize];
    let i = lo + offset as i32;
    let left = i - lo;
    let right = hi - i;

    // Lean toward the larger side: floor(i + right/2), floor(i - 1 - left/2)
    let mut d2 = if left <= right {
        (hi - 1).min(i + right / 2)
    } else {
        lo.max(i - 1 - (left + 1) / 2)
    };

    // Avoid an empty first child
    while d2 < hi && pre(d2) == 0 {
        d2 += 1;
    }

    // Avoid an empty second child
    let mut count2 = total - pre(d2);
    while count2 == 0 && d2 > lo && pre(d2 - 1) != 0 {
        d2 -= 1;
        count2 = total - pre(d2);
    }

    // All pixels on the top plane: keep the upper child non-empty
    if d2 >= hi {
        d2 = hi - 1;
    }

    let first = vbox.copy_with_axis(axis, lo as u8, d2 as u8)?;
    let second = vbox.copy_with_axis(axis, d2 as u8 + 1, hi as u8)?;
    trace!(
        "cut {:?} on {:?} at {}: {:?} | {:?}",
        bounds,
        axis,
        d2,
        first.bounds(),
        second.bounds()
    );
    Ok(Cut::Split(first, second))
}
