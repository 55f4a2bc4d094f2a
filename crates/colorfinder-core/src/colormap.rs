//! Color map produced by quantization
//!
//! An immutable list of retained boxes with their average colors, sorted
//! ascending by population × volume. The last entry is the most
//! significant box.

use crate::color::Rgb;
use crate::error::{Error, Result};
use crate::pqueue::PQueue;
use crate::vbox::{BoxBounds, ColorBox};

/// One retained box of a [`ColorMap`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorMapEntry {
    bounds: BoxBounds,
    color: Rgb,
    population: u64,
    volume: u64,
}

impl ColorMapEntry {
    fn from_box(vbox: &ColorBox<'_>) -> Self {
        Self {
            bounds: vbox.bounds(),
            color: vbox.avg(),
            population: vbox.count(),
            volume: vbox.volume(),
        }
    }

    /// Bounds of the box in quantized coordinates
    pub fn bounds(&self) -> BoxBounds {
        self.bounds
    }

    /// Average color of the box
    pub fn color(&self) -> Rgb {
        self.color
    }

    /// Number of input pixels inside the box
    pub fn population(&self) -> u64 {
        self.population
    }

    /// Number of buckets covered by the box
    pub fn volume(&self) -> u64 {
        self.volume
    }

    /// Ordering metric: population × volume
    pub fn priority(&self) -> u64 {
        self.population * self.volume
    }
}

/// Palette and lookup structure returned by [`quantize`](crate::quantize).
///
/// Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorMap {
    entries: Vec<ColorMapEntry>,
}

impl ColorMap {
    /// Build a color map from boxes given in queue pop order.
    pub(crate) fn from_boxes<'h>(boxes: impl IntoIterator<Item = ColorBox<'h>>) -> Result<Self> {
        let mut vboxes = PQueue::new(|a: &ColorMapEntry, b: &ColorMapEntry| {
            a.priority().cmp(&b.priority())
        });
        for vbox in boxes {
            vboxes.push(ColorMapEntry::from_box(&vbox));
        }
        if vboxes.is_empty() {
            return Err(Error::InvariantViolation(
                "quantization retained no boxes".to_string(),
            ));
        }
        Ok(Self {
            entries: vboxes.into_sorted_vec(),
        })
    }

    /// Colors of all retained boxes, ascending by significance
    pub fn palette(&self) -> Vec<Rgb> {
        self.entries.iter().map(|e| e.color).collect()
    }

    /// Number of retained boxes
    #[inline]
    pub fn size(&self) -> usize {
        self.entries.len()
    }

    /// Color of the most significant box (the last palette entry)
    pub fn dominant(&self) -> Rgb {
        self.entries.last().map(|e| e.color).unwrap_or_default()
    }

    /// Retained boxes in palette order
    pub fn entries(&self) -> &[ColorMapEntry] {
        &self.entries
    }

    /// Iterate retained boxes in palette order
    pub fn iter(&self) -> std::slice::Iter<'_, ColorMapEntry> {
        self.entries.iter()
    }

    /// Map a pixel to the color of the first box containing it, falling
    /// back to [`nearest`](Self::nearest).
    pub fn map(&self, pixel: Rgb) -> Rgb {
        self.entries
            .iter()
            .find(|e| e.bounds.contains(pixel))
            .map(|e| e.color)
            .unwrap_or_else(|| self.nearest(pixel))
    }

    /// Palette color closest to `pixel` in RGB space.
    ///
    /// On equal distance the earlier entry wins.
    pub fn nearest(&self, pixel: Rgb) -> Rgb {
        let mut best: Option<(u32, Rgb)> = None;
        for entry in &self.entries {
            let d = pixel.distance_squared(entry.color);
            match best {
                Some((best_d, _)) if d >= best_d => {}
                _ => best = Some((d, entry.color)),
            }
        }
        best.map(|(_, color)| color).unwrap_or_default()
    }
}

impl<'a> IntoIterator for &'a ColorMap {
    type Item = &'a ColorMapEntry;
    type IntoIter = std::slice::Iter<'a, ColorMapEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
