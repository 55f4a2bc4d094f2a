//! Brightness clamping of a final color

use colorfinder_core::Rgb;

/// Darken `color` so its brightest channel does not exceed `max_color_value`.
///
/// Every channel is reduced by the same amount, clipping at zero. Colors
/// already within the ceiling are returned unchanged.
pub fn normalize_color(color: Rgb, max_color_value: u8) -> Rgb {
    let max = color.max_component();
    if max <= max_color_value {
        return color;
    }
    let delta = max - max_color_value;
    Rgb::new(
        color.r.saturating_sub(delta),
        color.g.saturating_sub(delta),
        color.b.saturating_sub(delta),
    )
}
