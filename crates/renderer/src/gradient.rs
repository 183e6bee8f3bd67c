//! Two-segment heat-map gradient for choropleth fills.
//!
//! The lower half of a frame's metric range fades blue into green, the upper
//! half fades green into red:
//!
//! ```text
//! min ----------- mid ----------- max
//! (0,0,255)    (0,255,0)    (255,0,0)
//! ```

use image::Rgb;
use map_common::MetricRange;

/// Color value in RGB format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::new(255, 255, 255);
    pub const BLACK: Color = Color::new(0, 0, 0);
    /// Used when a frame's range collapses to a single value.
    pub const MIDPOINT: Color = Color::new(0, 255, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl From<Color> for Rgb<u8> {
    fn from(color: Color) -> Self {
        Rgb([color.r, color.g, color.b])
    }
}

/// Map a normalized value (fraction, same scale as `range`) to a fill color.
///
/// Values outside the range extrapolate along their segment and are clamped
/// per channel, so a county whose rate defaulted to 0 below a positive minimum
/// comes out pure blue.
pub fn heat_color(value: f64, range: &MetricRange) -> Color {
    let mid = range.mid();

    // Also covers min > max and ranges too narrow to split in two.
    if !(mid > range.min && range.max > mid) {
        return Color::MIDPOINT;
    }

    if value <= mid {
        let t = 255.0 / (mid - range.min) * (value - range.min);
        Color::new(0, channel(t), channel(255.0 - t))
    } else {
        let t = 255.0 / (range.max - mid) * (value - mid);
        Color::new(channel(t), channel(255.0 - t), 0)
    }
}

/// Round and clamp to a color channel. NaN maps to 0.
fn channel(v: f64) -> u8 {
    if v.is_nan() {
        return 0;
    }
    v.round().clamp(0.0, 255.0) as u8
}
