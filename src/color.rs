//! Raw color input, normalization and intensity scaling.
//!
//! Colors enter the crate as raw 0-255 channel values and leave it as
//! `Srgb<f32>` in the 0.0-1.0 range. Both conversions are total: out-of-range
//! input is clamped, never rejected.

use palette::Srgb;

/// A color as supplied by callers: one value per channel, nominally 0-255.
///
/// Channels are signed so that out-of-range input can be represented and
/// clamped rather than wrapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RawColor {
    pub red: i32,
    pub green: i32,
    pub blue: i32,
}

impl RawColor {
    /// Creates a raw color.
    #[inline]
    pub const fn new(red: i32, green: i32, blue: i32) -> Self {
        Self { red, green, blue }
    }

    /// All channels off.
    pub const OFF: RawColor = RawColor::new(0, 0, 0);
}

impl From<Srgb<u8>> for RawColor {
    fn from(color: Srgb<u8>) -> Self {
        RawColor::new(color.red as i32, color.green as i32, color.blue as i32)
    }
}

impl From<(u8, u8, u8)> for RawColor {
    fn from((red, green, blue): (u8, u8, u8)) -> Self {
        RawColor::new(red as i32, green as i32, blue as i32)
    }
}

/// The demo color cycle.
pub const DEMO_PALETTE: [RawColor; 10] = [
    RawColor::new(255, 0, 0),     // red
    RawColor::new(255, 165, 0),   // orange
    RawColor::new(255, 255, 0),   // yellow
    RawColor::new(0, 255, 0),     // green
    RawColor::new(0, 255, 255),   // cyan
    RawColor::new(0, 0, 75),      // dark blue
    RawColor::new(255, 0, 255),   // magenta
    RawColor::new(0, 255, 255),   // aqua
    RawColor::new(255, 255, 255), // white
    RawColor::new(255, 128, 128), // pink
];

#[inline]
fn normalize_channel(value: i32) -> f32 {
    value.clamp(0, 255) as f32 / 255.0
}

/// Clamps each channel to 0-255 and scales it to 0.0-1.0.
pub fn normalize(color: RawColor) -> Srgb {
    Srgb::new(
        normalize_channel(color.red),
        normalize_channel(color.green),
        normalize_channel(color.blue),
    )
}

/// Scales a normalized color by a glyph pixel intensity and the overall intensity.
///
/// `overall_intensity` is clamped to 0.0-1.0 before use, as is
/// `glyph_intensity`, so the result always stays in range.
pub fn scale(color: Srgb, glyph_intensity: f32, overall_intensity: f32) -> Srgb {
    let factor = clamp_unit(glyph_intensity) * clamp_unit(overall_intensity);
    Srgb::new(
        clamp_unit(color.red * factor),
        clamp_unit(color.green * factor),
        clamp_unit(color.blue * factor),
    )
}

/// Clamps to 0.0-1.0. NaN maps to 0.0.
#[inline]
pub fn clamp_unit(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}
