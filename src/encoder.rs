//! Packing of normalized colors into the 32-bit word the pixel chain expects.

use crate::color::clamp_unit;
use palette::Srgb;

/// A color packed for transmission: green in bits 31-24, red in 23-16, blue
/// in 15-8. The low byte is reserved and always zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PixelWord(pub u32);

impl PixelWord {
    /// The word for a pixel that is off.
    pub const OFF: PixelWord = PixelWord(0);

    /// Green byte.
    #[inline]
    pub const fn green(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Red byte.
    #[inline]
    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Blue byte.
    #[inline]
    pub const fn blue(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Raw word value.
    #[inline]
    pub const fn bits(self) -> u32 {
        self.0
    }
}

impl From<PixelWord> for u32 {
    fn from(word: PixelWord) -> Self {
        word.0
    }
}

// Truncates, matching the integer conversion the pixel chain was tuned for.
#[inline]
fn channel_byte(value: f32) -> u32 {
    (clamp_unit(value) * 255.0) as u8 as u32
}

/// Packs a normalized color into a [`PixelWord`].
pub fn encode(color: Srgb) -> PixelWord {
    PixelWord(
        (channel_byte(color.green) << 24)
            | (channel_byte(color.red) << 16)
            | (channel_byte(color.blue) << 8),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn red_lands_in_second_byte() {
        assert_eq!(encode(Srgb::new(1.0, 0.0, 0.0)), PixelWord(0x00FF_0000));
    }

    #[test]
    fn channel_order_is_grb() {
        let word = encode(Srgb::new(0.0, 1.0, 0.0));
        assert_eq!(word, PixelWord(0xFF00_0000));
        let word = encode(Srgb::new(0.0, 0.0, 1.0));
        assert_eq!(word, PixelWord(0x0000_FF00));
    }

    #[test]
    fn conversion_truncates() {
        // 0.5 * 255 = 127.5
        let word = encode(Srgb::new(0.5, 0.999, 0.0));
        assert_eq!(word.red(), 127);
        assert_eq!(word.green(), 254);
        assert_eq!(word.bits() & 0xFF, 0);
    }

    #[test]
    fn out_of_range_channels_are_clamped() {
        let word = encode(Srgb::new(2.0, -1.0, 0.0));
        assert_eq!(word, PixelWord(0x00FF_0000));
    }
}
