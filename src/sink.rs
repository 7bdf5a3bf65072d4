//! Hardware abstraction for the pixel chain.

use crate::encoder::PixelWord;

/// Trait for abstracting the pixel transmission hardware.
///
/// Implement this for your driver (PIO state machine, SPI, bit-banged GPIO,
/// etc.) to let the renderer drive it. A frame is written as 25 calls with
/// `physical_index` ascending from 0 to 24. Implementations may block until
/// the word is accepted. Handle any hardware errors internally - this method
/// cannot fail.
pub trait PixelSink {
    /// Writes one encoded pixel at its position in the wiring chain.
    fn write(&mut self, physical_index: usize, word: PixelWord);
}

impl<S: PixelSink + ?Sized> PixelSink for &mut S {
    #[inline]
    fn write(&mut self, physical_index: usize, word: PixelWord) {
        (**self).write(physical_index, word);
    }
}
