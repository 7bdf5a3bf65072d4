//! Text to glyph sequence conversion.

use crate::glyph::{self, Glyph};
use crate::types::RenderError;
use heapless::Vec;

/// An ordered glyph sequence for one render call.
///
/// Always ends with one [`Glyph::BLANK`] so a looping message stays visually
/// separated from its own start. Holds references into the static font, so
/// building one never copies bitmap data.
///
/// # Type Parameters
/// * `N` - Glyph capacity, trailing blank included. Texts of up to `N - 1`
///   characters fit.
#[derive(Debug, Clone)]
pub struct Message<const N: usize> {
    glyphs: Vec<&'static Glyph, N>,
}

impl<const N: usize> Message<N> {
    /// Builds the glyph sequence for `text`.
    ///
    /// Empty text yields a single blank glyph.
    ///
    /// # Errors
    /// * `TextTooLong` - `text` has more than `max_text_length` characters
    /// * `StorageExhausted` - the text plus trailing blank does not fit in `N`
    pub fn build(text: &str, max_text_length: usize) -> Result<Self, RenderError> {
        let length = text.chars().count();
        if length > max_text_length {
            return Err(RenderError::TextTooLong {
                length,
                max: max_text_length,
            });
        }

        let required = length + 1;
        if required > N {
            return Err(RenderError::StorageExhausted {
                required,
                capacity: N,
            });
        }

        let mut glyphs = Vec::new();
        for c in text.chars() {
            glyphs
                .push(glyph::lookup(c))
                .map_err(|_| RenderError::StorageExhausted {
                    required,
                    capacity: N,
                })?;
        }
        glyphs
            .push(&Glyph::BLANK)
            .map_err(|_| RenderError::StorageExhausted {
                required,
                capacity: N,
            })?;

        Ok(Self { glyphs })
    }

    /// Returns the glyphs, trailing blank included.
    #[inline]
    pub fn glyphs(&self) -> &[&'static Glyph] {
        &self.glyphs
    }

    /// Number of glyphs, trailing blank included.
    #[inline]
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Always false for a built message; kept for API symmetry with slices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_trailing_blank() {
        let message = Message::<8>::build("HI", 100).unwrap();
        assert_eq!(message.len(), 3);
        assert_eq!(message.glyphs()[0], glyph::lookup('H'));
        assert!(message.glyphs()[2].is_blank());
    }

    #[test]
    fn empty_text_is_one_blank_glyph() {
        let message = Message::<8>::build("", 100).unwrap();
        assert_eq!(message.len(), 1);
        assert!(message.glyphs()[0].is_blank());
    }

    #[test]
    fn rejects_text_over_configured_maximum() {
        let result = Message::<32>::build("HELLO", 4);
        assert_eq!(result.unwrap_err(), RenderError::TextTooLong { length: 5, max: 4 });
    }

    #[test]
    fn rejects_text_over_buffer_capacity() {
        let result = Message::<4>::build("HELLO", 100);
        assert_eq!(
            result.unwrap_err(),
            RenderError::StorageExhausted {
                required: 6,
                capacity: 4,
            }
        );
    }

    #[test]
    fn length_counts_chars_not_bytes() {
        let message = Message::<4>::build("éé", 2).unwrap();
        assert_eq!(message.len(), 3);
    }
}
