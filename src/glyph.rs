//! 5x5 glyph bitmaps and the character lookup table.
//!
//! The supported character set is data, not code: [`FONT`] maps each
//! upper-case letter plus a handful of symbols to its bitmap, and every other
//! character resolves to the blank glyph.

use crate::color::clamp_unit;
use crate::config::GRID_SIZE;

/// An immutable 5x5 intensity bitmap for one character.
///
/// Intensities are in the range 0.0-1.0. Row 0 is the top of the glyph and
/// column 0 its left edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glyph {
    rows: [[f32; GRID_SIZE]; GRID_SIZE],
}

impl Glyph {
    /// The all-off glyph. Used for spaces, unsupported characters and the
    /// trailing separator of every message.
    pub const BLANK: Glyph = Glyph {
        rows: [[0.0; GRID_SIZE]; GRID_SIZE],
    };

    /// Creates a glyph from explicit per-pixel intensities.
    ///
    /// Values are clamped to 0.0-1.0; NaN becomes 0.0.
    pub fn from_intensities(rows: [[f32; GRID_SIZE]; GRID_SIZE]) -> Self {
        let mut clamped = rows;
        for row in clamped.iter_mut() {
            for value in row.iter_mut() {
                *value = clamp_unit(*value);
            }
        }
        Self { rows: clamped }
    }

    /// Creates a full-intensity glyph from one bit mask per row.
    ///
    /// Bit 4 is the leftmost column, bit 0 the rightmost.
    pub const fn from_bits(bits: [u8; GRID_SIZE]) -> Self {
        let mut rows = [[0.0; GRID_SIZE]; GRID_SIZE];
        let mut row = 0;
        while row < GRID_SIZE {
            let mut col = 0;
            while col < GRID_SIZE {
                if bits[row] & (1 << (GRID_SIZE - 1 - col)) != 0 {
                    rows[row][col] = 1.0;
                }
                col += 1;
            }
            row += 1;
        }
        Self { rows }
    }

    /// Returns one row of the glyph, or `None` past the bottom edge.
    #[inline]
    pub fn row(&self, row: usize) -> Option<&[f32; GRID_SIZE]> {
        self.rows.get(row)
    }

    /// Returns the intensity at `(row, col)`; 0.0 outside the grid.
    pub fn intensity(&self, row: usize, col: usize) -> f32 {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .unwrap_or(0.0)
    }

    /// Returns all rows.
    #[inline]
    pub fn rows(&self) -> &[[f32; GRID_SIZE]; GRID_SIZE] {
        &self.rows
    }

    /// Returns true if every pixel is off.
    pub fn is_blank(&self) -> bool {
        self.rows.iter().flatten().all(|&v| v == 0.0)
    }
}

impl Default for Glyph {
    fn default() -> Self {
        Glyph::BLANK
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Glyph {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Glyph[");
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                defmt::write!(f, " ");
            }
            for value in row {
                defmt::write!(f, "{}", if *value > 0.0 { "#" } else { "." });
            }
        }
        defmt::write!(f, "]");
    }
}

static BLANK: Glyph = Glyph::BLANK;

/// Character-to-glyph table. Keys are upper case.
pub static FONT: [(char, Glyph); 29] = [
    ('A', Glyph::from_bits([0b01110, 0b10001, 0b11111, 0b10001, 0b10001])),
    ('B', Glyph::from_bits([0b11110, 0b10001, 0b11110, 0b10001, 0b11110])),
    ('C', Glyph::from_bits([0b01111, 0b10000, 0b10000, 0b10000, 0b01111])),
    ('D', Glyph::from_bits([0b11110, 0b10001, 0b10001, 0b10001, 0b11110])),
    ('E', Glyph::from_bits([0b11111, 0b10000, 0b11110, 0b10000, 0b11111])),
    ('F', Glyph::from_bits([0b11111, 0b10000, 0b11110, 0b10000, 0b10000])),
    ('G', Glyph::from_bits([0b01111, 0b10000, 0b10011, 0b10001, 0b01111])),
    ('H', Glyph::from_bits([0b10001, 0b10001, 0b11111, 0b10001, 0b10001])),
    ('I', Glyph::from_bits([0b11111, 0b00100, 0b00100, 0b00100, 0b11111])),
    ('J', Glyph::from_bits([0b00111, 0b00010, 0b00010, 0b10010, 0b01100])),
    ('K', Glyph::from_bits([0b10010, 0b10100, 0b11000, 0b10100, 0b10010])),
    ('L', Glyph::from_bits([0b10000, 0b10000, 0b10000, 0b10000, 0b11111])),
    ('M', Glyph::from_bits([0b10001, 0b11011, 0b10101, 0b10001, 0b10001])),
    ('N', Glyph::from_bits([0b10001, 0b11001, 0b10101, 0b10011, 0b10001])),
    ('O', Glyph::from_bits([0b01110, 0b10001, 0b10001, 0b10001, 0b01110])),
    ('P', Glyph::from_bits([0b11110, 0b10001, 0b11110, 0b10000, 0b10000])),
    ('Q', Glyph::from_bits([0b01110, 0b10001, 0b10101, 0b10010, 0b01101])),
    ('R', Glyph::from_bits([0b11110, 0b10001, 0b11110, 0b10100, 0b10010])),
    ('S', Glyph::from_bits([0b01111, 0b10000, 0b01110, 0b00001, 0b11110])),
    ('T', Glyph::from_bits([0b11111, 0b00100, 0b00100, 0b00100, 0b00100])),
    ('U', Glyph::from_bits([0b10001, 0b10001, 0b10001, 0b10001, 0b01110])),
    ('V', Glyph::from_bits([0b10001, 0b10001, 0b10001, 0b01010, 0b00100])),
    ('W', Glyph::from_bits([0b10001, 0b10001, 0b10101, 0b11011, 0b10001])),
    ('X', Glyph::from_bits([0b10001, 0b01010, 0b00100, 0b01010, 0b10001])),
    ('Y', Glyph::from_bits([0b10001, 0b01010, 0b00100, 0b00100, 0b00100])),
    ('Z', Glyph::from_bits([0b11111, 0b00010, 0b00100, 0b01000, 0b11111])),
    ('!', Glyph::from_bits([0b00100, 0b00100, 0b00100, 0b00000, 0b00100])),
    ('.', Glyph::from_bits([0b00000, 0b00000, 0b00000, 0b00000, 0b00100])),
    (' ', Glyph::BLANK),
];

/// Looks up the glyph for a character.
///
/// Lower-case ASCII letters fold to upper case. Anything without an entry in
/// [`FONT`] yields [`Glyph::BLANK`]; lookup never fails.
pub fn lookup(c: char) -> &'static Glyph {
    let key = c.to_ascii_uppercase();
    FONT.iter()
        .find(|(k, _)| *k == key)
        .map(|(_, glyph)| glyph)
        .unwrap_or(&BLANK)
}

/// Returns true if the character has a dedicated entry (after case folding).
pub fn is_supported(c: char) -> bool {
    let key = c.to_ascii_uppercase();
    FONT.iter().any(|(k, _)| *k == key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_folds_case() {
        assert_eq!(lookup('a'), lookup('A'));
        assert_eq!(lookup('z'), lookup('Z'));
    }

    #[test]
    fn unsupported_characters_fall_back_to_blank() {
        assert!(lookup('#').is_blank());
        assert!(lookup('7').is_blank());
        assert!(lookup('é').is_blank());
        assert_eq!(lookup('#'), lookup(' '));
    }

    #[test]
    fn every_letter_has_a_lit_glyph() {
        for c in 'A'..='Z' {
            assert!(is_supported(c));
            assert!(!lookup(c).is_blank(), "glyph for {} is blank", c);
        }
    }

    #[test]
    fn from_bits_maps_msb_to_left_column() {
        let glyph = Glyph::from_bits([0b10000, 0, 0, 0, 0b00001]);
        assert_eq!(glyph.intensity(0, 0), 1.0);
        assert_eq!(glyph.intensity(0, 4), 0.0);
        assert_eq!(glyph.intensity(4, 4), 1.0);
        assert_eq!(glyph.intensity(9, 9), 0.0);
    }

    #[test]
    fn from_intensities_clamps() {
        let mut rows = [[0.0; GRID_SIZE]; GRID_SIZE];
        rows[0][0] = 2.0;
        rows[1][1] = -1.0;
        let glyph = Glyph::from_intensities(rows);
        assert_eq!(glyph.intensity(0, 0), 1.0);
        assert_eq!(glyph.intensity(1, 1), 0.0);
    }

    #[test]
    fn from_intensities_turns_nan_off() {
        let mut rows = [[0.5; GRID_SIZE]; GRID_SIZE];
        rows[2][3] = f32::NAN;
        let glyph = Glyph::from_intensities(rows);
        assert_eq!(glyph.intensity(2, 3), 0.0);
        assert!(glyph.rows().iter().flatten().all(|v| (0.0..=1.0).contains(v)));
    }
}
