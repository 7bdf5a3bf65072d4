//! Vertical concatenation of glyphs into one tall bitmap.

use crate::config::{GRID_SIZE, MAX_SPACING};
use crate::glyph::Glyph;

/// One row of a composed bitmap.
pub type Row = [f32; GRID_SIZE];

const BLANK_ROW: Row = [0.0; GRID_SIZE];

/// A message's glyphs stacked top to bottom, `spacing` blank rows apart.
///
/// The bitmap borrows the glyph slice rather than copying it; row `r` is
/// resolved to its glyph band on access. For `N` glyphs the height is
/// `N * (5 + spacing) - spacing`, so no gap follows the last glyph.
#[derive(Debug, Clone, Copy)]
pub struct ComposedBitmap<'m> {
    glyphs: &'m [&'static Glyph],
    spacing: usize,
    height: usize,
}

impl<'m> ComposedBitmap<'m> {
    /// Height in rows. Zero only for an empty glyph list.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns true if there is nothing to render.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.height == 0
    }

    /// Blank rows between consecutive glyphs.
    #[inline]
    pub fn spacing(&self) -> usize {
        self.spacing
    }

    /// Returns row `row`. Gap rows and rows outside `[0, height)` are all off.
    pub fn row(&self, row: isize) -> Row {
        if row < 0 || row as usize >= self.height {
            return BLANK_ROW;
        }
        let row = row as usize;
        let band = GRID_SIZE + self.spacing;
        let within = row % band;
        if within >= GRID_SIZE {
            return BLANK_ROW;
        }
        self.glyphs
            .get(row / band)
            .and_then(|glyph| glyph.row(within))
            .copied()
            .unwrap_or(BLANK_ROW)
    }

    /// Iterates over all rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = Row> + '_ {
        (0..self.height as isize).map(move |r| self.row(r))
    }
}

/// Stacks `glyphs` vertically with `spacing` blank rows between them.
///
/// `spacing` is clamped to [`MAX_SPACING`]. An empty glyph list composes to
/// an empty bitmap (height 0) instead of the negative height the formula
/// would give.
pub fn compose<'m>(glyphs: &'m [&'static Glyph], spacing: usize) -> ComposedBitmap<'m> {
    let spacing = spacing.min(MAX_SPACING);
    if glyphs.is_empty() {
        return ComposedBitmap {
            glyphs,
            spacing,
            height: 0,
        };
    }

    let height = glyphs
        .len()
        .saturating_mul(GRID_SIZE + spacing)
        .saturating_sub(spacing);
    ComposedBitmap {
        glyphs,
        spacing,
        height,
    }
}
