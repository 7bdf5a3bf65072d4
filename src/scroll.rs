//! Vertical scroll window over a composed bitmap.
//!
//! The window starts four rows above the bitmap, so only the first row of the
//! message is visible at the bottom of the grid, and stops once only the last
//! row remains at the top. A bitmap of height `h` therefore yields `h + 4`
//! frames. Frames are a pure function of `(bitmap, offset)`; iteration can be
//! restarted or resumed from any offset.

use crate::compose::{ComposedBitmap, Row};
use crate::config::{GRID_SIZE, NUM_PIXELS};

/// First window offset of every scroll.
pub const FIRST_OFFSET: isize = -(GRID_SIZE as isize - 1);

/// A 5x5 snapshot of a composed bitmap at one window offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollFrame {
    offset: isize,
    rows: [Row; GRID_SIZE],
}

impl ScrollFrame {
    /// Captures the window whose top row sits at `offset`.
    pub fn at(bitmap: &ComposedBitmap<'_>, offset: isize) -> Self {
        let mut rows = [[0.0; GRID_SIZE]; GRID_SIZE];
        for (r, row) in rows.iter_mut().enumerate() {
            *row = bitmap.row(offset + r as isize);
        }
        Self { offset, rows }
    }

    /// Window offset this frame was taken at.
    #[inline]
    pub fn offset(&self) -> isize {
        self.offset
    }

    /// Returns the frame rows, top to bottom.
    #[inline]
    pub fn rows(&self) -> &[Row; GRID_SIZE] {
        &self.rows
    }

    /// Intensity at a logical index (row-major, 0 = top left).
    ///
    /// Returns 0.0 for indices outside the grid.
    pub fn intensity(&self, logical_index: usize) -> f32 {
        if logical_index >= NUM_PIXELS {
            return 0.0;
        }
        self.rows[logical_index / GRID_SIZE][logical_index % GRID_SIZE]
    }

    /// Returns true if every pixel is off.
    pub fn is_blank(&self) -> bool {
        self.rows.iter().flatten().all(|&v| v == 0.0)
    }

    /// Returns true if row `row` has at least one lit pixel.
    pub fn row_is_lit(&self, row: usize) -> bool {
        self.rows
            .get(row)
            .is_some_and(|r| r.iter().any(|&v| v > 0.0))
    }
}

/// Iterator over the scroll frames of a composed bitmap.
///
/// An empty bitmap yields no frames.
#[derive(Debug, Clone)]
pub struct ScrollFrames<'b, 'm> {
    bitmap: &'b ComposedBitmap<'m>,
    next_offset: isize,
}

impl<'b, 'm> ScrollFrames<'b, 'm> {
    /// Starts a scroll at the first offset.
    pub fn new(bitmap: &'b ComposedBitmap<'m>) -> Self {
        Self::starting_at(bitmap, FIRST_OFFSET)
    }

    /// Resumes a scroll at `offset`. Offsets before the first are raised to it.
    pub fn starting_at(bitmap: &'b ComposedBitmap<'m>, offset: isize) -> Self {
        Self {
            bitmap,
            next_offset: offset.max(FIRST_OFFSET),
        }
    }

    /// Offset of the frame the next call to `next` yields.
    #[inline]
    pub fn next_offset(&self) -> isize {
        self.next_offset
    }

    /// Total frames of a full scroll over `bitmap`.
    pub fn total(bitmap: &ComposedBitmap<'_>) -> usize {
        if bitmap.is_empty() {
            0
        } else {
            bitmap.height().saturating_add(GRID_SIZE - 1)
        }
    }

    fn end_offset(&self) -> isize {
        self.bitmap.height() as isize
    }
}

impl Iterator for ScrollFrames<'_, '_> {
    type Item = ScrollFrame;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bitmap.is_empty() || self.next_offset >= self.end_offset() {
            return None;
        }
        let frame = ScrollFrame::at(self.bitmap, self.next_offset);
        self.next_offset += 1;
        Some(frame)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.bitmap.is_empty() {
            0
        } else {
            (self.end_offset() - self.next_offset).max(0) as usize
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ScrollFrames<'_, '_> {}

/// Starts a full scroll over `bitmap`.
#[inline]
pub fn scroll<'b, 'm>(bitmap: &'b ComposedBitmap<'m>) -> ScrollFrames<'b, 'm> {
    ScrollFrames::new(bitmap)
}
