//! Logical to physical pixel index mapping.
//!
//! The matrix is wired as a serpentine chain, so the order in which pixel
//! words are clocked out differs from the row-major order frames are built
//! in. The mapping flips the whole grid, then flips the columns of rows 1
//! and 3 back.
//!
//! The mapping is its own inverse, which means the same function answers
//! both "which physical slot shows logical pixel `i`" and "which logical
//! pixel belongs in physical slot `p`".

use crate::config::{GRID_SIZE, NUM_PIXELS};

const fn map(logical_index: usize) -> usize {
    let row = (GRID_SIZE - 1) - logical_index / GRID_SIZE;
    let mut col = (GRID_SIZE - 1) - logical_index % GRID_SIZE;
    if row == 1 || row == 3 {
        col = (GRID_SIZE - 1) - col;
    }
    row * GRID_SIZE + col
}

const fn build_table() -> [usize; NUM_PIXELS] {
    let mut table = [0; NUM_PIXELS];
    let mut i = 0;
    while i < NUM_PIXELS {
        table[i] = map(i);
        i += 1;
    }
    table
}

/// Precomputed physical index for every logical index.
pub const PHYSICAL_ORDER: [usize; NUM_PIXELS] = build_table();

/// Maps a logical index (0-24, row-major from the top left) to its physical
/// position in the wiring chain.
///
/// Returns `None` for indices outside the grid.
#[inline]
pub fn physical_index(logical_index: usize) -> Option<usize> {
    PHYSICAL_ORDER.get(logical_index).copied()
}
