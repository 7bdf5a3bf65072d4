//! Shared test infrastructure for glyph-matrix integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use embedded_hal::delay::DelayNs;
use glyph_matrix::{NUM_PIXELS, PixelSink, PixelWord, TimeDuration, TimeInstant};

// ============================================================================
// Mock Time Types
// ============================================================================

/// Mock duration type for testing (wraps milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestDuration(pub u64);

impl TimeDuration for TestDuration {
    fn as_millis(&self) -> u64 {
        self.0
    }

    fn from_millis(millis: u64) -> Self {
        TestDuration(millis)
    }
}

/// Mock instant type for testing
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestInstant(pub u64);

impl TimeInstant for TestInstant {
    type Duration = TestDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        TestDuration(self.0.saturating_sub(earlier.0))
    }
}

// ============================================================================
// Mock Pixel Sink
// ============================================================================

/// Mock sink that records every write in order
pub struct MockSink {
    writes: Vec<(usize, PixelWord)>,
}

impl MockSink {
    pub fn new() -> Self {
        Self { writes: Vec::new() }
    }

    pub fn writes(&self) -> &[(usize, PixelWord)] {
        &self.writes
    }

    /// Forgets everything recorded so far
    pub fn reset(&mut self) {
        self.writes.clear();
    }

    /// Splits the recorded writes into whole frames of 25 words
    pub fn frames(&self) -> Vec<[PixelWord; NUM_PIXELS]> {
        self.writes
            .chunks_exact(NUM_PIXELS)
            .map(|chunk| {
                let mut frame = [PixelWord::OFF; NUM_PIXELS];
                for (slot, (_, word)) in chunk.iter().enumerate() {
                    frame[slot] = *word;
                }
                frame
            })
            .collect()
    }

    /// True if every frame was written with slots 0..25 in ascending order
    pub fn slots_ascending(&self) -> bool {
        self.writes.len() % NUM_PIXELS == 0
            && self
                .writes
                .chunks_exact(NUM_PIXELS)
                .all(|chunk| chunk.iter().enumerate().all(|(i, (slot, _))| i == *slot))
    }
}

impl PixelSink for MockSink {
    fn write(&mut self, physical_index: usize, word: PixelWord) {
        self.writes.push((physical_index, word));
    }
}

// ============================================================================
// Mock Delay
// ============================================================================

/// Mock delay that records requested pauses instead of sleeping
pub struct MockDelay {
    delays_ms: Vec<u32>,
}

impl MockDelay {
    pub fn new() -> Self {
        Self {
            delays_ms: Vec::new(),
        }
    }

    pub fn delays_ms(&self) -> &[u32] {
        &self.delays_ms
    }
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.delays_ms.push(ns / 1_000_000);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.delays_ms.push(ms);
    }
}
