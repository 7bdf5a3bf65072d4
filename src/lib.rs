#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`Glyph`**: A 5x5 intensity bitmap for one character, looked up with `glyph::lookup`
//! - **`Message`**: The glyph sequence for one text, always ending in a blank glyph
//! - **`ComposedBitmap`**: A message's glyphs stacked vertically with blank rows between them
//! - **`ScrollFrames`**: The 5x5 windows that scroll a composed bitmap through the matrix
//! - **`RawColor`**: 0-255 channel input, normalized to `Srgb<f32>` before use
//! - **`PixelWord`**: A color packed in the G|R|B order the pixel chain expects
//! - **`PixelSink`**: Trait to implement for your pixel transmission hardware
//! - **`MatrixRenderer`**: Runs scroll, color cycle and single-pixel operations against a sink
//! - **`ModeMachine`**: Debounced button-driven selection between idle, demo and message modes
//!
//! Frames are built in logical row-major order (index 0 at the top left) and
//! written to the sink in physical wiring order; see [`mapping`].

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

pub mod color;
pub mod compose;
pub mod config;
pub mod encoder;
pub mod glyph;
pub mod mapping;
pub mod message;
pub mod mode;
pub mod renderer;
pub mod scroll;
pub mod sink;
pub mod time;
pub mod types;

pub use color::{DEMO_PALETTE, RawColor, normalize, scale};
pub use compose::{ComposedBitmap, compose};
pub use config::{GRID_SIZE, MAX_SPACING, MatrixConfig, NUM_PIXELS};
pub use encoder::{PixelWord, encode};
pub use glyph::{Glyph, lookup};
pub use mapping::physical_index;
pub use message::Message;
pub use mode::{Button, Debouncer, DisplayMode, ModeMachine, ModeTransition};
pub use renderer::MatrixRenderer;
pub use scroll::{ScrollFrame, ScrollFrames, scroll};
pub use sink::PixelSink;
pub use time::{TimeDuration, TimeInstant};
pub use types::{RenderError, RenderOutcome};

pub const COLOR_OFF: Srgb = Srgb::new(0.0, 0.0, 0.0);
