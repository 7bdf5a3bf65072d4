//! The render pipeline: text and colors in, pixel words out.
//!
//! Provides [`MatrixRenderer`], which owns a [`PixelSink`] and a delay
//! provider for the duration of its life and runs each render call start to
//! finish on the caller's thread. Callers must not share a sink between
//! renderers; there is no locking here.

use crate::color::{self, DEMO_PALETTE, RawColor};
use crate::compose::compose;
use crate::config::{GRID_SIZE, MatrixConfig, NUM_PIXELS};
use crate::encoder::{self, PixelWord};
use crate::glyph::Glyph;
use crate::mapping::{self, PHYSICAL_ORDER};
use crate::message::Message;
use crate::mode::DisplayMode;
use crate::scroll::{ScrollFrame, scroll};
use crate::sink::PixelSink;
use crate::types::{RenderError, RenderOutcome};
use embedded_hal::delay::DelayNs;
use palette::Srgb;

/// Default glyph capacity: the default maximum text length plus the trailing blank.
pub const DEFAULT_GLYPH_CAPACITY: usize = crate::config::DEFAULT_MAX_TEXT_LENGTH + 1;

/// Drives a 5x5 pixel matrix through scrolling text and color sequences.
///
/// # Type Parameters
/// * `S` - Pixel sink implementation type
/// * `D` - Delay provider used for frame pacing
/// * `N` - Glyph buffer capacity; bounds message length independently of the
///   configured maximum
pub struct MatrixRenderer<S: PixelSink, D: DelayNs, const N: usize = { DEFAULT_GLYPH_CAPACITY }> {
    sink: S,
    delay: D,
    config: MatrixConfig,
}

impl<S: PixelSink, D: DelayNs, const N: usize> MatrixRenderer<S, D, N> {
    /// Creates a renderer with the default configuration.
    pub fn new(sink: S, delay: D) -> Self {
        Self::with_config(sink, delay, MatrixConfig::default())
    }

    /// Creates a renderer with an explicit configuration.
    pub fn with_config(sink: S, delay: D, config: MatrixConfig) -> Self {
        Self {
            sink,
            delay,
            config,
        }
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &MatrixConfig {
        &self.config
    }

    /// Returns a reference to the sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Returns a mutable reference to the sink.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Consumes the renderer and hands back the sink and delay provider.
    pub fn release(self) -> (S, D) {
        (self.sink, self.delay)
    }

    /// Scrolls `text` upward through the matrix.
    ///
    /// The message enters from the bottom row and leaves past the top, one
    /// row per frame, pausing `frame_delay_ms` after each frame. `abort` is
    /// polled once before every frame; when it returns true the render stops
    /// without writing that frame.
    ///
    /// # Errors
    /// * `TextTooLong` - `text` exceeds the configured maximum. Nothing is written.
    /// * `StorageExhausted` - `text` does not fit the glyph buffer. Nothing is written.
    pub fn render_scroll<A>(
        &mut self,
        text: &str,
        color: RawColor,
        intensity: f32,
        frame_delay_ms: u32,
        mut abort: A,
    ) -> Result<RenderOutcome, RenderError>
    where
        A: FnMut() -> bool,
    {
        let message = match Message::<N>::build(text, self.config.max_text_length) {
            Ok(message) => message,
            Err(err) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("render_scroll rejected: {}", err);
                return Err(err);
            }
        };

        let bitmap = compose(message.glyphs(), self.config.spacing);
        let normalized = color::normalize(color);

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "render_scroll: {} glyphs, {} rows, {} frames",
            message.len(),
            bitmap.height(),
            crate::scroll::ScrollFrames::total(&bitmap)
        );

        let mut frames = 0;
        for frame in scroll(&bitmap) {
            if abort() {
                #[cfg(feature = "defmt")]
                defmt::debug!("render_scroll aborted at offset {}", frame.offset());
                return Ok(RenderOutcome::Aborted { frames });
            }

            self.write_frame(&frame, normalized, intensity);
            frames += 1;
            self.delay.delay_ms(frame_delay_ms);
        }

        Ok(RenderOutcome::Completed { frames })
    }

    /// [`render_scroll`](Self::render_scroll) with the configured default
    /// intensity and frame delay.
    pub fn render_scroll_default<A>(
        &mut self,
        text: &str,
        color: RawColor,
        abort: A,
    ) -> Result<RenderOutcome, RenderError>
    where
        A: FnMut() -> bool,
    {
        let intensity = self.config.default_intensity;
        let delay_ms = self.config.default_frame_delay_ms;
        self.render_scroll(text, color, intensity, delay_ms, abort)
    }

    /// Shows each color on the whole matrix for `step_delay_ms`, then turns
    /// every pixel off.
    ///
    /// Returns the number of colors shown.
    pub fn render_color_cycle<C>(&mut self, colors: C, step_delay_ms: u32) -> RenderOutcome
    where
        C: IntoIterator<Item = RawColor>,
    {
        let mut frames = 0;
        for raw in colors {
            self.fill(raw, 1.0);
            frames += 1;
            self.delay.delay_ms(step_delay_ms);
        }
        self.clear();

        #[cfg(feature = "defmt")]
        defmt::debug!("render_color_cycle: {} colors", frames);

        RenderOutcome::Completed { frames }
    }

    /// Sets a single pixel, addressed by logical index (0-24, row-major from
    /// the top left).
    ///
    /// Out-of-range indices are ignored.
    pub fn set_single_led(&mut self, logical_index: usize, color: RawColor, intensity: f32) {
        let Some(physical) = mapping::physical_index(logical_index) else {
            return;
        };
        let scaled = color::scale(color::normalize(color), 1.0, intensity);
        self.sink.write(physical, encoder::encode(scaled));
    }

    /// Writes one scroll frame in the given color.
    pub fn display_frame(&mut self, frame: &ScrollFrame, color: RawColor, intensity: f32) {
        self.write_frame(frame, color::normalize(color), intensity);
    }

    /// Writes a single glyph, unscrolled, in the given color.
    pub fn display_glyph(&mut self, glyph: &Glyph, color: RawColor, intensity: f32) {
        let normalized = color::normalize(color);
        self.write_pixels(normalized, intensity, |logical| {
            glyph.intensity(logical / GRID_SIZE, logical % GRID_SIZE)
        });
    }

    /// Sets every pixel to one color.
    pub fn fill(&mut self, color: RawColor, intensity: f32) {
        let word = encoder::encode(color::scale(color::normalize(color), 1.0, intensity));
        for slot in 0..NUM_PIXELS {
            self.sink.write(slot, word);
        }
    }

    /// Turns every pixel off.
    pub fn clear(&mut self) {
        for slot in 0..NUM_PIXELS {
            self.sink.write(slot, PixelWord::OFF);
        }
    }

    /// Runs what a mode asks for.
    ///
    /// `Demo` cycles through [`DEMO_PALETTE`]; `Message` scrolls `phrase` with
    /// the configured defaults; `Idle` does nothing.
    pub fn run_mode<A>(
        &mut self,
        mode: DisplayMode,
        phrase: &str,
        color: RawColor,
        abort: A,
    ) -> Result<RenderOutcome, RenderError>
    where
        A: FnMut() -> bool,
    {
        match mode {
            DisplayMode::Idle => Ok(RenderOutcome::Completed { frames: 0 }),
            DisplayMode::Demo => {
                let step_delay_ms = self.config.demo_step_delay_ms;
                Ok(self.render_color_cycle(DEMO_PALETTE, step_delay_ms))
            }
            DisplayMode::Message => self.render_scroll_default(phrase, color, abort),
        }
    }

    fn write_frame(&mut self, frame: &ScrollFrame, color: Srgb, intensity: f32) {
        self.write_pixels(color, intensity, |logical| frame.intensity(logical));
    }

    // Slots are written in ascending order; the mapping is an involution, so
    // PHYSICAL_ORDER[slot] is the logical pixel shown at that slot.
    fn write_pixels<F>(&mut self, color: Srgb, intensity: f32, pixel: F)
    where
        F: Fn(usize) -> f32,
    {
        for (slot, &logical) in PHYSICAL_ORDER.iter().enumerate() {
            let scaled = color::scale(color, pixel(logical), intensity);
            self.sink.write(slot, encoder::encode(scaled));
        }
    }
}
