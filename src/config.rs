//! Matrix geometry and runtime configuration.

/// Width and height of the LED grid.
pub const GRID_SIZE: usize = 5;

/// Number of addressable pixels.
pub const NUM_PIXELS: usize = GRID_SIZE * GRID_SIZE;

/// Default maximum number of characters in a message.
pub const DEFAULT_MAX_TEXT_LENGTH: usize = 100;

/// Default number of blank rows between glyphs.
pub const DEFAULT_SPACING: usize = 1;

/// Largest accepted number of blank rows between glyphs.
pub const MAX_SPACING: usize = GRID_SIZE;

/// Default overall intensity applied to scrolled text.
pub const DEFAULT_INTENSITY: f32 = 0.1;

/// Default pause between scroll frames, in milliseconds.
pub const DEFAULT_FRAME_DELAY_MS: u32 = 150;

/// Default minimum time between accepted button edges, in milliseconds.
pub const DEFAULT_DEBOUNCE_MS: u64 = 400;

/// Default pause between colors of the demo cycle, in milliseconds.
pub const DEFAULT_DEMO_STEP_DELAY_MS: u32 = 500;

/// Runtime configuration for a [`MatrixRenderer`](crate::MatrixRenderer)
/// and its [`ModeMachine`](crate::ModeMachine).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MatrixConfig {
    /// Longest message accepted by `render_scroll`, in characters.
    pub max_text_length: usize,
    /// Blank rows between consecutive glyphs of a composed message.
    /// Values above [`MAX_SPACING`] are treated as `MAX_SPACING`.
    pub spacing: usize,
    /// Overall intensity used when a mode runs with defaults.
    pub default_intensity: f32,
    /// Scroll frame delay used when a mode runs with defaults.
    pub default_frame_delay_ms: u32,
    /// Debounce window shared by all buttons.
    pub debounce_ms: u64,
    /// Step delay of the demo color cycle.
    pub demo_step_delay_ms: u32,
}

impl MatrixConfig {
    /// Creates a configuration holding the default values.
    pub const fn new() -> Self {
        Self {
            max_text_length: DEFAULT_MAX_TEXT_LENGTH,
            spacing: DEFAULT_SPACING,
            default_intensity: DEFAULT_INTENSITY,
            default_frame_delay_ms: DEFAULT_FRAME_DELAY_MS,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            demo_step_delay_ms: DEFAULT_DEMO_STEP_DELAY_MS,
        }
    }

    /// Sets the maximum message length.
    pub const fn with_max_text_length(mut self, max_text_length: usize) -> Self {
        self.max_text_length = max_text_length;
        self
    }

    /// Sets the inter-glyph spacing. Clamped to [`MAX_SPACING`].
    pub const fn with_spacing(mut self, spacing: usize) -> Self {
        self.spacing = if spacing > MAX_SPACING {
            MAX_SPACING
        } else {
            spacing
        };
        self
    }

    /// Sets the default intensity. Clamped to 0.0-1.0.
    pub fn with_default_intensity(mut self, intensity: f32) -> Self {
        self.default_intensity = intensity.clamp(0.0, 1.0);
        self
    }

    /// Sets the default scroll frame delay.
    pub const fn with_default_frame_delay_ms(mut self, delay_ms: u32) -> Self {
        self.default_frame_delay_ms = delay_ms;
        self
    }

    /// Sets the debounce window.
    pub const fn with_debounce_ms(mut self, debounce_ms: u64) -> Self {
        self.debounce_ms = debounce_ms;
        self
    }

    /// Sets the demo color cycle step delay.
    pub const fn with_demo_step_delay_ms(mut self, delay_ms: u32) -> Self {
        self.demo_step_delay_ms = delay_ms;
        self
    }
}

impl Default for MatrixConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_constants() {
        let config = MatrixConfig::default();
        assert_eq!(config.max_text_length, 100);
        assert_eq!(config.spacing, 1);
        assert_eq!(config.default_frame_delay_ms, 150);
        assert_eq!(config.debounce_ms, 400);
    }

    #[test]
    fn default_intensity_setter_clamps() {
        let config = MatrixConfig::new().with_default_intensity(3.0);
        assert_eq!(config.default_intensity, 1.0);
    }

    #[test]
    fn spacing_setter_clamps() {
        assert_eq!(MatrixConfig::new().with_spacing(3).spacing, 3);
        assert_eq!(MatrixConfig::new().with_spacing(usize::MAX).spacing, MAX_SPACING);
    }
}
