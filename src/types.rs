//! Error and outcome types shared by the render entry points.

/// Reasons a render request is refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RenderError {
    /// Text is longer than the configured maximum.
    ///
    /// Reported before any buffer is filled or any pixel is written.
    TextTooLong {
        /// Length of the rejected text, in characters.
        length: usize,
        /// Maximum accepted length.
        max: usize,
    },

    /// The glyph buffer cannot hold the message.
    StorageExhausted {
        /// Glyph slots the message needs, trailing blank included.
        required: usize,
        /// Glyph slots available.
        capacity: usize,
    },
}

impl core::fmt::Display for RenderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            RenderError::TextTooLong { length, max } => {
                write!(f, "text length {} exceeds maximum of {}", length, max)
            }
            RenderError::StorageExhausted { required, capacity } => {
                write!(
                    f,
                    "message needs {} glyph slots but only {} are available",
                    required, capacity
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for RenderError {}

/// How a render call ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RenderOutcome {
    /// Every frame was displayed.
    Completed {
        /// Frames written to the sink.
        frames: usize,
    },

    /// The abort predicate fired before the animation finished.
    Aborted {
        /// Frames written to the sink before the abort.
        frames: usize,
    },
}

impl RenderOutcome {
    /// Number of frames written to the sink.
    pub fn frames(&self) -> usize {
        match self {
            RenderOutcome::Completed { frames } | RenderOutcome::Aborted { frames } => *frames,
        }
    }

    /// Returns true if the render ran to the end.
    pub fn is_completed(&self) -> bool {
        matches!(self, RenderOutcome::Completed { .. })
    }
}
