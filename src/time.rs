//! Time abstraction traits for platform-agnostic timing.
//!
//! Only the button debounce filter needs a clock; frame pacing goes through
//! [`embedded_hal::delay::DelayNs`] instead.

/// Trait abstraction for duration types.
pub trait TimeDuration: Copy + PartialEq + core::fmt::Debug {
    /// Converts duration to milliseconds.
    fn as_millis(&self) -> u64;

    /// Creates duration from milliseconds.
    fn from_millis(millis: u64) -> Self;
}

/// Trait abstraction for instant types.
pub trait TimeInstant: Copy {
    /// Duration type for this instant.
    type Duration: TimeDuration;

    /// Calculates duration since an earlier instant.
    ///
    /// Implementations should saturate to zero if `earlier` is actually later.
    fn duration_since(&self, earlier: Self) -> Self::Duration;
}
