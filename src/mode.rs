//! Display mode selection from debounced button edges.
//!
//! Button edges arrive as plain values (pin plus timestamp) from whatever
//! captures them, interrupt handler or polled input, and are fed to a
//! [`ModeMachine`] owned by the single-threaded main loop. There are no
//! shared mutable flags.

use crate::time::{TimeDuration, TimeInstant};

/// What the matrix is currently asked to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayMode {
    /// Nothing to show. Matrix left as it is.
    #[default]
    Idle,
    /// Cycle through the demo palette.
    Demo,
    /// Scroll the configured message.
    Message,
}

/// Buttons that select a mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    /// Starts the demo.
    A,
    /// Starts the message.
    B,
}

impl Button {
    /// GPIO pin of button A on the reference board.
    pub const A_GPIO: u8 = 5;
    /// GPIO pin of button B on the reference board.
    pub const B_GPIO: u8 = 6;

    /// Maps a GPIO pin number to its button.
    pub fn from_gpio(pin: u8) -> Option<Self> {
        match pin {
            Self::A_GPIO => Some(Button::A),
            Self::B_GPIO => Some(Button::B),
            _ => None,
        }
    }

    /// Mode this button selects.
    pub fn target_mode(self) -> DisplayMode {
        match self {
            Button::A => DisplayMode::Demo,
            Button::B => DisplayMode::Message,
        }
    }
}

/// A change of display mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ModeTransition {
    pub from: DisplayMode,
    pub to: DisplayMode,
}

/// Drops events that follow the previously accepted one too closely.
///
/// The window is shared by every input fed through the same filter.
#[derive(Debug, Clone, Copy)]
pub struct Debouncer<I: TimeInstant> {
    last_event_time: Option<I>,
    window: I::Duration,
}

impl<I: TimeInstant> Debouncer<I> {
    /// Creates a filter with the given window.
    pub fn new(window: I::Duration) -> Self {
        Self {
            last_event_time: None,
            window,
        }
    }

    /// Returns true if an event at `now` should be accepted, and records it
    /// as the new reference time if so. The first event is always accepted.
    pub fn accept(&mut self, now: I) -> bool {
        if let Some(last) = self.last_event_time {
            if now.duration_since(last).as_millis() < self.window.as_millis() {
                return false;
            }
        }
        self.last_event_time = Some(now);
        true
    }

    /// Time of the last accepted event.
    pub fn last_event_time(&self) -> Option<I> {
        self.last_event_time
    }
}

/// Mode state machine fed by falling button edges.
#[derive(Debug, Clone, Copy)]
pub struct ModeMachine<I: TimeInstant> {
    state: DisplayMode,
    debouncer: Debouncer<I>,
}

impl<I: TimeInstant> ModeMachine<I> {
    /// Creates an idle machine with the given debounce window.
    pub fn new(debounce: I::Duration) -> Self {
        Self {
            state: DisplayMode::Idle,
            debouncer: Debouncer::new(debounce),
        }
    }

    /// Creates an idle machine using the debounce window from `config`.
    pub fn from_config(config: &crate::config::MatrixConfig) -> Self {
        Self::new(I::Duration::from_millis(config.debounce_ms))
    }

    /// Handles a falling edge on `pin` at `now`.
    ///
    /// Edges inside the debounce window are dropped. An accepted edge moves
    /// the machine to the button's mode; pressing the button of the active
    /// mode is accepted but yields no transition.
    pub fn handle_edge(&mut self, pin: Button, now: I) -> Option<ModeTransition> {
        if !self.debouncer.accept(now) {
            #[cfg(feature = "defmt")]
            defmt::trace!("edge on {} debounced", pin);
            return None;
        }
        self.transition_to(pin.target_mode())
    }

    /// Returns to `Idle` once the active mode has finished rendering.
    pub fn finish(&mut self) -> Option<ModeTransition> {
        self.transition_to(DisplayMode::Idle)
    }

    /// Current mode.
    pub fn state(&self) -> DisplayMode {
        self.state
    }

    fn transition_to(&mut self, to: DisplayMode) -> Option<ModeTransition> {
        if self.state == to {
            return None;
        }
        let transition = ModeTransition {
            from: self.state,
            to,
        };
        self.state = to;

        #[cfg(feature = "defmt")]
        defmt::debug!("mode {} -> {}", transition.from, transition.to);

        Some(transition)
    }
}
