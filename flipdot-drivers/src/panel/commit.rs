//! Coil commit pulse
//!
//! The only operation that physically flips a dot. The polarity line selects
//! set or unset, then the commit line energizes the addressed dot's coil.
//! The hold time is the coil energize time; shorter pulses may leave the dot
//! unflipped, and nothing reports that it happened.

use flipdot_hal::{Delay, OutputPin};

use super::pulse;

/// Polarity and commit lines
pub struct CommitPulse<P> {
    polarity: P,
    commit: P,
    hold_us: u32,
}

impl<P: OutputPin> CommitPulse<P> {
    /// Create the commit driver and drive both lines low
    pub fn new(mut polarity: P, mut commit: P, hold_us: u32) -> Self {
        polarity.set_low();
        commit.set_low();

        Self {
            polarity,
            commit,
            hold_us,
        }
    }

    /// Coil energize time in microseconds
    pub fn hold_us(&self) -> u32 {
        self.hold_us
    }

    /// Drive the polarity line without pulsing
    pub fn set_polarity(&mut self, on: bool) {
        self.polarity.set_state(on);
    }

    /// Flip the addressed dot to `on`
    pub fn commit<D: Delay>(&mut self, on: bool, delay: &mut D) {
        self.polarity.set_state(on);
        pulse(&mut self.commit, delay, self.hold_us);
    }

    /// Release the polarity and commit lines
    pub fn release(self) -> (P, P) {
        (self.polarity, self.commit)
    }
}
