//! Adapters from `embedded-hal` 1.0 to the Flipdot traits
//!
//! Lets any board crate that already implements `embedded-hal` drive a
//! panel without a dedicated HAL crate.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin as EhOutputPin;

use crate::delay::Delay;
use crate::gpio::OutputPin;

/// Output line backed by an `embedded-hal` pin
///
/// Tracks the last commanded level itself, since `embedded-hal` only offers
/// readback through `StatefulOutputPin`.
pub struct EmbeddedLine<P> {
    pin: P,
    inverted: bool,
    high: bool,
}

impl<P: EhOutputPin> EmbeddedLine<P> {
    /// Wrap an active-high pin and drive it low
    pub fn new(pin: P) -> Self {
        Self::with_polarity(pin, false)
    }

    /// Wrap a pin, optionally active-low, and drive it to its inactive level
    pub fn with_polarity(pin: P, inverted: bool) -> Self {
        let mut line = Self {
            pin,
            inverted,
            high: false,
        };
        line.set_low();
        line
    }

    /// Release the underlying pin
    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P: EhOutputPin> OutputPin for EmbeddedLine<P> {
    fn set_high(&mut self) {
        self.high = true;
        // Line faults are undetectable on this panel
        let _ = if self.inverted {
            self.pin.set_low()
        } else {
            self.pin.set_high()
        };
    }

    fn set_low(&mut self) {
        self.high = false;
        let _ = if self.inverted {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        };
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}

/// Blocking delay backed by an `embedded-hal` delay provider
pub struct EmbeddedDelay<D> {
    inner: D,
}

impl<D: DelayNs> EmbeddedDelay<D> {
    /// Wrap a delay provider
    pub fn new(inner: D) -> Self {
        Self { inner }
    }

    /// Release the underlying delay provider
    pub fn into_inner(self) -> D {
        self.inner
    }
}

impl<D: DelayNs> Delay for EmbeddedDelay<D> {
    fn delay_us(&mut self, us: u32) {
        self.inner.delay_us(us);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.inner.delay_ms(ms);
    }
}
