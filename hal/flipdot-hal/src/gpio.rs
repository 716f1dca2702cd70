//! Output line abstraction
//!
//! The panel exposes no feedback signal, so a line write cannot fail from the
//! driver's point of view. Implementations that sit on fallible hardware
//! drop the per-write result.

/// Digital output line
pub trait OutputPin {
    /// Drive the line high (logic 1)
    fn set_high(&mut self);

    /// Drive the line low (logic 0)
    fn set_low(&mut self);

    /// Drive the line to a specific level
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }

    /// Check if the line was last driven high
    fn is_set_high(&self) -> bool;

    /// Check if the line was last driven low
    fn is_set_low(&self) -> bool {
        !self.is_set_high()
    }
}

impl<T: OutputPin + ?Sized> OutputPin for &mut T {
    fn set_high(&mut self) {
        (**self).set_high();
    }

    fn set_low(&mut self) {
        (**self).set_low();
    }

    fn is_set_high(&self) -> bool {
        (**self).is_set_high()
    }
}
