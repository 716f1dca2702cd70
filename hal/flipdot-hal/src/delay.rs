//! Blocking delay abstraction
//!
//! Every wait in the panel protocol is a busy-wait on the calling thread.
//! There is no yielding and no cancellation.

/// Blocking delay with microsecond and millisecond granularity
pub trait Delay {
    /// Block for at least `us` microseconds
    fn delay_us(&mut self, us: u32);

    /// Block for at least `ms` milliseconds
    fn delay_ms(&mut self, ms: u32) {
        for _ in 0..ms {
            self.delay_us(1_000);
        }
    }
}

impl<T: Delay + ?Sized> Delay for &mut T {
    fn delay_us(&mut self, us: u32) {
        (**self).delay_us(us);
    }

    fn delay_ms(&mut self, ms: u32) {
        (**self).delay_ms(ms);
    }
}
