//! Busy-wait delay
//!
//! Blocks the core on the embassy time driver. The panel protocol has no
//! await points: a redraw runs to completion once started.

use embassy_time::{block_for, Duration};

use flipdot_hal::Delay;

/// Blocking delay backed by `embassy_time::block_for`
#[derive(Debug, Clone, Copy, Default)]
pub struct BusyWait;

impl Delay for BusyWait {
    fn delay_us(&mut self, us: u32) {
        block_for(Duration::from_micros(us as u64));
    }

    fn delay_ms(&mut self, ms: u32) {
        block_for(Duration::from_millis(ms as u64));
    }
}
