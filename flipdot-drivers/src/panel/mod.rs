//! Panel control
//!
//! The panel has no random access: a shared scan head is advanced one row or
//! one column at a time, and a long commit pulse flips whichever dot it
//! currently addresses to the polarity line's level.
//!
//! - [`ScanHead`]: column step, row step, reset
//! - [`CommitPulse`]: polarity + coil pulse
//! - [`FlipDotDisplay`]: frame buffers and the panel protocol

pub mod commit;
pub mod display;
pub mod scan_head;

pub use commit::CommitPulse;
pub use display::FlipDotDisplay;
pub use scan_head::{ScanHead, SeekSteps};

pub use flipdot_hal::ControlLines;

use flipdot_hal::{Delay, OutputPin};

/// Drive a line high for `hold_us`, then low
fn pulse<P: OutputPin, D: Delay>(line: &mut P, delay: &mut D, hold_us: u32) {
    line.set_high();
    delay.delay_us(hold_us);
    line.set_low();
}
