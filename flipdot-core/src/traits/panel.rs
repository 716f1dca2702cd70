//! Panel protocol trait

use crate::error::FlipdotError;
use crate::traits::Canvas;

/// Pulses issued by one panel operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FrameStats {
    /// Coil commit pulses (dots physically flipped)
    pub commits: u32,
    /// Row step pulses
    pub row_steps: u32,
    /// Column step pulses
    pub column_steps: u32,
}

impl FrameStats {
    /// Total head steps
    pub fn steps(&self) -> u32 {
        self.row_steps + self.column_steps
    }
}

/// A physical flip-dot panel
///
/// Every operation blocks until its last pulse completes and leaves the scan
/// head at a known position.
pub trait FlipDotPanel: Canvas {
    /// Push the canvas to the panel, pulsing only dots that changed since the
    /// previous redraw
    fn redraw(&mut self) -> FrameStats;

    /// Pulse every dot off regardless of buffer contents
    fn full_clear(&mut self) -> FrameStats;

    /// Flip a single dot directly, bypassing the frame buffers
    fn addressed_write(&mut self, x: u16, y: u16, on: bool) -> Result<(), FlipdotError>;
}
