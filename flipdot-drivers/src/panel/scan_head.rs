//! Scan head position tracking
//!
//! The head is a pair of shift registers: a row step moves one dot down the
//! current column, a column step moves to the next column and re-homes the
//! row. Neither reports back, so the position here is what the head is
//! believed to be at. It is unknown until the first reset.

use flipdot_core::{FlipdotError, Geometry, Position};
use flipdot_hal::{Delay, OutputPin};

use super::pulse;

/// Steps issued while seeking a dot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SeekSteps {
    pub columns: u32,
    pub rows: u32,
}

/// Scan head driver
pub struct ScanHead<P> {
    column: P,
    row: P,
    reset: P,
    geometry: Geometry,
    step_hold_us: u32,
    position: Option<Position>,
}

impl<P: OutputPin> ScanHead<P> {
    /// Create a scan head driver and drive its lines low
    ///
    /// The head position stays unknown until [`ScanHead::reset`].
    pub fn new(
        mut column: P,
        mut row: P,
        mut reset: P,
        geometry: Geometry,
        step_hold_us: u32,
    ) -> Self {
        column.set_low();
        row.set_low();
        reset.set_low();

        Self {
            column,
            row,
            reset,
            geometry,
            step_hold_us,
            position: None,
        }
    }

    /// Believed head position, `None` before the first reset
    pub fn position(&self) -> Option<Position> {
        self.position
    }

    /// Check if the head has been reset since construction
    pub fn is_homed(&self) -> bool {
        self.position.is_some()
    }

    /// Return the head to (0, 0)
    pub fn reset(&mut self) {
        self.reset.set_high();
        self.reset.set_low();
        self.position = Some(Position::ORIGIN);
    }

    /// Advance one column; the row returns to 0
    pub fn step_column<D: Delay>(&mut self, delay: &mut D) {
        let width = self.geometry.width;
        self.position = self
            .position
            .map(|p| Position::new((p.x + 1) % width, 0));
        pulse(&mut self.column, delay, self.step_hold_us);
    }

    /// Advance one row within the current column
    pub fn step_row<D: Delay>(&mut self, delay: &mut D) {
        let height = self.geometry.height;
        self.position = self
            .position
            .map(|p| Position::new(p.x, (p.y + 1) % height));
        pulse(&mut self.row, delay, self.step_hold_us);
    }

    /// Step forward until the head addresses `target`
    ///
    /// Columns first, since a column step re-homes the row. Both axes wrap,
    /// so reaching a dot behind the head costs a trip around the panel.
    /// An unhomed head is reset first. Out-of-range targets are rejected
    /// before any line moves.
    pub fn seek<D: Delay>(
        &mut self,
        target: Position,
        delay: &mut D,
    ) -> Result<SeekSteps, FlipdotError> {
        if !self.geometry.contains(target.x, target.y) {
            return Err(FlipdotError::OutOfRange {
                x: target.x,
                y: target.y,
            });
        }

        let mut position = match self.position {
            Some(position) => position,
            None => {
                self.reset();
                Position::ORIGIN
            }
        };

        let mut steps = SeekSteps::default();
        while position.x != target.x {
            self.step_column(delay);
            position = Position::new((position.x + 1) % self.geometry.width, 0);
            steps.columns += 1;
        }
        while position.y != target.y {
            self.step_row(delay);
            position.y = (position.y + 1) % self.geometry.height;
            steps.rows += 1;
        }

        Ok(steps)
    }

    /// Release the column, row and reset lines
    pub fn release(self) -> (P, P, P) {
        (self.column, self.row, self.reset)
    }
}
