//! Flip-dot display driver
//!
//! Owns the scan head, the commit lines, the delay and two frame buffers:
//! the client-writable `current` buffer and the `committed` buffer that
//! mirrors what the panel last showed. A redraw walks the whole panel in
//! scan order but only pulses dots whose bit differs between the two.
//!
//! # Usage
//!
//! ```ignore
//! let mut display = FlipDotDisplay::new(lines, delay, &PanelConfig::default())?;
//! display.full_clear();
//!
//! loop {
//!     display.clear_all();
//!     display.set_pixel(3, 4, true)?;
//!     display.redraw();
//! }
//! ```

use flipdot_core::config::PanelConfig;
use flipdot_core::traits::{Canvas, FlipDotPanel, FrameStats};
use flipdot_core::{Advance, FlipdotError, FrameBuffer, Geometry, Position, PANEL_BUFFER_BYTES};
use flipdot_hal::{Delay, OutputPin};

use super::{CommitPulse, ControlLines, ScanHead};

/// Driver for one physical panel
///
/// `N` is the byte capacity of each frame buffer and must hold
/// `width * height` bits.
pub struct FlipDotDisplay<P, D, const N: usize = PANEL_BUFFER_BYTES> {
    head: ScanHead<P>,
    coil: CommitPulse<P>,
    delay: D,
    current: FrameBuffer<N>,
    committed: FrameBuffer<N>,
}

impl<P: OutputPin, D: Delay, const N: usize> FlipDotDisplay<P, D, N> {
    /// Create a driver for the configured panel
    ///
    /// All control lines are driven low. The panel itself is not touched:
    /// its dots keep whatever state they had, so call
    /// [`FlipDotPanel::full_clear`] before the first redraw.
    pub fn new(
        lines: ControlLines<P>,
        delay: D,
        config: &PanelConfig,
    ) -> Result<Self, FlipdotError> {
        config.validate()?;

        let current = FrameBuffer::new(config.geometry)?;
        let committed = FrameBuffer::new(config.geometry)?;

        let ControlLines {
            column,
            row,
            polarity,
            commit,
            reset,
        } = lines;

        Ok(Self {
            head: ScanHead::new(column, row, reset, config.geometry, config.timing.step_hold_us),
            coil: CommitPulse::new(polarity, commit, config.timing.commit_hold_us),
            delay,
            current,
            committed,
        })
    }

    /// Scan head state
    pub fn head(&self) -> &ScanHead<P> {
        &self.head
    }

    /// Client-writable buffer
    pub fn current(&self) -> &FrameBuffer<N> {
        &self.current
    }

    /// What the panel showed after the last redraw
    pub fn committed(&self) -> &FrameBuffer<N> {
        &self.committed
    }

    pub fn delay(&self) -> &D {
        &self.delay
    }

    /// Hand back the control lines and delay
    pub fn release(self) -> (ControlLines<P>, D) {
        let (column, row, reset) = self.head.release();
        let (polarity, commit) = self.coil.release();
        (
            ControlLines {
                column,
                row,
                polarity,
                commit,
                reset,
            },
            self.delay,
        )
    }
}

/// Move the head to the next dot of the scan
fn advance<P: OutputPin, D: Delay>(
    head: &mut ScanHead<P>,
    delay: &mut D,
    step: Advance,
    stats: &mut FrameStats,
) {
    match step {
        Advance::Row => {
            head.step_row(delay);
            stats.row_steps += 1;
        }
        Advance::Column => {
            head.step_column(delay);
            stats.column_steps += 1;
        }
    }
}

impl<P: OutputPin, D: Delay, const N: usize> Canvas for FlipDotDisplay<P, D, N> {
    fn geometry(&self) -> Geometry {
        self.current.geometry()
    }

    fn set_pixel(&mut self, x: u16, y: u16, on: bool) -> Result<(), FlipdotError> {
        self.current.set_pixel(x, y, on)
    }

    fn get_pixel(&self, x: u16, y: u16) -> Result<bool, FlipdotError> {
        self.current.get_pixel(x, y)
    }

    fn clear_all(&mut self) {
        self.current.clear_all();
    }
}

impl<P: OutputPin, D: Delay, const N: usize> FlipDotPanel for FlipDotDisplay<P, D, N> {
    fn redraw(&mut self) -> FrameStats {
        let mut stats = FrameStats::default();
        self.head.reset();

        for dot in self.current.diff(&self.committed) {
            if dot.changed() {
                self.coil.commit(dot.current, &mut self.delay);
                stats.commits += 1;
            }
            // The head advances whether or not the dot was pulsed
            advance(&mut self.head, &mut self.delay, dot.cell.advance, &mut stats);
        }

        self.committed.copy_from(&self.current);

        #[cfg(feature = "defmt")]
        defmt::trace!(
            "redraw: {} commits, {} steps",
            stats.commits,
            stats.steps()
        );

        stats
    }

    fn full_clear(&mut self) -> FrameStats {
        let mut stats = FrameStats::default();
        self.head.reset();
        self.coil.set_polarity(false);

        for cell in self.current.geometry().scan() {
            self.coil.commit(false, &mut self.delay);
            stats.commits += 1;
            advance(&mut self.head, &mut self.delay, cell.advance, &mut stats);
        }

        // The panel is now known to be blank
        self.committed.clear_all();

        #[cfg(feature = "defmt")]
        defmt::debug!("full clear: {} dots pulsed off", stats.commits);

        stats
    }

    fn addressed_write(&mut self, x: u16, y: u16, on: bool) -> Result<(), FlipdotError> {
        let _steps = self.head.seek(Position::new(x, y), &mut self.delay)?;
        self.coil.commit(on, &mut self.delay);

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "addressed write ({}, {}) = {} after {} column / {} row steps",
            x,
            y,
            on,
            _steps.columns,
            _steps.rows
        );

        Ok(())
    }
}
