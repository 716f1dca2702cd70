//! Software-simulated panel
//!
//! A [`PanelModel`] stands in for the physical panel. It watches the five
//! control lines through [`SimLine`]s and reacts to rising edges the way the
//! hardware does, so tests can check the dots the panel would really show
//! instead of trusting the driver's own bookkeeping.
//!
//! ```ignore
//! let model = RefCell::new(PanelModel::<64>::new(Geometry::PANEL_32X16)?);
//! let mut display = FlipDotDisplay::new(sim::lines(&model), SimDelay::default(), &config)?;
//! display.redraw();
//! assert_eq!(model.borrow().dots(), display.committed());
//! ```

use core::cell::RefCell;

use heapless::HistoryBuffer;

use flipdot_core::traits::FrameStats;
use flipdot_core::{FlipdotError, FrameBuffer, Geometry, Position, PANEL_BUFFER_BYTES};
use flipdot_hal::{Delay, OutputPin};

use crate::panel::ControlLines;

/// Commit pulses remembered by the model
pub const HISTORY_LEN: usize = 64;

/// Panel control line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Line {
    Column,
    Row,
    Polarity,
    Commit,
    Reset,
}

impl Line {
    fn slot(self) -> usize {
        match self {
            Line::Column => 0,
            Line::Row => 1,
            Line::Polarity => 2,
            Line::Commit => 3,
            Line::Reset => 4,
        }
    }
}

/// A dot flipped by a commit pulse
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CommitRecord {
    pub x: u16,
    pub y: u16,
    pub on: bool,
}

/// Physical panel state as seen from its control lines
pub struct PanelModel<const N: usize = PANEL_BUFFER_BYTES> {
    geometry: Geometry,
    head: Position,
    levels: [bool; 5],
    dots: FrameBuffer<N>,
    stats: FrameStats,
    resets: u32,
    history: HistoryBuffer<CommitRecord, HISTORY_LEN>,
}

impl<const N: usize> PanelModel<N> {
    /// Blank panel with the head at the origin
    pub fn new(geometry: Geometry) -> Result<Self, FlipdotError> {
        Ok(Self {
            geometry,
            head: Position::ORIGIN,
            levels: [false; 5],
            dots: FrameBuffer::new(geometry)?,
            stats: FrameStats::default(),
            resets: 0,
            history: HistoryBuffer::new(),
        })
    }

    /// Start with the head somewhere other than the origin
    pub fn with_head(mut self, head: Position) -> Self {
        self.head = head;
        self
    }

    /// Dots as the panel currently shows them
    pub fn dots(&self) -> &FrameBuffer<N> {
        &self.dots
    }

    /// Seed the dots, e.g. with state left over from before power-up
    pub fn dots_mut(&mut self) -> &mut FrameBuffer<N> {
        &mut self.dots
    }

    /// Physical head position
    pub fn head(&self) -> Position {
        self.head
    }

    /// Current polarity line level
    pub fn polarity(&self) -> bool {
        self.levels[Line::Polarity.slot()]
    }

    /// Level of any line
    pub fn level(&self, line: Line) -> bool {
        self.levels[line.slot()]
    }

    /// Commit and step pulses seen since construction or the last
    /// [`PanelModel::reset_counters`]
    pub fn stats(&self) -> FrameStats {
        self.stats
    }

    /// Reset pulses seen
    pub fn resets(&self) -> u32 {
        self.resets
    }

    /// Most recent commit pulses, oldest first
    pub fn history(&self) -> impl Iterator<Item = &CommitRecord> {
        self.history.oldest_ordered()
    }

    /// Zero the counters and forget the commit history
    pub fn reset_counters(&mut self) {
        self.stats = FrameStats::default();
        self.resets = 0;
        self.history.clear();
    }

    /// Apply a line level change
    pub fn drive(&mut self, line: Line, high: bool) {
        let slot = line.slot();
        let rising = high && !self.levels[slot];
        self.levels[slot] = high;

        if !rising {
            return;
        }

        match line {
            Line::Column => {
                self.head = Position::new((self.head.x + 1) % self.geometry.width, 0);
                self.stats.column_steps += 1;
            }
            Line::Row => {
                self.head.y = (self.head.y + 1) % self.geometry.height;
                self.stats.row_steps += 1;
            }
            Line::Reset => {
                self.head = Position::ORIGIN;
                self.resets += 1;
            }
            Line::Commit => {
                let on = self.polarity();
                let Position { x, y } = self.head;
                // The head only ever holds in-range positions
                let _ = self.dots.set_pixel(x, y, on);
                self.stats.commits += 1;
                self.history.write(CommitRecord { x, y, on });
            }
            Line::Polarity => {}
        }
    }
}

/// One control line wired into a shared [`PanelModel`]
pub struct SimLine<'a, const N: usize = PANEL_BUFFER_BYTES> {
    model: &'a RefCell<PanelModel<N>>,
    line: Line,
}

impl<'a, const N: usize> SimLine<'a, N> {
    pub fn new(model: &'a RefCell<PanelModel<N>>, line: Line) -> Self {
        Self { model, line }
    }

    pub fn line(&self) -> Line {
        self.line
    }
}

impl<const N: usize> OutputPin for SimLine<'_, N> {
    fn set_high(&mut self) {
        self.model.borrow_mut().drive(self.line, true);
    }

    fn set_low(&mut self) {
        self.model.borrow_mut().drive(self.line, false);
    }

    fn is_set_high(&self) -> bool {
        self.model.borrow().level(self.line)
    }
}

/// All five lines wired into `model`
pub fn lines<const N: usize>(model: &RefCell<PanelModel<N>>) -> ControlLines<SimLine<'_, N>> {
    ControlLines {
        column: SimLine::new(model, Line::Column),
        row: SimLine::new(model, Line::Row),
        polarity: SimLine::new(model, Line::Polarity),
        commit: SimLine::new(model, Line::Commit),
        reset: SimLine::new(model, Line::Reset),
    }
}

/// Delay that returns immediately and records what was asked of it
#[derive(Debug, Clone, Default)]
pub struct SimDelay {
    /// Number of waits
    pub calls: u32,
    /// Sum of all waits in microseconds
    pub total_us: u64,
    /// Longest single wait in microseconds
    pub longest_us: u32,
}

impl Delay for SimDelay {
    fn delay_us(&mut self, us: u32) {
        self.calls += 1;
        self.total_us += us as u64;
        self.longest_us = self.longest_us.max(us);
    }
}
