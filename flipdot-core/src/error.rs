//! Error types shared across the workspace

use crate::config::ConfigError;

/// Errors reported by frame buffers and panel drivers
///
/// Line faults are not represented: the panel gives no feedback, so a stuck
/// or disconnected line cannot be observed from software.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FlipdotError {
    /// Coordinate outside the panel bounds
    OutOfRange { x: u16, y: u16 },
    /// Panel has zero width or zero height
    InvalidGeometry,
    /// Buffer capacity cannot hold every dot of the panel
    BufferTooSmall { required: usize, capacity: usize },
    /// Panel configuration rejected
    Config(ConfigError),
}

impl From<ConfigError> for FlipdotError {
    fn from(e: ConfigError) -> Self {
        FlipdotError::Config(e)
    }
}
