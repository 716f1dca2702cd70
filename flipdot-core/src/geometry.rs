//! Panel geometry and dot addressing
//!
//! Dots are linearized column-major: `index(x, y) = x * height + y`. The same
//! order is the physical scan order, see [`crate::scan`].

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::FlipdotError;
use crate::scan::ScanOrder;

/// Fixed panel dimensions in dots
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Geometry {
    /// Number of columns
    pub width: u16,
    /// Number of rows
    pub height: u16,
}

impl Default for Geometry {
    fn default() -> Self {
        Self::PANEL_32X16
    }
}

impl Geometry {
    /// The 32×16 panel the firmware ships for
    pub const PANEL_32X16: Self = Self::new(32, 16);

    /// Create a geometry (not validated, see [`Geometry::is_valid`])
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Both dimensions are non-zero
    pub const fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Total number of dots
    pub const fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Bytes needed to hold one bit per dot
    pub const fn byte_len(&self) -> usize {
        self.cell_count().div_ceil(8)
    }

    /// Check whether a coordinate addresses a dot
    pub const fn contains(&self, x: u16, y: u16) -> bool {
        x < self.width && y < self.height
    }

    /// Linear index of a dot
    ///
    /// Fails with `OutOfRange` rather than wrapping, since a wrapped index
    /// would address a different physical dot.
    pub fn index(&self, x: u16, y: u16) -> Result<usize, FlipdotError> {
        if !self.contains(x, y) {
            return Err(FlipdotError::OutOfRange { x, y });
        }
        Ok(x as usize * self.height as usize + y as usize)
    }

    /// Inverse of [`Geometry::index`]
    pub fn coords(&self, index: usize) -> Option<(u16, u16)> {
        if index >= self.cell_count() {
            return None;
        }
        let height = self.height as usize;
        Some(((index / height) as u16, (index % height) as u16))
    }

    /// Every dot in physical scan order
    pub fn scan(&self) -> ScanOrder {
        ScanOrder::new(*self)
    }
}

/// Column/row pair on the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Position {
    pub x: u16,
    pub y: u16,
}

impl Position {
    /// The reset position
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}
