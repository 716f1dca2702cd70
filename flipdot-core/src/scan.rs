//! Canonical physical scan order
//!
//! The scan head can only move forward: a row step advances one dot down the
//! current column, and a column step advances one column and re-homes the row.
//! Walking the panel therefore visits dots in ascending linear index, and the
//! move that follows each dot is fixed by its row:
//!
//! ```text
//! (0,0) row (0,1) row ... (0,h-1) column (1,0) row ... (w-1,h-1) column -> (0,0)
//! ```
//!
//! Both redraw and full clear use this iterator so buffer order and head
//! movement cannot drift apart.

use crate::geometry::Geometry;

/// Head move that follows a dot in the scan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Advance {
    /// Step one row down the current column
    Row,
    /// Step to the next column (row returns to 0)
    Column,
}

/// One dot visited by the scan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScanCell {
    pub x: u16,
    pub y: u16,
    /// Linear index, equal to `geometry.index(x, y)`
    pub index: usize,
    /// Move that brings the head to the next dot
    pub advance: Advance,
}

/// Iterator over every dot in scan order
#[derive(Debug, Clone)]
pub struct ScanOrder {
    geometry: Geometry,
    x: u16,
    y: u16,
    index: usize,
}

impl ScanOrder {
    pub(crate) fn new(geometry: Geometry) -> Self {
        Self {
            geometry,
            x: 0,
            y: 0,
            index: 0,
        }
    }
}

impl Iterator for ScanOrder {
    type Item = ScanCell;

    fn next(&mut self) -> Option<ScanCell> {
        if self.index >= self.geometry.cell_count() {
            return None;
        }

        let last_row = self.y + 1 == self.geometry.height;
        let cell = ScanCell {
            x: self.x,
            y: self.y,
            index: self.index,
            advance: if last_row { Advance::Column } else { Advance::Row },
        };

        if last_row {
            self.x += 1;
            self.y = 0;
        } else {
            self.y += 1;
        }
        self.index += 1;

        Some(cell)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.geometry.cell_count().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ScanOrder {}
