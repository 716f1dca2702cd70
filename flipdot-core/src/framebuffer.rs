//! Bit-packed frame buffer
//!
//! One bit per dot at `index(x, y)`: byte `index / 8`, bit `index % 8`
//! (bit 0 is the least significant). Capacity is a const generic byte count
//! so buffers live on the stack or in statics without an allocator.

use heapless::Vec;

use crate::error::FlipdotError;
use crate::geometry::Geometry;
use crate::scan::{ScanCell, ScanOrder};
use crate::traits::Canvas;

/// Byte capacity for the 32×16 panel
pub const PANEL_BUFFER_BYTES: usize = Geometry::PANEL_32X16.byte_len();

/// Frame buffer sized for the 32×16 panel
pub type PanelBuffer = FrameBuffer<PANEL_BUFFER_BYTES>;

/// Bit-packed canvas of a fixed geometry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer<const N: usize> {
    geometry: Geometry,
    bits: Vec<u8, N>,
}

impl<const N: usize> FrameBuffer<N> {
    /// Create an all-off buffer for `geometry`
    ///
    /// Fails if the geometry is empty or needs more than `N` bytes.
    pub fn new(geometry: Geometry) -> Result<Self, FlipdotError> {
        if !geometry.is_valid() {
            return Err(FlipdotError::InvalidGeometry);
        }

        let required = geometry.byte_len();
        let mut bits = Vec::new();
        bits.resize(required, 0)
            .map_err(|_| FlipdotError::BufferTooSmall {
                required,
                capacity: N,
            })?;

        Ok(Self { geometry, bits })
    }

    /// Panel geometry this buffer covers
    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    /// Raw packed bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.bits
    }

    /// Set or clear one dot
    pub fn set_pixel(&mut self, x: u16, y: u16, on: bool) -> Result<(), FlipdotError> {
        let index = self.geometry.index(x, y)?;
        self.write_bit(index, on);
        Ok(())
    }

    /// Read one dot
    pub fn get_pixel(&self, x: u16, y: u16) -> Result<bool, FlipdotError> {
        let index = self.geometry.index(x, y)?;
        Ok(self.bit(index))
    }

    /// Turn every dot off
    pub fn clear_all(&mut self) {
        self.bits.fill(0);
    }

    /// Set every dot to `on`
    pub fn fill(&mut self, on: bool) {
        if !on {
            self.clear_all();
            return;
        }

        self.bits.fill(0xFF);
        // Padding bits past the last dot stay zero
        let tail = self.geometry.cell_count() % 8;
        if tail != 0 {
            if let Some(last) = self.bits.last_mut() {
                *last = (1u8 << tail) - 1;
            }
        }
    }

    /// Overwrite this buffer with the contents of `other`
    pub fn copy_from(&mut self, other: &Self) {
        debug_assert_eq!(self.geometry, other.geometry);
        let len = self.bits.len().min(other.bits.len());
        self.bits[..len].copy_from_slice(&other.bits[..len]);
    }

    /// Number of dots that are on
    pub fn lit_count(&self) -> usize {
        self.bits.iter().map(|b| b.count_ones() as usize).sum()
    }

    /// Number of dots that differ from `other`
    pub fn changed_count(&self, other: &Self) -> usize {
        self.bits
            .iter()
            .zip(other.bits.iter())
            .map(|(a, b)| (a ^ b).count_ones() as usize)
            .sum()
    }

    /// Walk every dot in scan order alongside its value in `previous`
    pub fn diff<'a>(&'a self, previous: &'a Self) -> Diff<'a, N> {
        debug_assert_eq!(self.geometry, previous.geometry);
        Diff {
            scan: self.geometry.scan(),
            current: self,
            previous,
        }
    }

    /// Read the bit at a linear index
    pub fn bit(&self, index: usize) -> bool {
        self.bits
            .get(index / 8)
            .is_some_and(|byte| byte & (1 << (index % 8)) != 0)
    }

    fn write_bit(&mut self, index: usize, on: bool) {
        if let Some(byte) = self.bits.get_mut(index / 8) {
            let mask = 1u8 << (index % 8);
            if on {
                *byte |= mask;
            } else {
                *byte &= !mask;
            }
        }
    }
}

impl<const N: usize> Canvas for FrameBuffer<N> {
    fn geometry(&self) -> Geometry {
        self.geometry
    }

    fn set_pixel(&mut self, x: u16, y: u16, on: bool) -> Result<(), FlipdotError> {
        FrameBuffer::set_pixel(self, x, y, on)
    }

    fn get_pixel(&self, x: u16, y: u16) -> Result<bool, FlipdotError> {
        FrameBuffer::get_pixel(self, x, y)
    }

    fn clear_all(&mut self) {
        FrameBuffer::clear_all(self);
    }
}

/// One dot of a buffer diff
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DiffCell {
    pub cell: ScanCell,
    pub current: bool,
    pub previous: bool,
}

impl DiffCell {
    /// The dot needs a commit pulse
    pub fn changed(&self) -> bool {
        self.current != self.previous
    }
}

/// Scan-order iterator returned by [`FrameBuffer::diff`]
pub struct Diff<'a, const N: usize> {
    scan: ScanOrder,
    current: &'a FrameBuffer<N>,
    previous: &'a FrameBuffer<N>,
}

impl<const N: usize> Iterator for Diff<'_, N> {
    type Item = DiffCell;

    fn next(&mut self) -> Option<DiffCell> {
        let cell = self.scan.next()?;
        Some(DiffCell {
            cell,
            current: self.current.bit(cell.index),
            previous: self.previous.bit(cell.index),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.scan.size_hint()
    }
}

impl<const N: usize> ExactSizeIterator for Diff<'_, N> {}
