//! Pixel-level drawing surface

use crate::error::FlipdotError;
use crate::geometry::Geometry;

/// Something dots can be written into
///
/// Writes only touch memory. Nothing reaches the panel until a redraw.
pub trait Canvas {
    /// Panel geometry
    fn geometry(&self) -> Geometry;

    /// Set or clear one dot
    ///
    /// Out-of-range coordinates fail with `OutOfRange` and change nothing.
    fn set_pixel(&mut self, x: u16, y: u16, on: bool) -> Result<(), FlipdotError>;

    /// Read one dot
    fn get_pixel(&self, x: u16, y: u16) -> Result<bool, FlipdotError>;

    /// Turn every dot off
    fn clear_all(&mut self);

    /// Panel width in columns
    fn width(&self) -> u16 {
        self.geometry().width
    }

    /// Panel height in rows
    fn height(&self) -> u16 {
        self.geometry().height
    }
}
