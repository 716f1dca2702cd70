//! Board-agnostic core logic for the flip-dot panel firmware
//!
//! This crate contains everything that does not touch a control line:
//!
//! - Panel geometry and the canonical scan order
//! - Bit-packed frame buffers and their diff
//! - Panel configuration types
//! - Client-facing traits (canvas, panel)
//! - The pong demo simulation

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod framebuffer;
pub mod geometry;
pub mod pong;
pub mod scan;
pub mod traits;

pub use error::FlipdotError;
pub use framebuffer::{DiffCell, FrameBuffer, PanelBuffer, PANEL_BUFFER_BYTES};
pub use geometry::{Geometry, Position};
pub use scan::{Advance, ScanCell, ScanOrder};
