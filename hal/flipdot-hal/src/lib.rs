//! Flipdot Hardware Abstraction Layer
//!
//! This crate defines the two capabilities the panel driver needs from the
//! board: independently settable logic lines and a blocking delay. Chip
//! specific crates implement them, and tests substitute simulated ones.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  flipdot-drivers (scan head, redraw)    │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  flipdot-hal (this crate - traits)      │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ flipdot-hal-  │       │ embedded-hal  │
//! │    rp2040     │       │   adapters    │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`] - Digital output line
//! - [`delay::Delay`] - Blocking busy-wait
//! - [`lines::ControlLines`] - The panel's five control lines

#![no_std]
#![deny(unsafe_code)]

pub mod compat;
pub mod delay;
pub mod gpio;
pub mod lines;

// Re-export key traits at crate root for convenience
pub use compat::{EmbeddedDelay, EmbeddedLine};
pub use delay::Delay;
pub use gpio::OutputPin;
pub use lines::ControlLines;
