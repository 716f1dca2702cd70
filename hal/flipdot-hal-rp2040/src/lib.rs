//! RP2040-specific HAL for the flip-dot panel firmware
//!
//! This crate provides RP2040 implementations of the shared `flipdot-hal`
//! traits:
//!
//! - GPIO control lines with optional active-low inversion
//! - Busy-wait delay on the embassy time driver

#![no_std]

pub mod delay;
pub mod gpio;

pub use delay::BusyWait;
pub use gpio::{GpioLine, PanelPins};

// Re-export shared traits from flipdot-hal for convenience
pub use flipdot_hal::{ControlLines, Delay, OutputPin};
