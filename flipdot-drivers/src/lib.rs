//! Flip-dot panel driver
//!
//! This crate sequences the panel's control lines on top of the
//! `flipdot-hal` traits:
//!
//! - Scan head stepping and reset
//! - Coil commit pulses
//! - The panel protocol: full clear, addressed write, diff-based redraw
//! - A software-simulated panel for host testing

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod panel;
pub mod sim;

pub use panel::{CommitPulse, ControlLines, FlipDotDisplay, ScanHead};
