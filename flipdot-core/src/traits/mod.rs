//! Client-facing panel traits
//!
//! Clients draw through [`Canvas`] and push frames through [`FlipDotPanel`].

pub mod canvas;
pub mod panel;

pub use canvas::Canvas;
pub use panel::{FlipDotPanel, FrameStats};
