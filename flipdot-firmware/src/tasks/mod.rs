//! Embassy async tasks

pub mod render;

pub use render::render_task;
