//! Flipdot - flip-dot panel firmware
//!
//! Main firmware binary for RP2040-driven flip-dot panels. Blanks the panel
//! at startup, then hands it to a single render task running the pong demo.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use {defmt_rtt as _, panic_probe as _};

use flipdot_drivers::FlipDotDisplay;
use flipdot_hal_rp2040::{BusyWait, GpioLine};

/// Panel configuration generated from panel.toml by build.rs
mod panel_config {
    include!(concat!(env!("OUT_DIR"), "/panel_config.rs"));
}

mod tasks;

/// The panel driver as wired on this board
pub type Panel = FlipDotDisplay<GpioLine<'static>, BusyWait, { panel_config::FRAME_BYTES }>;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Flipdot firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = panel_config::PANEL;
    info!(
        "Panel config: {}x{}, step={}us, commit={}us, frame={}ms",
        config.geometry.width,
        config.geometry.height,
        config.timing.step_hold_us,
        config.timing.commit_hold_us,
        config.timing.frame_interval_ms
    );

    let lines = panel_config::take_panel_pins(p).into_lines(&config.pins);

    let display = match Panel::new(lines, BusyWait, &config) {
        Ok(display) => display,
        Err(e) => {
            error!("Panel init failed: {:?}", e);
            return;
        }
    };
    info!("Panel control lines initialized");

    // One task owns the panel; nothing else may touch its lines
    spawner
        .spawn(tasks::render_task(display, config.timing.frame_interval_ms))
        .unwrap();
}
