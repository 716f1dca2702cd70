//! Render loop task
//!
//! Forces every dot off once, then draws one pong frame per interval. Frame
//! pacing is best effort: redraw time grows with the number of changed dots
//! and is not subtracted from the interval.

use defmt::*;
use embassy_time::{Duration, Instant, Timer};

use flipdot_core::pong::Pong;
use flipdot_core::traits::{Canvas, FlipDotPanel};

use crate::Panel;

/// Log frame statistics every this many frames
const STATS_INTERVAL_FRAMES: u32 = 500;

/// Panel render task
#[embassy_executor::task]
pub async fn render_task(mut display: Panel, frame_interval_ms: u32) {
    info!("Render task started");

    // The panel keeps its dots across power cycles
    let start = Instant::now();
    let stats = display.full_clear();
    info!(
        "Full clear: {} dots in {} ms",
        stats.commits,
        start.elapsed().as_millis()
    );

    let mut game = match Pong::new(display.geometry()) {
        Ok(game) => game,
        Err(e) => {
            error!("Panel too small for pong: {:?}", e);
            return;
        }
    };

    let interval = Duration::from_millis(frame_interval_ms as u64);
    let mut commits: u32 = 0;

    loop {
        display.clear_all();
        game.update();
        if let Err(e) = game.draw(&mut display) {
            warn!("Frame {} draw failed: {:?}", game.frame(), e);
        }

        let stats = display.redraw();
        trace!("Frame {}: {} commits", game.frame(), stats.commits);
        commits = commits.wrapping_add(stats.commits);

        if game.frame() % STATS_INTERVAL_FRAMES == 0 {
            debug!(
                "{} frames, {} commits in the last {}",
                game.frame(),
                commits,
                STATS_INTERVAL_FRAMES
            );
            commits = 0;
        }

        Timer::after(interval).await;
    }
}
