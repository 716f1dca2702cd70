//! Panel protocol tests against the simulated panel
//!
//! The model reacts only to line edges, so these check what the physical
//! panel would show rather than what the driver believes.

use core::cell::RefCell;

use flipdot_core::config::PanelConfig;
use flipdot_core::traits::{Canvas, FlipDotPanel, FrameStats};
use flipdot_core::{FlipdotError, Geometry, Position};
use flipdot_drivers::sim::{self, CommitRecord, PanelModel, SimDelay, SimLine};
use flipdot_drivers::FlipDotDisplay;

type Display<'a, const N: usize> = FlipDotDisplay<SimLine<'a, N>, SimDelay, N>;

fn config(geometry: Geometry) -> PanelConfig {
    PanelConfig {
        geometry,
        ..PanelConfig::default()
    }
}

fn model<const N: usize>(geometry: Geometry) -> RefCell<PanelModel<N>> {
    RefCell::new(PanelModel::new(geometry).unwrap())
}

fn display<const N: usize>(model: &RefCell<PanelModel<N>>, geometry: Geometry) -> Display<'_, N> {
    FlipDotDisplay::new(sim::lines(model), SimDelay::default(), &config(geometry)).unwrap()
}

fn history<const N: usize>(model: &RefCell<PanelModel<N>>) -> Vec<CommitRecord> {
    model.borrow().history().copied().collect()
}

#[test]
fn test_two_by_two_scenario() {
    let geometry = Geometry::new(2, 2);
    let model = model::<1>(geometry);
    let mut display = display(&model, geometry);

    display.set_pixel(1, 0, true).unwrap();
    display.set_pixel(0, 1, true).unwrap();
    let stats = display.redraw();

    // Scan order (0,0) (0,1) (1,0) (1,1): pulses at the two set dots only
    assert_eq!(
        history(&model),
        vec![
            CommitRecord { x: 0, y: 1, on: true },
            CommitRecord { x: 1, y: 0, on: true },
        ]
    );
    assert_eq!(stats.commits, 2);
    assert_eq!(display.committed(), display.current());
    assert_eq!(model.borrow().dots(), display.current());

    // Head is back at the origin
    assert_eq!(display.head().position(), Some(Position::ORIGIN));
    assert_eq!(model.borrow().head(), Position::ORIGIN);
}

#[test]
fn test_redraw_is_idempotent() {
    let geometry = Geometry::PANEL_32X16;
    let model = model::<64>(geometry);
    let mut display = display(&model, geometry);
    display.set_pixel(7, 3, true).unwrap();
    display.set_pixel(20, 11, true).unwrap();
    display.redraw();
    model.borrow_mut().reset_counters();

    let stats = display.redraw();

    assert_eq!(stats.commits, 0);
    assert_eq!(model.borrow().stats().commits, 0);
    // Still walks the whole panel
    assert_eq!(stats.steps(), 512);
}

#[test]
fn test_single_changed_dot_single_pulse() {
    let geometry = Geometry::PANEL_32X16;
    let model = model::<64>(geometry);
    let mut display = display(&model, geometry);
    display.redraw();
    model.borrow_mut().reset_counters();

    display.clear_all();
    display.set_pixel(13, 9, true).unwrap();
    let stats = display.redraw();

    assert_eq!(stats.commits, 1);
    assert_eq!(
        history(&model),
        vec![CommitRecord { x: 13, y: 9, on: true }]
    );
    assert_eq!(geometry.index(13, 9), Ok(13 * 16 + 9));
}

#[test]
fn test_redraw_turns_dots_off() {
    let geometry = Geometry::PANEL_32X16;
    let model = model::<64>(geometry);
    let mut display = display(&model, geometry);
    display.set_pixel(4, 4, true).unwrap();
    display.set_pixel(5, 5, true).unwrap();
    display.redraw();
    model.borrow_mut().reset_counters();

    display.clear_all();
    display.set_pixel(5, 5, true).unwrap();
    display.redraw();

    assert_eq!(
        history(&model),
        vec![CommitRecord { x: 4, y: 4, on: false }]
    );
    assert_eq!(model.borrow().dots().lit_count(), 1);
}

#[test]
fn test_redraw_step_cost() {
    let geometry = Geometry::PANEL_32X16;
    let model = model::<64>(geometry);
    let mut display = display(&model, geometry);
    display.set_pixel(0, 0, true).unwrap();

    let stats = display.redraw();

    // One column step per column replaces that column's last row step
    assert_eq!(
        stats,
        FrameStats {
            commits: 1,
            row_steps: 32 * 15,
            column_steps: 32,
        }
    );
    assert_eq!(model.borrow().stats(), stats);
    assert_eq!(model.borrow().resets(), 1);
}

#[test]
fn test_pulse_timing() {
    let geometry = Geometry::new(4, 4);
    let model = model::<2>(geometry);
    let mut display = display(&model, geometry);
    display.set_pixel(1, 1, true).unwrap();
    display.set_pixel(2, 3, true).unwrap();

    let stats = display.redraw();

    let delay = display.delay();
    assert_eq!(delay.calls, stats.commits + stats.steps());
    assert_eq!(delay.total_us, 2 * 600 + 16);
    assert_eq!(delay.longest_us, 600);
}

#[test]
fn test_out_of_range_changes_nothing() {
    let geometry = Geometry::PANEL_32X16;
    let model = model::<64>(geometry);
    let mut display = display(&model, geometry);
    display.set_pixel(1, 1, true).unwrap();
    display.redraw();
    display.set_pixel(2, 2, true).unwrap();
    model.borrow_mut().reset_counters();
    let current = display.current().clone();
    let committed = display.committed().clone();

    assert_eq!(
        display.set_pixel(32, 0, true),
        Err(FlipdotError::OutOfRange { x: 32, y: 0 })
    );
    assert_eq!(
        display.addressed_write(u16::MAX, 0, true),
        Err(FlipdotError::OutOfRange { x: u16::MAX, y: 0 })
    );
    assert_eq!(
        display.addressed_write(0, 16, true),
        Err(FlipdotError::OutOfRange { x: 0, y: 16 })
    );

    assert_eq!(display.current(), &current);
    assert_eq!(display.committed(), &committed);
    assert_eq!(display.head().position(), Some(Position::ORIGIN));
    assert_eq!(model.borrow().stats(), FrameStats::default());
    assert_eq!(model.borrow().resets(), 0);
}

#[test]
fn test_full_clear_blanks_stale_panel() {
    let geometry = Geometry::PANEL_32X16;
    // Dots keep their state across power cycles and the head is wherever
    // it was left
    let mut panel = PanelModel::<64>::new(geometry)
        .unwrap()
        .with_head(Position::new(9, 4));
    panel.dots_mut().fill(true);
    let model = RefCell::new(panel);
    let mut display = display(&model, geometry);

    let stats = display.full_clear();

    assert_eq!(stats.commits, 512);
    assert_eq!(stats.steps(), 512);
    assert_eq!(model.borrow().dots().lit_count(), 0);
    assert!(!model.borrow().polarity());
    assert_eq!(model.borrow().head(), Position::ORIGIN);
    assert_eq!(display.head().position(), Some(Position::ORIGIN));
}

#[test]
fn test_full_clear_resets_committed_baseline() {
    let geometry = Geometry::PANEL_32X16;
    let model = model::<64>(geometry);
    let mut display = display(&model, geometry);
    display.set_pixel(3, 3, true).unwrap();
    display.set_pixel(30, 15, true).unwrap();
    display.redraw();

    display.full_clear();

    // Committed now matches the blank panel; current is untouched
    assert_eq!(display.committed().lit_count(), 0);
    assert_eq!(display.current().lit_count(), 2);

    // So the next redraw restores every set dot
    model.borrow_mut().reset_counters();
    let stats = display.redraw();

    assert_eq!(stats.commits, 2);
    assert_eq!(model.borrow().dots(), display.current());
}

#[test]
fn test_full_clear_then_clear_all_is_quiet() {
    let geometry = Geometry::PANEL_32X16;
    let model = model::<64>(geometry);
    let mut display = display(&model, geometry);
    display.set_pixel(3, 3, true).unwrap();
    display.redraw();

    display.full_clear();
    display.clear_all();
    model.borrow_mut().reset_counters();

    assert_eq!(display.redraw().commits, 0);
}

#[test]
fn test_addressed_write_flips_single_dot() {
    let geometry = Geometry::PANEL_32X16;
    let model = model::<64>(geometry);
    let mut display = display(&model, geometry);
    display.redraw();
    model.borrow_mut().reset_counters();

    display.addressed_write(5, 7, true).unwrap();

    assert_eq!(history(&model), vec![CommitRecord { x: 5, y: 7, on: true }]);
    assert_eq!(model.borrow().stats().column_steps, 5);
    assert_eq!(model.borrow().stats().row_steps, 7);
    assert_eq!(display.head().position(), Some(Position::new(5, 7)));
    // Buffers are bypassed
    assert_eq!(display.current().lit_count(), 0);
    assert_eq!(display.committed().lit_count(), 0);
}

#[test]
fn test_addressed_write_sequence_wraps() {
    let geometry = Geometry::new(4, 4);
    let model = model::<2>(geometry);
    let mut display = display(&model, geometry);

    display.addressed_write(2, 2, true).unwrap();
    display.addressed_write(1, 3, true).unwrap();
    display.addressed_write(1, 0, false).unwrap();

    assert_eq!(
        history(&model),
        vec![
            CommitRecord { x: 2, y: 2, on: true },
            CommitRecord { x: 1, y: 3, on: true },
            CommitRecord { x: 1, y: 0, on: false },
        ]
    );
    assert_eq!(model.borrow().head(), Position::new(1, 0));
}

#[test]
fn test_addressed_write_homes_unknown_head() {
    let geometry = Geometry::PANEL_32X16;
    let model = RefCell::new(
        PanelModel::<64>::new(geometry)
            .unwrap()
            .with_head(Position::new(17, 3)),
    );
    let mut display = display(&model, geometry);

    display.addressed_write(2, 1, true).unwrap();

    assert_eq!(model.borrow().resets(), 1);
    assert_eq!(history(&model), vec![CommitRecord { x: 2, y: 1, on: true }]);
}

#[test]
fn test_addressed_write_then_redraw_resyncs() {
    let geometry = Geometry::new(4, 4);
    let model = model::<2>(geometry);
    let mut display = display(&model, geometry);
    display.set_pixel(0, 0, true).unwrap();
    display.redraw();

    display.addressed_write(3, 3, true).unwrap();
    model.borrow_mut().reset_counters();
    display.set_pixel(1, 2, true).unwrap();
    display.redraw();

    // Redraw starts with a reset, so the stray head position does not matter
    assert_eq!(history(&model), vec![CommitRecord { x: 1, y: 2, on: true }]);
    assert_eq!(model.borrow().resets(), 1);
}
