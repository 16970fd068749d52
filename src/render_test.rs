#![allow(clippy::float_cmp)]

use super::*;
use crate::consts::BACKGROUND_COLOR;

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn red() -> Color {
    Color::rgb(255, 0, 0)
}

fn commit(state: &mut CanvasState, points: &[Point], config: &DrawingConfig) {
    let mut iter = points.iter().copied();
    if let Some(first) = iter.next() {
        state.tracker.on_gesture_start(first);
    }
    for p in iter {
        state.tracker.on_gesture_move(p);
    }
    state.commit(config);
}

// =============================================================
// draw_commands ordering
// =============================================================

#[test]
fn empty_state_has_no_commands() {
    let state = CanvasState::new();
    assert_eq!(draw_commands(&state, &DrawingConfig::default(), BACKGROUND_COLOR).count(), 0);
}

#[test]
fn commands_follow_store_order_then_in_progress() {
    let mut state = CanvasState::new();
    let cfg = DrawingConfig::default();
    commit(&mut state, &[pt(0.0, 0.0)], &cfg);
    commit(&mut state, &[pt(1.0, 1.0), pt(2.0, 2.0)], &cfg);
    state.tracker.on_gesture_start(pt(9.0, 9.0));

    let layers: Vec<Layer> = draw_commands(&state, &cfg, BACKGROUND_COLOR).map(|c| c.layer).collect();
    assert_eq!(layers, vec![Layer::Committed(0), Layer::Committed(1), Layer::InProgress]);
}

#[test]
fn commands_are_exact_size() {
    let mut state = CanvasState::new();
    let cfg = DrawingConfig::default();
    commit(&mut state, &[pt(0.0, 0.0)], &cfg);
    state.tracker.on_gesture_start(pt(1.0, 1.0));
    let mut cmds = draw_commands(&state, &cfg, BACKGROUND_COLOR);
    assert_eq!(cmds.len(), 2);
    cmds.next();
    assert_eq!(cmds.len(), 1);
    cmds.next();
    assert_eq!(cmds.len(), 0);
    assert!(cmds.next().is_none());
}

#[test]
fn commands_restart_when_cloned() {
    let mut state = CanvasState::new();
    let cfg = DrawingConfig::default();
    commit(&mut state, &[pt(0.0, 0.0)], &cfg);
    commit(&mut state, &[pt(5.0, 5.0)], &cfg);
    let cmds = draw_commands(&state, &cfg, BACKGROUND_COLOR);
    let first: Vec<_> = cmds.clone().collect();
    let second: Vec<_> = cmds.collect();
    assert_eq!(first, second);
    assert_eq!(first.len(), 2);
}

// =============================================================
// Styling
// =============================================================

#[test]
fn committed_stroke_keeps_release_style() {
    let mut state = CanvasState::new();
    commit(&mut state, &[pt(0.0, 0.0), pt(1.0, 0.0)], &DrawingConfig::new(red(), 4.0, false));
    // Live config has since changed; committed ink must not follow it.
    let live = DrawingConfig::new(Color::BLACK, 12.0, false);
    let cmd = draw_commands(&state, &live, BACKGROUND_COLOR).next().unwrap();
    assert_eq!(cmd.color, red());
    assert_eq!(cmd.width, 4.0);
}

#[test]
fn in_progress_previews_live_config() {
    let mut state = CanvasState::new();
    state.tracker.on_gesture_start(pt(0.0, 0.0));
    let live = DrawingConfig::new(red(), 9.0, false);
    let cmd = draw_commands(&state, &live, BACKGROUND_COLOR).next().unwrap();
    assert_eq!(cmd.layer, Layer::InProgress);
    assert_eq!(cmd.color, red());
    assert_eq!(cmd.width, 9.0);
}

#[test]
fn eraser_paints_background_color() {
    let mut state = CanvasState::new();
    commit(&mut state, &[pt(0.0, 0.0), pt(3.0, 3.0)], &DrawingConfig::new(red(), 10.0, true));
    let cmd = draw_commands(&state, &DrawingConfig::default(), BACKGROUND_COLOR).next().unwrap();
    assert!(cmd.is_eraser);
    assert_eq!(cmd.color, BACKGROUND_COLOR);
    assert_eq!(cmd.width, 10.0);
}

#[test]
fn eraser_follows_custom_background() {
    let paper = Color::WHITE;
    let mut state = CanvasState::new();
    state.tracker.on_gesture_start(pt(0.0, 0.0));
    let cmd = draw_commands(&state, &DrawingConfig::new(red(), 3.0, true), paper).next().unwrap();
    assert_eq!(cmd.color, paper);
}

#[test]
fn paint_color_resolution() {
    assert_eq!(paint_color(red(), false, Color::WHITE), red());
    assert_eq!(paint_color(red(), true, Color::WHITE), Color::WHITE);
}

// =============================================================
// Paths
// =============================================================

#[test]
fn path_is_move_then_lines() {
    let mut state = CanvasState::new();
    commit(&mut state, &[pt(0.0, 0.0), pt(10.0, 0.0), pt(10.0, 10.0)], &DrawingConfig::default());
    let cmd = draw_commands(&state, &DrawingConfig::default(), BACKGROUND_COLOR).next().unwrap();
    let ops: Vec<PathOp> = cmd.path_ops().collect();
    assert_eq!(
        ops,
        vec![PathOp::MoveTo(pt(0.0, 0.0)), PathOp::LineTo(pt(10.0, 0.0)), PathOp::LineTo(pt(10.0, 10.0))]
    );
    assert!(!cmd.is_dot());
}

#[test]
fn single_point_path_renders_as_dot() {
    let mut state = CanvasState::new();
    commit(&mut state, &[pt(7.0, 8.0)], &DrawingConfig::default());
    let cmd = draw_commands(&state, &DrawingConfig::default(), BACKGROUND_COLOR).next().unwrap();
    assert!(cmd.is_dot());
    let ops: Vec<PathOp> = cmd.path_ops().collect();
    assert_eq!(ops, vec![PathOp::MoveTo(pt(7.0, 8.0)), PathOp::LineTo(pt(7.0, 8.0))]);
    assert_eq!(cmd.svg_path(), "M7,8 L7,8");
}

#[test]
fn svg_path_matches_polyline() {
    let mut state = CanvasState::new();
    commit(&mut state, &[pt(0.0, 0.0), pt(10.0, 0.0), pt(10.5, -2.25)], &DrawingConfig::default());
    let cmd = draw_commands(&state, &DrawingConfig::default(), BACKGROUND_COLOR).next().unwrap();
    assert_eq!(cmd.svg_path(), "M0,0 L10,0 L10.5,-2.25");
}

#[test]
fn line_style_is_round() {
    assert_eq!(LINE_CAP, "round");
    assert_eq!(LINE_JOIN, "round");
}
