//! Rendering: turns canvas state into draw commands and paints them.
//!
//! The first half of this module is backend-neutral. [`draw_commands`] walks
//! the stroke store lazily and yields one [`DrawCommand`] per committed stroke
//! in z-order, then one for the gesture in progress. Each command describes a
//! polyline (move-to the first point, line-to every later one) with round caps
//! and joins. Hosts that render with SVG can use [`DrawCommand::svg_path`].
//!
//! The second half is the only place that touches
//! [`web_sys::CanvasRenderingContext2d`]. It receives read-only views of state
//! and produces pixels. All fallible `Canvas2D` calls propagate errors via
//! `Result<(), JsValue>`; the top-level caller ([`crate::engine::Engine::render`])
//! handles the result.
//!
//! The whole scene is redrawn on every mutation, including every pointer move.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::f64::consts::PI;
use std::fmt::Write as _;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::color::Color;
use crate::consts::{
    CLOSE_BUTTON_COLOR, CLOSE_BUTTON_RADIUS_PX, OVERLAY_GLYPH_COLOR, PANEL_TOGGLE_COLOR, PANEL_TOGGLE_RADIUS_PX,
};
use crate::doc::{CanvasState, Stroke};
use crate::hit;
use crate::tool::DrawingConfig;
use crate::viewport::{Point, Viewport};

/// Canvas2D / SVG line cap used for every stroke.
pub const LINE_CAP: &str = "round";

/// Canvas2D / SVG line join used for every stroke.
pub const LINE_JOIN: &str = "round";

/// Half the length of one arm of the close button's X glyph.
const CLOSE_GLYPH_HALF_PX: f64 = 6.0;

// =============================================================
// Draw commands
// =============================================================

/// One path segment instruction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathOp {
    MoveTo(Point),
    LineTo(Point),
}

/// Where a command's points come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    /// A committed stroke, by its index in the store.
    Committed(usize),
    /// The gesture currently being drawn.
    InProgress,
}

/// A single stroked polyline, ready to paint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCommand<'a> {
    pub layer: Layer,
    pub points: &'a [Point],
    /// Paint color after eraser resolution.
    pub color: Color,
    pub width: f64,
    pub is_eraser: bool,
}

impl<'a> DrawCommand<'a> {
    fn for_stroke(index: usize, stroke: &'a Stroke, background: Color) -> Self {
        Self {
            layer: Layer::Committed(index),
            points: stroke.points(),
            color: paint_color(stroke.color(), stroke.is_eraser(), background),
            width: stroke.width(),
            is_eraser: stroke.is_eraser(),
        }
    }

    fn for_gesture(points: &'a [Point], config: &DrawingConfig, background: Color) -> Self {
        Self {
            layer: Layer::InProgress,
            points,
            color: paint_color(config.color(), config.is_eraser(), background),
            width: config.width(),
            is_eraser: config.is_eraser(),
        }
    }

    /// Whether this command paints a single tap.
    #[must_use]
    pub fn is_dot(&self) -> bool {
        self.points.len() == 1
    }

    /// Path instructions: move-to the first point, then line-to each later one.
    ///
    /// A one-point path is emitted as a move-to plus a zero-length line-to so
    /// that round caps paint it as a dot of diameter `width`.
    #[must_use]
    pub fn path_ops(self) -> impl Iterator<Item = PathOp> + 'a {
        let points = self.points;
        let dot = points.first().filter(|_| points.len() == 1).copied().map(PathOp::LineTo);
        points
            .iter()
            .enumerate()
            .map(|(i, p)| if i == 0 { PathOp::MoveTo(*p) } else { PathOp::LineTo(*p) })
            .chain(dot)
    }

    /// SVG path data, e.g. `"M0,0 L10,0 L10,10"`.
    #[must_use]
    pub fn svg_path(&self) -> String {
        let mut d = String::with_capacity(self.points.len() * 12);
        for (i, op) in self.path_ops().enumerate() {
            if i > 0 {
                d.push(' ');
            }
            let (cmd, p) = match op {
                PathOp::MoveTo(p) => ('M', p),
                PathOp::LineTo(p) => ('L', p),
            };
            // Writing into a String cannot fail.
            write!(d, "{cmd}{},{}", p.x, p.y).unwrap_or_default();
        }
        d
    }
}

/// Eraser strokes paint with the paper color.
#[must_use]
pub fn paint_color(color: Color, is_eraser: bool, background: Color) -> Color {
    if is_eraser { background } else { color }
}

/// Lazy sequence of draw commands for one frame.
///
/// Cloning the iterator restarts it from the current position without
/// touching the store.
#[derive(Debug, Clone)]
pub struct DrawCommands<'a> {
    strokes: std::iter::Enumerate<std::slice::Iter<'a, Stroke>>,
    in_progress: Option<DrawCommand<'a>>,
    background: Color,
}

impl<'a> Iterator for DrawCommands<'a> {
    type Item = DrawCommand<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.strokes.next() {
            Some((i, stroke)) => Some(DrawCommand::for_stroke(i, stroke, self.background)),
            None => self.in_progress.take(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.strokes.len() + usize::from(self.in_progress.is_some());
        (n, Some(n))
    }
}

impl ExactSizeIterator for DrawCommands<'_> {}

/// Draw commands for everything on the canvas, bottom first.
///
/// Committed strokes keep the style they were released with. The gesture in
/// progress previews with the live `config`.
#[must_use]
pub fn draw_commands<'a>(state: &'a CanvasState, config: &DrawingConfig, background: Color) -> DrawCommands<'a> {
    let live = state.in_progress_points();
    DrawCommands {
        strokes: state.strokes.strokes().iter().enumerate(),
        in_progress: (!live.is_empty()).then(|| DrawCommand::for_gesture(live, config, background)),
        background,
    }
}

// =============================================================
// Canvas2D backend
// =============================================================

/// Overlay buttons to paint above the ink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chrome {
    /// When the tool panel is closed the panel-toggle button is shown.
    pub panel_open: bool,
}

/// Draw the full scene: paper, ink, then overlay buttons.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw<'a>(
    ctx: &CanvasRenderingContext2d,
    commands: impl Iterator<Item = DrawCommand<'a>>,
    background: Color,
    viewport: &Viewport,
    chrome: Chrome,
) -> Result<(), JsValue> {
    // Layer 1: clear and paint the paper.
    ctx.set_transform(viewport.dpr, 0.0, 0.0, viewport.dpr, 0.0, 0.0)?;
    ctx.clear_rect(0.0, 0.0, viewport.width, viewport.height);
    ctx.set_fill_style_str(&background.to_hex());
    ctx.fill_rect(0.0, 0.0, viewport.width, viewport.height);

    // Layer 2: ink in z-order (bottom first).
    for cmd in commands {
        stroke_command(ctx, &cmd);
    }

    // Layer 3: overlay buttons.
    draw_close_button(ctx)?;
    if !chrome.panel_open {
        draw_panel_toggle(ctx, viewport)?;
    }
    Ok(())
}

/// Wipe the canvas. Used while the canvas is hidden.
///
/// # Errors
///
/// Returns `Err` if resetting the transform fails.
pub fn clear(ctx: &CanvasRenderingContext2d, viewport: &Viewport) -> Result<(), JsValue> {
    ctx.set_transform(viewport.dpr, 0.0, 0.0, viewport.dpr, 0.0, 0.0)?;
    ctx.clear_rect(0.0, 0.0, viewport.width, viewport.height);
    Ok(())
}

fn stroke_command(ctx: &CanvasRenderingContext2d, cmd: &DrawCommand<'_>) {
    ctx.begin_path();
    for op in cmd.path_ops() {
        match op {
            PathOp::MoveTo(p) => ctx.move_to(p.x, p.y),
            PathOp::LineTo(p) => ctx.line_to(p.x, p.y),
        }
    }
    ctx.set_stroke_style_str(&cmd.color.to_hex());
    ctx.set_line_width(cmd.width);
    ctx.set_line_cap(LINE_CAP);
    ctx.set_line_join(LINE_JOIN);
    ctx.stroke();
}

// =============================================================
// Overlay buttons
// =============================================================

fn draw_close_button(ctx: &CanvasRenderingContext2d) -> Result<(), JsValue> {
    let c = hit::close_button_center();

    ctx.save();
    fill_circle(ctx, c, CLOSE_BUTTON_RADIUS_PX, CLOSE_BUTTON_COLOR)?;

    let h = CLOSE_GLYPH_HALF_PX;
    ctx.begin_path();
    ctx.move_to(c.x - h, c.y - h);
    ctx.line_to(c.x + h, c.y + h);
    ctx.move_to(c.x + h, c.y - h);
    ctx.line_to(c.x - h, c.y + h);
    ctx.set_stroke_style_str(OVERLAY_GLYPH_COLOR);
    ctx.set_line_width(2.0);
    ctx.set_line_cap(LINE_CAP);
    ctx.stroke();
    ctx.restore();
    Ok(())
}

fn draw_panel_toggle(ctx: &CanvasRenderingContext2d, viewport: &Viewport) -> Result<(), JsValue> {
    let c = hit::panel_toggle_center(viewport);

    ctx.save();
    fill_circle(ctx, c, PANEL_TOGGLE_RADIUS_PX, PANEL_TOGGLE_COLOR)?;

    // Ring glyph.
    ctx.begin_path();
    ctx.arc(c.x, c.y, PANEL_TOGGLE_RADIUS_PX * 0.4, 0.0, 2.0 * PI)?;
    ctx.set_stroke_style_str(OVERLAY_GLYPH_COLOR);
    ctx.set_line_width(2.0);
    ctx.stroke();
    ctx.restore();
    Ok(())
}

fn fill_circle(ctx: &CanvasRenderingContext2d, center: Point, radius: f64, fill: &str) -> Result<(), JsValue> {
    ctx.begin_path();
    ctx.arc(center.x, center.y, radius, 0.0, 2.0 * PI)?;
    ctx.set_fill_style_str(fill);
    ctx.fill();
    Ok(())
}
