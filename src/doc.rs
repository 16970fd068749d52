//! Document model: committed strokes and the in-memory stroke store.
//!
//! A `Stroke` is one finished gesture: its points plus the pen style sampled
//! when the pointer was released. The `StrokeStore` keeps strokes in commit
//! order, which is also draw order. `CanvasState` pairs the store with the
//! pointer tracker so the renderer can see both committed and in-progress ink.
//!
//! Nothing here is persisted; the state lives exactly as long as the engine.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use crate::color::Color;
use crate::input::PointerTracker;
use crate::tool::DrawingConfig;
use crate::viewport::Point;

/// One committed freehand stroke. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    points: Vec<Point>,
    color: Color,
    width: f64,
    is_eraser: bool,
}

impl Stroke {
    /// Build a stroke from captured points, styled by `config`.
    ///
    /// Returns `None` when `points` is empty.
    #[must_use]
    pub fn new(points: Vec<Point>, config: &DrawingConfig) -> Option<Self> {
        if points.is_empty() {
            return None;
        }
        Some(Self { points, color: config.color(), width: config.width(), is_eraser: config.is_eraser() })
    }

    /// Captured points in gesture order. Never empty.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn is_eraser(&self) -> bool {
        self.is_eraser
    }
}

/// Committed strokes in draw order (later strokes on top).
#[derive(Debug, Clone, Default)]
pub struct StrokeStore {
    strokes: Vec<Stroke>,
}

impl StrokeStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a stroke on top of everything else.
    pub fn append(&mut self, stroke: Stroke) {
        self.strokes.push(stroke);
    }

    /// Remove and return the most recent stroke. No-op on an empty store.
    pub fn undo(&mut self) -> Option<Stroke> {
        self.strokes.pop()
    }

    /// Remove every stroke.
    pub fn clear(&mut self) {
        self.strokes.clear();
    }

    /// All strokes, bottom first.
    #[must_use]
    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    /// The topmost stroke, if any.
    #[must_use]
    pub fn last(&self) -> Option<&Stroke> {
        self.strokes.last()
    }

    /// Number of committed strokes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    /// Returns `true` if no strokes have been committed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    /// Total number of points across every committed stroke.
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.strokes.iter().map(|s| s.points.len()).sum()
    }
}

/// Everything drawn on the canvas: committed strokes plus the active gesture.
#[derive(Debug, Clone, Default)]
pub struct CanvasState {
    pub strokes: StrokeStore,
    pub tracker: PointerTracker,
}

impl CanvasState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Points of the stroke being drawn right now. Empty when idle.
    #[must_use]
    pub fn in_progress_points(&self) -> &[Point] {
        self.tracker.points()
    }

    /// Finish the active gesture, committing it with `config`'s style.
    ///
    /// Returns the committed stroke, or `None` if no gesture had points.
    pub fn commit(&mut self, config: &DrawingConfig) -> Option<&Stroke> {
        let stroke = self.tracker.on_gesture_end(config)?;
        self.strokes.append(stroke);
        self.strokes.last()
    }

    /// Remove the last committed stroke. The active gesture is untouched.
    pub fn undo(&mut self) -> Option<Stroke> {
        self.strokes.undo()
    }

    /// Remove all committed strokes and abandon any active gesture.
    pub fn clear(&mut self) {
        self.strokes.clear();
        self.tracker.cancel();
    }
}
