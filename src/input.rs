//! Input model: the pointer gesture state machine.
//!
//! One gesture is one pointer-down to pointer-up interaction. While a gesture
//! is active its points accumulate in `InputState::Drawing`; on release they
//! become a [`Stroke`] styled by whatever configuration is current at that
//! moment. Only one gesture is tracked at a time.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::doc::Stroke;
use crate::tool::DrawingConfig;
use crate::viewport::Point;

/// Internal state for the gesture state machine.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// The pointer is down and ink is being laid.
    Drawing {
        /// Canvas-local points in arrival order. Never empty.
        points: Vec<Point>,
    },
}

/// Converts gesture events into the in-progress point list.
#[derive(Debug, Clone, Default)]
pub struct PointerTracker {
    state: InputState,
}

impl PointerTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a gesture at `point`.
    ///
    /// If a gesture is already active its points are abandoned and the new
    /// gesture starts fresh.
    pub fn on_gesture_start(&mut self, point: Point) {
        if let InputState::Drawing { points } = &self.state {
            tracing::debug!(abandoned = points.len(), "gesture restarted before release");
        }
        self.state = InputState::Drawing { points: vec![point] };
    }

    /// Extend the active gesture. Ignored when no gesture is active.
    pub fn on_gesture_move(&mut self, point: Point) -> bool {
        match &mut self.state {
            InputState::Drawing { points } => {
                points.push(point);
                tracing::trace!(x = point.x, y = point.y, n = points.len(), "gesture move");
                true
            }
            InputState::Idle => false,
        }
    }

    /// End the active gesture and return its stroke, styled by `config`.
    ///
    /// The tracker is idle afterwards. Returns `None` when no gesture was
    /// active.
    pub fn on_gesture_end(&mut self, config: &DrawingConfig) -> Option<Stroke> {
        match std::mem::take(&mut self.state) {
            InputState::Drawing { points } => Stroke::new(points, config),
            InputState::Idle => None,
        }
    }

    /// Abandon the active gesture without committing anything.
    ///
    /// Returns `true` if there was a gesture to abandon.
    pub fn cancel(&mut self) -> bool {
        !matches!(std::mem::take(&mut self.state), InputState::Idle)
    }

    /// Whether a gesture is in progress.
    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self.state, InputState::Drawing { .. })
    }

    /// Points captured so far in the active gesture; empty when idle.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        match &self.state {
            InputState::Drawing { points } => points,
            InputState::Idle => &[],
        }
    }

    #[must_use]
    pub fn state(&self) -> &InputState {
        &self.state
    }
}
