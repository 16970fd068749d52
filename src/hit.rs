//! Hit-testing for the overlay buttons drawn on top of the ink.
//!
//! Two round buttons float over the canvas: the close affordance in the
//! top-left corner and, while the tool panel is closed, a toggle in the
//! bottom-right corner that re-opens it. A pointer-down on either is a button
//! press, not the start of a stroke.

#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::consts::{CLOSE_BUTTON_INSET_PX, CLOSE_BUTTON_RADIUS_PX, PANEL_TOGGLE_INSET_PX, PANEL_TOGGLE_RADIUS_PX};
use crate::viewport::{Point, Viewport};

/// Which overlay button was hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// Closes the canvas.
    CloseButton,
    /// Re-opens the tool panel.
    PanelToggle,
}

/// Center of the close button in canvas-local coordinates.
#[must_use]
pub fn close_button_center() -> Point {
    let c = CLOSE_BUTTON_INSET_PX + CLOSE_BUTTON_RADIUS_PX;
    Point::new(c, c)
}

/// Center of the panel-toggle button in canvas-local coordinates.
#[must_use]
pub fn panel_toggle_center(viewport: &Viewport) -> Point {
    let off = PANEL_TOGGLE_INSET_PX + PANEL_TOGGLE_RADIUS_PX;
    Point::new(viewport.width - off, viewport.height - off)
}

/// Test which overlay button, if any, is under `local_pt`.
///
/// The panel toggle only exists while the panel is closed.
#[must_use]
pub fn hit_test(local_pt: Point, viewport: &Viewport, panel_open: bool) -> Option<HitTarget> {
    if local_pt.distance(close_button_center()) <= CLOSE_BUTTON_RADIUS_PX {
        return Some(HitTarget::CloseButton);
    }
    if !panel_open && local_pt.distance(panel_toggle_center(viewport)) <= PANEL_TOGGLE_RADIUS_PX {
        return Some(HitTarget::PanelToggle);
    }
    None
}
