//! Shared numeric and color constants for the drawing canvas.

use crate::color::Color;

// ── Stroke width ────────────────────────────────────────────────

/// Thinnest selectable stroke, in CSS pixels.
pub const WIDTH_MIN: f64 = 1.0;

/// Thickest selectable stroke, in CSS pixels.
pub const WIDTH_MAX: f64 = 20.0;

/// Width change applied by one press of the +/- panel buttons.
pub const WIDTH_STEP: f64 = 1.0;

/// Stroke width a freshly mounted canvas starts with.
pub const DEFAULT_WIDTH: f64 = 3.0;

// ── Colors ──────────────────────────────────────────────────────

/// Pen color a freshly mounted canvas starts with.
pub const DEFAULT_COLOR: Color = Color::BLACK;

/// Canvas paper color (`#E2E8F0`). Eraser strokes are painted with it.
pub const BACKGROUND_COLOR: Color = Color::rgb(0xE2, 0xE8, 0xF0);

/// Swatches offered by the tool panel, in display order.
pub const DEFAULT_PALETTE: [Color; 12] = [
    Color::rgb(0x00, 0x00, 0x00),
    Color::rgb(0xFF, 0x00, 0x00),
    Color::rgb(0x00, 0xFF, 0x00),
    Color::rgb(0x00, 0x00, 0xFF),
    Color::rgb(0xFF, 0xFF, 0x00),
    Color::rgb(0xFF, 0x00, 0xFF),
    Color::rgb(0x00, 0xFF, 0xFF),
    Color::rgb(0xFF, 0xA5, 0x00),
    Color::rgb(0x80, 0x00, 0x80),
    Color::rgb(0x00, 0x80, 0x00),
    Color::rgb(0x80, 0x00, 0x00),
    Color::rgb(0x00, 0x00, 0x80),
];

// ── Overlay chrome ──────────────────────────────────────────────

/// Inset of the close button from the canvas top-left corner.
pub const CLOSE_BUTTON_INSET_PX: f64 = 20.0;

/// Radius of the round close button.
pub const CLOSE_BUTTON_RADIUS_PX: f64 = 20.0;

/// Inset of the panel-toggle button from the canvas bottom-right corner.
pub const PANEL_TOGGLE_INSET_PX: f64 = 20.0;

/// Radius of the round panel-toggle button.
pub const PANEL_TOGGLE_RADIUS_PX: f64 = 28.0;

/// Close button fill.
pub const CLOSE_BUTTON_COLOR: &str = "rgba(45, 55, 72, 0.9)";

/// Panel-toggle button fill.
pub const PANEL_TOGGLE_COLOR: &str = "#8B5CF6";

/// Glyph color used on both overlay buttons.
pub const OVERLAY_GLYPH_COLOR: &str = "#FFFFFF";
