//! Tool panel: the current pen configuration and the panel's own visibility.
//!
//! `DrawingConfig` is the single live cell the pointer tracker samples when a
//! gesture ends. The engine owns exactly one `ToolPanel`, so every mutation
//! made here is visible to the next commit without re-registering any input
//! handler.

#[cfg(test)]
#[path = "tool_test.rs"]
mod tool_test;

use crate::color::Color;
use crate::consts::{WIDTH_MAX, WIDTH_MIN, WIDTH_STEP};
use crate::settings::Settings;

/// Clamp a requested stroke width into the selectable range.
///
/// Non-finite input yields `None` so callers can keep their current width.
#[must_use]
pub fn clamp_width(width: f64) -> Option<f64> {
    width.is_finite().then(|| width.clamp(WIDTH_MIN, WIDTH_MAX))
}

/// Pen settings in effect right now.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawingConfig {
    color: Color,
    width: f64,
    is_eraser: bool,
}

impl DrawingConfig {
    /// Build a config, clamping `width` into `[WIDTH_MIN, WIDTH_MAX]`.
    ///
    /// A non-finite width falls back to `WIDTH_MIN`.
    #[must_use]
    pub fn new(color: Color, width: f64, is_eraser: bool) -> Self {
        Self { color, width: clamp_width(width).unwrap_or(WIDTH_MIN), is_eraser }
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

impl Default for DrawingConfig {
    fn default() -> Self {
        Settings::default().initial_config()
    }
}

/// The tool panel: pen configuration, palette, and open/closed flag.
#[derive(Debug, Clone)]
pub struct ToolPanel {
    config: DrawingConfig,
    palette: Vec<Color>,
    open: bool,
}

impl ToolPanel {
    /// A panel seeded from host settings. Starts open.
    #[must_use]
    pub fn new(settings: &Settings) -> Self {
        Self { config: settings.initial_config(), palette: settings.palette.clone(), open: true }
    }

    /// The live configuration read by the pointer tracker.
    #[must_use]
    pub fn config(&self) -> &DrawingConfig {
        &self.config
    }

    // --- Mutators ---

    pub fn set_color(&mut self, color: Color) {
        self.config.color = color;
        tracing::debug!(color = %color, "pen color set");
    }

    /// Set the stroke width, clamped to `[1, 20]`. Non-finite values are ignored.
    pub fn set_width(&mut self, width: f64) {
        match clamp_width(width) {
            Some(w) => self.config.width = w,
            None => tracing::warn!(width, "ignoring non-finite stroke width"),
        }
    }

    /// One step thicker, saturating at the maximum.
    pub fn increment_width(&mut self) {
        self.set_width(self.config.width + WIDTH_STEP);
    }

    /// One step thinner, saturating at the minimum.
    pub fn decrement_width(&mut self) {
        self.set_width(self.config.width - WIDTH_STEP);
    }

    pub fn set_eraser(&mut self, is_eraser: bool) {
        self.config.is_eraser = is_eraser;
        tracing::debug!(is_eraser, "eraser mode set");
    }

    // --- Palette ---

    /// Swatches in display order.
    #[must_use]
    pub fn palette(&self) -> &[Color] {
        &self.palette
    }

    /// Whether `color` is the active pen color (used to highlight a swatch).
    #[must_use]
    pub fn is_selected(&self, color: Color) -> bool {
        self.config.color == color
    }

    /// Diameter of the width preview dot shown between the +/- buttons.
    #[must_use]
    pub fn preview_diameter(&self) -> f64 {
        self.config.width * 2.0
    }

    // --- Visibility ---

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }
}

impl Default for ToolPanel {
    fn default() -> Self {
        Self::new(&Settings::default())
    }
}
