//! Host-supplied canvas settings.
//!
//! The notebook screens hand the canvas a small JSON record describing the
//! paper color, the swatch palette, and the pen the canvas opens with. Every
//! field is optional; missing fields take the built-in defaults.
//!
//! ```json
//! { "background": "#E2E8F0", "palette": ["#000000", "#FF0000"], "default_width": 3 }
//! ```

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::consts::{BACKGROUND_COLOR, DEFAULT_COLOR, DEFAULT_PALETTE, DEFAULT_WIDTH, WIDTH_MAX, WIDTH_MIN};
use crate::tool::DrawingConfig;

/// Error returned by [`Settings::from_json`].
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// The input is not valid JSON, or a field has the wrong type or an invalid color.
    #[error("invalid settings json: {0}")]
    Json(#[from] serde_json::Error),
    /// `palette` was present but empty.
    #[error("palette must contain at least one color")]
    EmptyPalette,
    /// `default_width` is outside the selectable range.
    #[error("default_width {0} is outside [1, 20]")]
    WidthOutOfRange(f64),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Paper color; eraser strokes paint with it.
    pub background: Color,
    /// Swatches shown in the tool panel.
    pub palette: Vec<Color>,
    /// Pen color on mount.
    pub default_color: Color,
    /// Pen width on mount.
    pub default_width: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            background: BACKGROUND_COLOR,
            palette: DEFAULT_PALETTE.to_vec(),
            default_color: DEFAULT_COLOR,
            default_width: DEFAULT_WIDTH,
        }
    }
}

impl Settings {
    /// Parse and validate a settings record.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Json`] for malformed input or bad colors,
    /// [`SettingsError::EmptyPalette`] for `"palette": []`, and
    /// [`SettingsError::WidthOutOfRange`] when `default_width` is not in `[1, 20]`.
    pub fn from_json(raw: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(raw)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Check the invariants serde can't express.
    ///
    /// # Errors
    ///
    /// See [`Settings::from_json`].
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.palette.is_empty() {
            return Err(SettingsError::EmptyPalette);
        }
        if !(WIDTH_MIN..=WIDTH_MAX).contains(&self.default_width) {
            return Err(SettingsError::WidthOutOfRange(self.default_width));
        }
        Ok(())
    }

    /// Pen configuration a freshly mounted canvas starts with.
    #[must_use]
    pub fn initial_config(&self) -> DrawingConfig {
        DrawingConfig::new(self.default_color, self.default_width, false)
    }
}
