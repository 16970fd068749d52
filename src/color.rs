//! Stroke color values.
//!
//! Colors arrive from the host as CSS hex strings (`#RGB` or `#RRGGBB`) and
//! are kept as RGB channels so that comparisons don't depend on how the
//! string was spelled. Output is always canonical lowercase `#rrggbb`.

#[cfg(test)]
#[path = "color_test.rs"]
mod color_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when a string is not a `#RGB` / `#RRGGBB` color.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    /// The value does not start with `#`.
    #[error("color '{0}' must start with '#'")]
    MissingHash(String),
    /// The value has a digit count other than 3 or 6.
    #[error("color '{0}' must have 3 or 6 hex digits")]
    BadLength(String),
    /// The value contains a non-hex character.
    #[error("color '{0}' contains a non-hex digit")]
    BadDigit(String),
}

/// An opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RGB` or `#RRGGBB`, ignoring surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns a [`ColorError`] describing why `raw` is not a hex color.
    pub fn parse_hex(raw: &str) -> Result<Self, ColorError> {
        let trimmed = raw.trim();
        let Some(hex) = trimmed.strip_prefix('#') else {
            return Err(ColorError::MissingHash(raw.to_owned()));
        };
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorError::BadDigit(raw.to_owned()));
        }
        let channel = |digits: &str| {
            u8::from_str_radix(digits, 16).map_err(|_| ColorError::BadDigit(raw.to_owned()))
        };
        match hex.len() {
            3 => Ok(Self {
                r: channel(&hex[0..1].repeat(2))?,
                g: channel(&hex[1..2].repeat(2))?,
                b: channel(&hex[2..3].repeat(2))?,
            }),
            6 => Ok(Self { r: channel(&hex[0..2])?, g: channel(&hex[2..4])?, b: channel(&hex[4..6])? }),
            _ => Err(ColorError::BadLength(raw.to_owned())),
        }
    }

    /// Canonical lowercase `#rrggbb`.
    #[must_use]
    pub fn to_hex(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_hex(s)
    }
}

impl TryFrom<String> for Color {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}
