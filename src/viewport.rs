//! Canvas-local coordinates and the host-allocated viewport rectangle.
//!
//! Pointer events arrive in client (page) coordinates. Everything past the
//! engine boundary works in canvas-local CSS pixels with the origin at the
//! canvas's top-left corner, so the viewport only needs the canvas origin to
//! convert. There is no pan or zoom.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

use serde::{Deserialize, Serialize};

/// A point in either client or canvas-local space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// The rectangle the host gives the canvas.
///
/// `origin_x` / `origin_y` are the canvas's top-left corner in client CSS
/// pixels. `width` / `height` are its size in CSS pixels. `dpr` is the
/// device pixel ratio used to size the backing store.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub origin_x: f64,
    pub origin_y: f64,
    pub width: f64,
    pub height: f64,
    pub dpr: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self { origin_x: 0.0, origin_y: 0.0, width: 0.0, height: 0.0, dpr: 1.0 }
    }
}

impl Viewport {
    /// Convert a client-space point to canvas-local coordinates.
    #[must_use]
    pub fn client_to_local(&self, client: Point) -> Point {
        Point { x: client.x - self.origin_x, y: client.y - self.origin_y }
    }

    /// Convert a canvas-local point back to client coordinates.
    #[must_use]
    pub fn local_to_client(&self, local: Point) -> Point {
        Point { x: local.x + self.origin_x, y: local.y + self.origin_y }
    }

    /// Whether a canvas-local point falls inside the canvas rectangle.
    #[must_use]
    pub fn contains(&self, local: Point) -> bool {
        local.x >= 0.0 && local.y >= 0.0 && local.x <= self.width && local.y <= self.height
    }

    /// Backing-store size in device pixels, rounded to whole pixels.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn device_size(&self) -> (u32, u32) {
        let w = (self.width * self.dpr).round().max(0.0);
        let h = (self.height * self.dpr).round().max(0.0);
        (w as u32, h as u32)
    }
}
