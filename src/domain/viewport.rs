//! Running extents and the padded viewport derived from them.

use serde::Serialize;

use crate::domain::path::Point;
use crate::domain::turtle::STEP_FACTOR;

/// Padding added to each edge per unit of stroke thickness.
pub const PAD_FACTOR: f64 = 0.8;

/// Min/max extents of every visited point. Starts at the origin.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    pub fn include(&mut self, p: Point) {
        self.min_x = self.min_x.min(p.x);
        self.min_y = self.min_y.min(p.y);
        self.max_x = self.max_x.max(p.x);
        self.max_y = self.max_y.max(p.y);
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Pad every edge by `PAD_FACTOR * thickness`.
    pub fn viewport(&self, thickness: f64) -> Viewport {
        let pad = PAD_FACTOR * thickness;
        Viewport {
            x: self.min_x - pad,
            y: self.min_y - pad,
            width: self.width() + 2.0 * pad,
            height: self.height() + 2.0 * pad,
        }
    }
}

/// Rectangular frame for displaying a rendered curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Viewport {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    /// Stroke width relative to the frame, so strokes look alike across
    /// curves and depths.
    pub fn stroke_width(&self, thickness: f64) -> f64 {
        thickness * self.width.max(self.height) / STEP_FACTOR
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x <= self.x + self.width && p.y >= self.y && p.y <= self.y + self.height
    }

    pub fn diagonal(&self) -> f64 {
        self.width.hypot(self.height)
    }
}
