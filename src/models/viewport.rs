//! Drawable surface dimensions

use serde::{Deserialize, Serialize};
use super::vector::Vector2;

/// Current drawable size in pixels
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vector2 {
        Vector2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Absolute position of a point given as fractions of the viewport
    pub fn at_fraction(&self, fraction: Vector2) -> Vector2 {
        Vector2::new(fraction.x * self.width, fraction.y * self.height)
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}
