//! Drawing surface contract
//!
//! The renderer only needs a handful of 2D primitives. Anything that can
//! fill rectangles, stroke and fill paths, and fill circles can host it.

use serde::{Deserialize, Serialize};
use crate::models::vector::Vector2;
use crate::models::viewport::Viewport;

/// Stroke parameters for lines and polylines
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct StrokeStyle {
    pub color: String,
    pub width: f64,

    /// Dash pattern; empty means solid
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dash: Vec<f64>,
}

impl StrokeStyle {
    pub fn solid(color: &str, width: f64) -> Self {
        Self {
            color: color.to_string(),
            width,
            dash: Vec::new(),
        }
    }

    pub fn dashed(color: &str, width: f64, dash: &[f64]) -> Self {
        Self {
            color: color.to_string(),
            width,
            dash: dash.to_vec(),
        }
    }

    pub fn is_dashed(&self) -> bool {
        !self.dash.is_empty()
    }
}

/// A rectangular 2D surface the renderer draws on
pub trait DrawSurface {
    /// Current drawable size in pixels
    fn viewport(&self) -> Viewport;

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: &str);

    /// Stroke an open path through `points`
    fn stroke_polyline(&mut self, points: &[Vector2], style: &StrokeStyle);

    /// Fill the closed polygon through `points`
    fn fill_polygon(&mut self, points: &[Vector2], color: &str);

    fn stroke_line(&mut self, from: Vector2, to: Vector2, style: &StrokeStyle) {
        self.stroke_polyline(&[from, to], style);
    }

    fn fill_circle(&mut self, center: Vector2, radius: f64, color: &str);
}
