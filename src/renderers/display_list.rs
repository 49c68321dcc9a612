//! Display List for frame rendering
//!
//! A `DrawSurface` that records primitives instead of painting them.
//! The recorded list is serializable, so a host can replay a frame on
//! any target (SVG, WebGL) or inspect it in tests.

use serde::{Deserialize, Serialize};
use crate::models::vector::Vector2;
use crate::models::viewport::Viewport;
use super::surface::{DrawSurface, StrokeStyle};

/// One recorded drawing primitive
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    FillRect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        color: String,
    },
    StrokePolyline {
        points: Vec<Vector2>,
        style: StrokeStyle,
    },
    FillPolygon {
        points: Vec<Vector2>,
        color: String,
    },
    StrokeLine {
        from: Vector2,
        to: Vector2,
        style: StrokeStyle,
    },
    FillCircle {
        center: Vector2,
        radius: f64,
        color: String,
    },
}

/// Recorded frame
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct DisplayList {
    /// Surface size the frame was drawn for
    pub viewport: Viewport,

    /// Commands in draw order
    pub commands: Vec<DrawCommand>,
}

impl DisplayList {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            commands: Vec::new(),
        }
    }

    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Drop recorded commands, keep the size
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn circles(&self) -> impl Iterator<Item = (&Vector2, f64, &str)> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::FillCircle { center, radius, color } => Some((center, *radius, color.as_str())),
            _ => None,
        })
    }

    pub fn polylines(&self) -> impl Iterator<Item = (&[Vector2], &StrokeStyle)> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::StrokePolyline { points, style } => Some((points.as_slice(), style)),
            _ => None,
        })
    }

    pub fn lines(&self) -> impl Iterator<Item = (Vector2, Vector2, &StrokeStyle)> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::StrokeLine { from, to, style } => Some((*from, *to, style)),
            _ => None,
        })
    }

    pub fn polygons(&self) -> impl Iterator<Item = &[Vector2]> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::FillPolygon { points, .. } => Some(points.as_slice()),
            _ => None,
        })
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl DrawSurface for DisplayList {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: &str) {
        self.commands.push(DrawCommand::FillRect {
            x,
            y,
            width,
            height,
            color: color.to_string(),
        });
    }

    fn stroke_polyline(&mut self, points: &[Vector2], style: &StrokeStyle) {
        self.commands.push(DrawCommand::StrokePolyline {
            points: points.to_vec(),
            style: style.clone(),
        });
    }

    fn fill_polygon(&mut self, points: &[Vector2], color: &str) {
        self.commands.push(DrawCommand::FillPolygon {
            points: points.to_vec(),
            color: color.to_string(),
        });
    }

    fn stroke_line(&mut self, from: Vector2, to: Vector2, style: &StrokeStyle) {
        self.commands.push(DrawCommand::StrokeLine {
            from,
            to,
            style: style.clone(),
        });
    }

    fn fill_circle(&mut self, center: Vector2, radius: f64, color: &str) {
        self.commands.push(DrawCommand::FillCircle {
            center,
            radius,
            color: color.to_string(),
        });
    }
}
