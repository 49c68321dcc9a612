//! HTML canvas drawing surface
//!
//! Implements `DrawSurface` over a `CanvasRenderingContext2d`.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use crate::error::{SimulationError, SimulationResult};
use crate::models::vector::Vector2;
use crate::models::viewport::Viewport;
use super::surface::{DrawSurface, StrokeStyle};

/// A canvas element and its 2D context
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Acquire the 2D context of `canvas`
    pub fn new(canvas: HtmlCanvasElement) -> SimulationResult<Self> {
        let context = canvas
            .get_context("2d")
            .map_err(|e| SimulationError::from_js(&e))?
            .ok_or(SimulationError::ContextUnavailable)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| SimulationError::ContextUnavailable)?;

        Ok(Self { canvas, context })
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    /// Match the backing store to the element's CSS box.
    ///
    /// Returns the new viewport.
    pub fn fit_to_client(&self) -> Viewport {
        let width = self.canvas.client_width().max(0) as u32;
        let height = self.canvas.client_height().max(0) as u32;

        if width > 0 && height > 0 {
            self.canvas.set_width(width);
            self.canvas.set_height(height);
        }

        self.viewport()
    }

    fn apply_stroke(&self, style: &StrokeStyle) {
        #[allow(deprecated)]
        self.context.set_stroke_style(&JsValue::from_str(&style.color));
        self.context.set_line_width(style.width);

        let dash = js_sys::Array::new();
        for segment in &style.dash {
            dash.push(&JsValue::from_f64(*segment));
        }
        if let Err(e) = self.context.set_line_dash(&dash) {
            log::warn!("setLineDash failed: {:?}", e);
        }
    }

    fn trace(&self, points: &[Vector2]) {
        let mut iter = points.iter();
        if let Some(first) = iter.next() {
            self.context.move_to(first.x, first.y);
            for point in iter {
                self.context.line_to(point.x, point.y);
            }
        }
    }
}

impl DrawSurface for CanvasSurface {
    fn viewport(&self) -> Viewport {
        Viewport::new(self.canvas.width() as f64, self.canvas.height() as f64)
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: &str) {
        #[allow(deprecated)]
        self.context.set_fill_style(&JsValue::from_str(color));
        self.context.fill_rect(x, y, width, height);
    }

    fn stroke_polyline(&mut self, points: &[Vector2], style: &StrokeStyle) {
        if points.len() < 2 {
            return;
        }
        self.apply_stroke(style);
        self.context.begin_path();
        self.trace(points);
        self.context.stroke();
    }

    fn fill_polygon(&mut self, points: &[Vector2], color: &str) {
        if points.len() < 3 {
            return;
        }
        #[allow(deprecated)]
        self.context.set_fill_style(&JsValue::from_str(color));
        self.context.begin_path();
        self.trace(points);
        self.context.close_path();
        self.context.fill();
    }

    fn fill_circle(&mut self, center: Vector2, radius: f64, color: &str) {
        #[allow(deprecated)]
        self.context.set_fill_style(&JsValue::from_str(color));
        self.context.begin_path();
        if let Err(e) = self
            .context
            .arc(center.x, center.y, radius, 0.0, std::f64::consts::TAU)
        {
            log::warn!("arc failed for marker at ({}, {}): {:?}", center.x, center.y, e);
            return;
        }
        self.context.fill();
    }
}
