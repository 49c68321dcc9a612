//! Scene rendering
//!
//! Draw routines for one frame: background, grid, curve, tangent arrows
//! and control markers. They read positions only and never touch rig state.

use serde::{Deserialize, Serialize};
use crate::models::bezier::CubicBezier;
use crate::models::config::RenderConfig;
use crate::models::vector::Vector2;
use crate::models::viewport::Viewport;
use super::surface::{DrawSurface, StrokeStyle};

/// Optional overlays toggled by the host
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct SceneOptions {
    pub show_tangents: bool,
    pub show_controls: bool,
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            show_tangents: true,
            show_controls: true,
        }
    }
}

/// Draw a complete frame
pub fn render_frame(
    surface: &mut dyn DrawSurface,
    viewport: Viewport,
    curve: &CubicBezier,
    options: SceneOptions,
    config: &RenderConfig,
) {
    draw_background(surface, viewport, config);
    draw_grid(surface, viewport, config);
    draw_curve(surface, curve, config);

    if options.show_tangents {
        draw_tangents(surface, curve, config);
    }

    if options.show_controls {
        draw_controls(surface, curve, config);
    }
}

pub fn draw_background(surface: &mut dyn DrawSurface, viewport: Viewport, config: &RenderConfig) {
    surface.fill_rect(0.0, 0.0, viewport.width, viewport.height, &config.palette.background);
}

/// Vertical and horizontal lines every `grid_spacing` pixels
pub fn draw_grid(surface: &mut dyn DrawSurface, viewport: Viewport, config: &RenderConfig) {
    if config.grid_spacing <= 0.0 {
        return;
    }

    let style = StrokeStyle::solid(&config.palette.grid, config.grid_line_width);

    let mut x = 0.0;
    while x <= viewport.width {
        surface.stroke_line(Vector2::new(x, 0.0), Vector2::new(x, viewport.height), &style);
        x += config.grid_spacing;
    }

    let mut y = 0.0;
    while y <= viewport.height {
        surface.stroke_line(Vector2::new(0.0, y), Vector2::new(viewport.width, y), &style);
        y += config.grid_spacing;
    }
}

/// The curve as a polyline through `curve_samples + 1` points
pub fn draw_curve(surface: &mut dyn DrawSurface, curve: &CubicBezier, config: &RenderConfig) {
    let points = curve.sample(config.curve_samples);
    let style = StrokeStyle::solid(&config.palette.curve, config.curve_line_width);
    surface.stroke_polyline(&points, &style);
}

/// Fixed-length arrows along the curve, centered on the curve point
pub fn draw_tangents(surface: &mut dyn DrawSurface, curve: &CubicBezier, config: &RenderConfig) {
    let style = StrokeStyle::solid(&config.palette.tangent, config.tangent_line_width);
    let half_length = config.tangent_length / 2.0;

    for t in CubicBezier::parameters(config.tangent_samples) {
        let direction = curve.tangent(t).normalize();
        // Degenerate (all points coincide): no direction to show
        if direction == Vector2::ZERO {
            continue;
        }

        let center = curve.evaluate(t);
        let start = center - direction * half_length;
        let tip = center + direction * half_length;
        surface.stroke_line(start, tip, &style);

        let head = arrow_head(tip, direction, config.arrow_size, config.arrow_half_angle_deg);
        surface.fill_polygon(&head, &config.palette.tangent);
    }
}

/// Triangle with its apex at `tip`, opening backwards along `direction`
pub fn arrow_head(tip: Vector2, direction: Vector2, size: f64, half_angle_deg: f64) -> [Vector2; 3] {
    let half_angle = half_angle_deg.to_radians();
    let back = -direction;
    [
        tip,
        tip + back.rotate(half_angle) * size,
        tip + back.rotate(-half_angle) * size,
    ]
}

/// Dashed guides P0 -> P1 and P3 -> P2, then a marker on every point
pub fn draw_controls(surface: &mut dyn DrawSurface, curve: &CubicBezier, config: &RenderConfig) {
    let [p0, p1, p2, p3] = curve.points;
    let guide = StrokeStyle::dashed(&config.palette.guide, config.guide_line_width, &config.guide_dash);

    surface.stroke_line(p0, p1, &guide);
    surface.stroke_line(p3, p2, &guide);

    for (index, point) in curve.points.iter().enumerate() {
        let fixed = index == 0 || index == 3;
        let (radius, color) = if fixed {
            (config.endpoint_radius, &config.palette.fixed_point)
        } else {
            (config.dynamic_radius, &config.palette.dynamic_point)
        };
        surface.fill_circle(*point, radius, color);
    }
}
