//! Cubic Bézier evaluation
//!
//! Closed-form position and first derivative of a cubic Bézier curve
//! defined by four control points. `t` is not clamped: values outside
//! `[0, 1]` extrapolate along the same polynomial.

use serde::{Deserialize, Serialize};
use super::vector::Vector2;

/// Point on the curve at parameter `t`
pub fn evaluate(t: f64, p0: Vector2, p1: Vector2, p2: Vector2, p3: Vector2) -> Vector2 {
    let u = 1.0 - t;
    let w0 = u * u * u;
    let w1 = 3.0 * u * u * t;
    let w2 = 3.0 * u * t * t;
    let w3 = t * t * t;

    Vector2::new(
        w0 * p0.x + w1 * p1.x + w2 * p2.x + w3 * p3.x,
        w0 * p0.y + w1 * p1.y + w2 * p2.y + w3 * p3.y,
    )
}

/// First derivative with respect to `t` (unnormalized)
pub fn tangent(t: f64, p0: Vector2, p1: Vector2, p2: Vector2, p3: Vector2) -> Vector2 {
    let u = 1.0 - t;
    let w0 = 3.0 * u * u;
    let w1 = 6.0 * u * t;
    let w2 = 3.0 * t * t;

    let d0 = p1 - p0;
    let d1 = p2 - p1;
    let d2 = p3 - p2;

    Vector2::new(
        w0 * d0.x + w1 * d1.x + w2 * d2.x,
        w0 * d0.y + w1 * d1.y + w2 * d2.y,
    )
}

/// A cubic Bézier curve as a value
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct CubicBezier {
    pub points: [Vector2; 4],
}

impl CubicBezier {
    pub fn new(p0: Vector2, p1: Vector2, p2: Vector2, p3: Vector2) -> Self {
        Self { points: [p0, p1, p2, p3] }
    }

    pub fn evaluate(&self, t: f64) -> Vector2 {
        let [p0, p1, p2, p3] = self.points;
        evaluate(t, p0, p1, p2, p3)
    }

    pub fn tangent(&self, t: f64) -> Vector2 {
        let [p0, p1, p2, p3] = self.points;
        tangent(t, p0, p1, p2, p3)
    }

    /// Parameters `0, 1/n, ..., 1` (n + 1 values).
    ///
    /// `n == 0` yields the single parameter `0`.
    pub fn parameters(n: usize) -> impl Iterator<Item = f64> {
        (0..=n).map(move |i| if n == 0 { 0.0 } else { i as f64 / n as f64 })
    }

    /// Sample `n + 1` evenly spaced points along the curve
    pub fn sample(&self, n: usize) -> Vec<Vector2> {
        Self::parameters(n).map(|t| self.evaluate(t)).collect()
    }
}
