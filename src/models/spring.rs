//! Damped spring point
//!
//! A single 2D point pulled toward a movable target by a spring and
//! slowed by a velocity-proportional damper. Integration is semi-implicit
//! Euler: velocity first, then position from the new velocity.

use serde::{Deserialize, Serialize};
use super::config::SpringConfig;
use super::vector::Vector2;

/// A spring-driven control point
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SpringPoint {
    position: Vector2,
    velocity: Vector2,
    target: Vector2,
    fixed: bool,
    spring_constant: f64,
    damping: f64,
}

impl SpringPoint {
    /// Create a point at rest on its own target
    pub fn new(position: Vector2, fixed: bool, spring: &SpringConfig) -> Self {
        Self {
            position,
            velocity: Vector2::ZERO,
            target: position,
            fixed,
            spring_constant: spring.spring_constant,
            damping: spring.damping,
        }
    }

    /// Create a fixed point with default constants
    pub fn fixed(position: Vector2) -> Self {
        Self::new(position, true, &SpringConfig::default())
    }

    /// Create a dynamic point with default constants
    pub fn dynamic(position: Vector2) -> Self {
        Self::new(position, false, &SpringConfig::default())
    }

    pub fn position(&self) -> Vector2 {
        self.position
    }

    pub fn velocity(&self) -> Vector2 {
        self.velocity
    }

    pub fn target(&self) -> Vector2 {
        self.target
    }

    pub fn is_fixed(&self) -> bool {
        self.fixed
    }

    pub fn spring_constant(&self) -> f64 {
        self.spring_constant
    }

    pub fn damping(&self) -> f64 {
        self.damping
    }

    /// Replace the target. Fixed points store it but never move toward it.
    pub fn set_target(&mut self, x: f64, y: f64) {
        self.target = Vector2::new(x, y);
    }

    /// Advance one integration step of `delta_time` nominal frames
    pub fn update(&mut self, delta_time: f64) {
        if self.fixed {
            return;
        }

        let displacement = self.position - self.target;
        let spring_force = displacement * -self.spring_constant;
        let damping_force = self.velocity * -self.damping;
        let acceleration = spring_force + damping_force;

        self.velocity = self.velocity + acceleration * delta_time;
        self.position = self.position + self.velocity * delta_time;
    }

    /// Distance from the current position to the target
    pub fn distance_to_target(&self) -> f64 {
        self.position.distance(self.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_point_ignores_target() {
        let mut point = SpringPoint::fixed(Vector2::new(10.0, 20.0));
        point.set_target(500.0, 500.0);
        for _ in 0..50 {
            point.update(1.0);
        }
        assert_eq!(point.position(), Vector2::new(10.0, 20.0));
        assert_eq!(point.velocity(), Vector2::ZERO);
        // Target is still stored
        assert_eq!(point.target(), Vector2::new(500.0, 500.0));
    }

    #[test]
    fn test_single_step_values() {
        let mut point = SpringPoint::dynamic(Vector2::new(0.0, 0.0));
        point.set_target(100.0, 0.0);
        point.update(1.0);

        // acceleration = -0.15 * (0 - 100) = 15
        assert!((point.velocity().x - 15.0).abs() < 1e-12);
        assert!((point.position().x - 15.0).abs() < 1e-12);
        assert_eq!(point.position().y, 0.0);
    }

    #[test]
    fn test_equilibrium_is_stable() {
        let mut point = SpringPoint::dynamic(Vector2::new(42.0, -7.0));
        point.update(1.0);
        assert_eq!(point.position(), Vector2::new(42.0, -7.0));
        assert_eq!(point.velocity(), Vector2::ZERO);
    }

    #[test]
    fn test_zero_delta_is_noop() {
        let mut point = SpringPoint::dynamic(Vector2::new(0.0, 0.0));
        point.set_target(10.0, 10.0);
        point.update(0.0);
        assert_eq!(point.position(), Vector2::ZERO);
    }
}
