//! 2D vector value type
//!
//! `Vector2` is a plain `Copy` value: every operation returns a new
//! vector and nothing is ever mutated through a reference.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Neg, Sub};

/// A point or direction in canvas pixel space
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    pub const ZERO: Vector2 = Vector2 { x: 0.0, y: 0.0 };

    /// Create a new vector
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn add(self, other: Vector2) -> Vector2 {
        Vector2::new(self.x + other.x, self.y + other.y)
    }

    pub fn subtract(self, other: Vector2) -> Vector2 {
        Vector2::new(self.x - other.x, self.y - other.y)
    }

    pub fn scale(self, k: f64) -> Vector2 {
        Vector2::new(self.x * k, self.y * k)
    }

    /// Euclidean length
    pub fn length(self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Unit vector in the same direction.
    ///
    /// A zero-length vector normalizes to `(0, 0)`.
    pub fn normalize(self) -> Vector2 {
        let len = self.length();
        if len == 0.0 {
            return Vector2::ZERO;
        }
        Vector2::new(self.x / len, self.y / len)
    }

    /// Distance between two points
    pub fn distance(self, other: Vector2) -> f64 {
        self.subtract(other).length()
    }

    /// Rotate counter-clockwise by `angle` radians
    pub fn rotate(self, angle: f64) -> Vector2 {
        let (sin, cos) = angle.sin_cos();
        Vector2::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }

    /// Z component of the 3D cross product
    pub fn cross(self, other: Vector2) -> f64 {
        self.x * other.y - self.y * other.x
    }
}

impl Add for Vector2 {
    type Output = Vector2;

    fn add(self, rhs: Vector2) -> Vector2 {
        Vector2::add(self, rhs)
    }
}

impl Sub for Vector2 {
    type Output = Vector2;

    fn sub(self, rhs: Vector2) -> Vector2 {
        self.subtract(rhs)
    }
}

impl Mul<f64> for Vector2 {
    type Output = Vector2;

    fn mul(self, k: f64) -> Vector2 {
        self.scale(k)
    }
}

impl Neg for Vector2 {
    type Output = Vector2;

    fn neg(self) -> Vector2 {
        self.scale(-1.0)
    }
}

impl From<(f64, f64)> for Vector2 {
    fn from((x, y): (f64, f64)) -> Self {
        Vector2::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_arithmetic() {
        let a = Vector2::new(3.0, 4.0);
        let b = Vector2::new(1.0, -2.0);

        assert_eq!(a.add(b), Vector2::new(4.0, 2.0));
        assert_eq!(a.subtract(b), Vector2::new(2.0, 6.0));
        assert_eq!(a.scale(0.5), Vector2::new(1.5, 2.0));
        assert_eq!(a + b, a.add(b));
        assert_eq!(a - b, a.subtract(b));
        assert_eq!(-a, Vector2::new(-3.0, -4.0));
    }

    #[test]
    fn test_length_and_normalize() {
        let v = Vector2::new(3.0, 4.0);
        assert_eq!(v.length(), 5.0);

        let n = v.normalize();
        assert!((n.length() - 1.0).abs() < 1e-12);
        assert!((n.x - 0.6).abs() < 1e-12);
        assert!((n.y - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_normalize_zero_is_zero() {
        // Degenerate case returns zero instead of NaN
        assert_eq!(Vector2::ZERO.normalize(), Vector2::ZERO);
    }

    #[test]
    fn test_rotate_quarter_turn() {
        let v = Vector2::new(1.0, 0.0).rotate(std::f64::consts::FRAC_PI_2);
        assert!(v.x.abs() < 1e-12);
        assert!((v.y - 1.0).abs() < 1e-12);
    }
}
