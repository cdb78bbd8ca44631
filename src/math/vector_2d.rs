//! 2D vector utilities on top of `nalgebra`.
//!
//! Rotation follows the usual right-hand convention: `rotate_ccw` turns the
//! vector counter-clockwise, `rotate_cw` clockwise. The `(cos, sin)` forms let
//! callers reuse one precomputed pair for both rotation directions. The scalar
//! cross product is nalgebra's `perp`.

use std::f64::consts::PI;

use super::{Vector2, TOLERANCE};
use crate::error::{GeometryError, Result};

/// Extension methods for [`Vector2`].
pub trait Vector2Ext: Sized {
    /// Rotates counter-clockwise by the angle whose cosine and sine are given.
    #[must_use]
    fn rotate_ccw(&self, cos: f64, sin: f64) -> Self;

    /// Rotates clockwise by the angle whose cosine and sine are given.
    #[must_use]
    fn rotate_cw(&self, cos: f64, sin: f64) -> Self;

    /// Rotates counter-clockwise by `theta` radians.
    #[must_use]
    fn rotated_ccw(&self, theta: f64) -> Self {
        self.rotate_ccw(theta.cos(), theta.sin())
    }

    /// Rotates clockwise by `theta` radians.
    #[must_use]
    fn rotated_cw(&self, theta: f64) -> Self {
        self.rotate_cw(theta.cos(), theta.sin())
    }

    /// Polar angle in `(-pi, pi]`. The zero vector yields `0`.
    #[must_use]
    fn polar_angle(&self) -> f64;

    /// Returns the vector rescaled to the given length.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ZeroVector` if the vector has (near) zero length.
    fn with_length(&self, length: f64) -> Result<Self>;
}

impl Vector2Ext for Vector2 {
    fn rotate_ccw(&self, cos: f64, sin: f64) -> Self {
        Vector2::new(self.x * cos - self.y * sin, self.y * cos + self.x * sin)
    }

    fn rotate_cw(&self, cos: f64, sin: f64) -> Self {
        Vector2::new(self.x * cos + self.y * sin, self.y * cos - self.x * sin)
    }

    fn polar_angle(&self) -> f64 {
        let angle = self.y.atan2(self.x);
        // atan2 reports -pi for a -0.0 y component.
        if angle <= -PI {
            PI
        } else {
            angle
        }
    }

    fn with_length(&self, length: f64) -> Result<Self> {
        let norm = self.norm();
        if norm < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        Ok(self / norm * length)
    }
}
