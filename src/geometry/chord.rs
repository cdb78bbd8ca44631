use crate::math::{Point2, Vector2Ext};

/// The common chord of two properly intersecting circles.
///
/// Endpoints are ordered with respect to the circle the chord was computed
/// from: walking that circle's boundary counter-clockwise from `start` to
/// `end` traces exactly the arc lying inside the other circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Chord {
    /// Intersection point reached by rotating the center line clockwise.
    pub start: Point2,
    /// Intersection point reached by rotating the center line counter-clockwise.
    pub end: Point2,
}

impl Chord {
    /// Creates a chord from its two endpoints.
    #[must_use]
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    /// Length of the chord.
    #[must_use]
    pub fn length(&self) -> f64 {
        (self.end - self.start).norm()
    }

    /// Polar angles of both endpoints around `center`, as `(start, end)`.
    #[must_use]
    pub fn angles_around(&self, center: &Point2) -> (f64, f64) {
        (
            (self.start - *center).polar_angle(),
            (self.end - *center).polar_angle(),
        )
    }
}
