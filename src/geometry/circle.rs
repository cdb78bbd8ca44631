use std::cmp::Ordering;
use std::f64::consts::PI;

use crate::error::{GeometryError, Result};
use crate::math::{sign, Point2, Vector2, Vector2Ext};

use super::Chord;

/// Relative position of two circles, decided with the shared tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CirclePosition {
    /// One circle lies strictly inside the other.
    Nested,
    /// The smaller circle touches the larger one from inside. Identical
    /// circles fall here as well.
    InternallyTangent,
    /// The boundaries cross at two distinct points.
    Intersecting,
    /// The circles touch from outside at a single point.
    ExternallyTangent,
    /// The circles are apart.
    Disjoint,
}

impl CirclePosition {
    /// Integer code of the relation, from `-2` (nested) to `2` (disjoint).
    #[must_use]
    pub fn code(self) -> i8 {
        match self {
            Self::Nested => -2,
            Self::InternallyTangent => -1,
            Self::Intersecting => 0,
            Self::ExternallyTangent => 1,
            Self::Disjoint => 2,
        }
    }

    /// Returns `true` if one disk covers the other (nested or internally tangent).
    #[must_use]
    pub fn is_internal(self) -> bool {
        self.code() < 0
    }
}

/// A circle in the plane, given by center and radius.
///
/// A zero radius is allowed; such circles enclose no area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    center: Point2,
    radius: f64,
}

impl Circle {
    /// Creates a new circle.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is negative or any coordinate is not finite.
    pub fn new(center: Point2, radius: f64) -> Result<Self> {
        for (what, value) in [("center x", center.x), ("center y", center.y), ("radius", radius)] {
            if !value.is_finite() {
                return Err(GeometryError::NonFinite { what, value }.into());
            }
        }
        if radius < 0.0 {
            return Err(GeometryError::NegativeRadius { radius }.into());
        }
        Ok(Self { center, radius })
    }

    /// Returns the center of the circle.
    #[must_use]
    pub fn center(&self) -> &Point2 {
        &self.center
    }

    /// Returns the radius of the circle.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Area of the disk.
    #[must_use]
    pub fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    /// Circumference of the circle.
    #[must_use]
    pub fn perimeter(&self) -> f64 {
        2.0 * PI * self.radius
    }

    /// The boundary point at polar angle `pi` (smallest x).
    #[must_use]
    pub fn leftmost_point(&self) -> Point2 {
        self.center - Vector2::new(self.radius, 0.0)
    }

    /// Returns `true` if `point` lies in the closed disk, up to tolerance.
    #[must_use]
    pub fn contains_point(&self, point: &Point2) -> bool {
        sign((point - self.center).norm() - self.radius) != Ordering::Greater
    }

    /// Returns the circle moved by `offset`.
    #[must_use]
    pub fn translated(&self, offset: &Vector2) -> Self {
        Self {
            center: self.center + offset,
            radius: self.radius,
        }
    }

    /// Returns the circle scaled about the origin by `factor`.
    ///
    /// # Errors
    ///
    /// Returns an error if the scaled circle would be invalid (negative or
    /// non-finite factor).
    pub fn scaled(&self, factor: f64) -> Result<Self> {
        Self::new(self.center * factor, self.radius * factor)
    }

    /// Classifies the position of `other` relative to this circle.
    #[must_use]
    pub fn position(&self, other: &Circle) -> CirclePosition {
        let d = (self.center - other.center).norm();
        let inner = sign(d - (self.radius - other.radius).abs());
        let outer = sign(d - (self.radius + other.radius));
        match (inner, outer) {
            (Ordering::Less, _) => CirclePosition::Nested,
            (Ordering::Equal, _) => CirclePosition::InternallyTangent,
            (_, Ordering::Equal) => CirclePosition::ExternallyTangent,
            (_, Ordering::Greater) => CirclePosition::Disjoint,
            (_, Ordering::Less) => CirclePosition::Intersecting,
        }
    }

    /// Computes the common chord with `other`.
    ///
    /// The endpoints are found by turning the center line by the angle from
    /// the law of cosines, clockwise for [`Chord::start`] and counter-clockwise
    /// for [`Chord::end`].
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` unless the circles properly intersect.
    pub fn chord(&self, other: &Circle) -> Result<Chord> {
        let position = self.position(other);
        if position != CirclePosition::Intersecting {
            return Err(GeometryError::Degenerate(format!(
                "circles do not cross at two points ({position:?})"
            ))
            .into());
        }

        let v = other.center - self.center;
        let d = v.norm();
        let cos = (self.radius * self.radius + d * d - other.radius * other.radius)
            / (2.0 * self.radius * d);
        // Near tangency cos can overshoot 1 by rounding.
        let sin = (1.0 - cos * cos).abs().sqrt();

        let start = self.center + v.rotate_cw(cos, sin).with_length(self.radius)?;
        let end = self.center + v.rotate_ccw(cos, sin).with_length(self.radius)?;
        Ok(Chord::new(start, end))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use crate::error::CircleUnionError;

    fn circle(x: f64, y: f64, r: f64) -> Circle {
        Circle::new(Point2::new(x, y), r).unwrap()
    }

    #[test]
    fn rejects_negative_radius() {
        let err = Circle::new(Point2::origin(), -1.0).unwrap_err();
        assert!(matches!(
            err,
            CircleUnionError::Geometry(GeometryError::NegativeRadius { .. })
        ));
    }

    #[test]
    fn rejects_non_finite() {
        assert!(Circle::new(Point2::new(f64::NAN, 0.0), 1.0).is_err());
        assert!(Circle::new(Point2::origin(), f64::INFINITY).is_err());
    }

    #[test]
    fn zero_radius_is_allowed() {
        let c = circle(1.0, 1.0, 0.0);
        assert_eq!(c.area(), 0.0);
    }

    #[test]
    fn position_nested() {
        let big = circle(0.0, 0.0, 5.0);
        let small = circle(1.0, 0.0, 1.0);
        assert_eq!(small.position(&big), CirclePosition::Nested);
        assert_eq!(big.position(&small), CirclePosition::Nested);
    }

    #[test]
    fn position_internally_tangent() {
        let big = circle(0.0, 0.0, 5.0);
        let small = circle(4.0, 0.0, 1.0);
        assert_eq!(small.position(&big), CirclePosition::InternallyTangent);
    }

    #[test]
    fn identical_circles_are_internally_tangent() {
        let a = circle(2.0, -3.0, 1.5);
        assert_eq!(a.position(&a), CirclePosition::InternallyTangent);
    }

    #[test]
    fn position_intersecting() {
        let a = circle(0.0, 0.0, 1.0);
        let b = circle(1.0, 0.0, 1.0);
        assert_eq!(a.position(&b), CirclePosition::Intersecting);
        assert_eq!(a.position(&b).code(), 0);
    }

    #[test]
    fn position_externally_tangent() {
        let a = circle(0.0, 0.0, 1.0);
        let b = circle(3.0, 0.0, 2.0);
        assert_eq!(a.position(&b), CirclePosition::ExternallyTangent);
    }

    #[test]
    fn tangency_within_tolerance() {
        let a = circle(0.0, 0.0, 1.0);
        let b = circle(2.0 + 5e-10, 0.0, 1.0);
        assert_eq!(a.position(&b), CirclePosition::ExternallyTangent);
        let c = circle(2.0 + 1e-6, 0.0, 1.0);
        assert_eq!(a.position(&c), CirclePosition::Disjoint);
    }

    #[test]
    fn position_disjoint() {
        let a = circle(0.0, 0.0, 1.0);
        let b = circle(5.0, 5.0, 1.0);
        assert_eq!(a.position(&b), CirclePosition::Disjoint);
        assert!(!a.position(&b).is_internal());
    }

    #[test]
    fn chord_of_unit_circles() {
        // Centers (0,0) and (1,0), radius 1: intersections at (0.5, +-sqrt(3)/2).
        let a = circle(0.0, 0.0, 1.0);
        let b = circle(1.0, 0.0, 1.0);
        let chord = a.chord(&b).unwrap();
        let h = 3.0_f64.sqrt() / 2.0;
        assert_abs_diff_eq!(chord.start.x, 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(chord.start.y, -h, epsilon = 1e-12);
        assert_abs_diff_eq!(chord.end.x, 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(chord.end.y, h, epsilon = 1e-12);
        assert_abs_diff_eq!(chord.length(), 2.0 * h, epsilon = 1e-12);
    }

    #[test]
    fn chord_endpoints_lie_on_both_circles() {
        let a = circle(1.0, 2.0, 3.0);
        let b = circle(4.0, 0.5, 2.0);
        let chord = a.chord(&b).unwrap();
        for p in [chord.start, chord.end] {
            assert_abs_diff_eq!((p - a.center()).norm(), 3.0, epsilon = 1e-9);
            assert_abs_diff_eq!((p - b.center()).norm(), 2.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn chord_start_precedes_end_counter_clockwise() {
        // Other circle straight above: covered arc runs from the right side to the left.
        let a = circle(0.0, 0.0, 1.0);
        let b = circle(0.0, 1.0, 1.0);
        let (start, end) = a.chord(&b).unwrap().angles_around(a.center());
        assert!(start < end);
        assert!(start > 0.0 && end < PI);
    }

    #[test]
    fn chord_requires_intersection() {
        let a = circle(0.0, 0.0, 1.0);
        let b = circle(2.0, 0.0, 1.0);
        assert!(a.chord(&b).is_err());
        let c = circle(0.0, 0.0, 0.5);
        assert!(a.chord(&c).is_err());
    }

    #[test]
    fn leftmost_point() {
        let c = circle(3.0, 4.0, 2.0);
        assert_eq!(c.leftmost_point(), Point2::new(1.0, 4.0));
    }

    #[test]
    fn contains_point_on_boundary() {
        let c = circle(0.0, 0.0, 1.0);
        assert!(c.contains_point(&Point2::new(1.0, 0.0)));
        assert!(c.contains_point(&Point2::new(0.3, 0.3)));
        assert!(!c.contains_point(&Point2::new(1.0, 1.0)));
    }

    #[test]
    fn translate_and_scale() {
        let c = circle(1.0, 1.0, 2.0);
        let t = c.translated(&Vector2::new(-1.0, 2.0));
        assert_eq!(*t.center(), Point2::new(0.0, 3.0));
        let s = c.scaled(3.0).unwrap();
        assert_eq!(*s.center(), Point2::new(3.0, 3.0));
        assert_abs_diff_eq!(s.radius(), 6.0);
        assert!(c.scaled(-1.0).is_err());
    }
}
