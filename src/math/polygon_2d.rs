use super::Point2;

/// One term of the shoelace formula: the signed area of the triangle
/// `(origin, a, b)`.
///
/// Summing this over the consecutive edges of a closed boundary yields the
/// enclosed signed area, independent of where the origin lies.
#[must_use]
pub fn shoelace_term(a: &Point2, b: &Point2) -> f64 {
    a.coords.perp(&b.coords) * 0.5
}
