use crate::geometry::Circle;
use crate::math::is_zero;

/// Drops circles that cannot add area to the union.
///
/// Circles are visited largest first. A circle is discarded if its radius is
/// zero, if it lies inside (or touches from inside) a circle already kept, or
/// if it shares its center with one. The survivors are returned in the order
/// they were kept, i.e. by non-increasing radius.
#[must_use]
pub fn prune_circles(circles: &[Circle]) -> Vec<Circle> {
    let mut sorted = circles.to_vec();
    sorted.sort_by(|a, b| b.radius().total_cmp(&a.radius()));

    let mut kept: Vec<Circle> = Vec::with_capacity(sorted.len());
    for candidate in sorted {
        if is_zero(candidate.radius()) {
            // Everything after this is at most as large.
            break;
        }
        let redundant = kept.iter().any(|accepted| {
            candidate.position(accepted).is_internal()
                || is_zero((candidate.center() - accepted.center()).norm())
        });
        if !redundant {
            kept.push(candidate);
        }
    }
    kept
}
