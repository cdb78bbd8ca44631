pub mod arc_2d;
pub mod polygon_2d;
pub mod vector_2d;

use std::cmp::Ordering;

pub use vector_2d::Vector2Ext;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
///
/// Every tangency, containment and angle-tie decision goes through this one
/// value; mixing epsilons reclassifies tangent pairs.
pub const TOLERANCE: f64 = 1e-9;

/// Sign of `x`, treating `|x| <= TOLERANCE` as zero.
#[must_use]
pub fn sign(x: f64) -> Ordering {
    if x < -TOLERANCE {
        Ordering::Less
    } else if x > TOLERANCE {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

/// Returns `true` if `x` is zero within [`TOLERANCE`].
#[must_use]
pub fn is_zero(x: f64) -> bool {
    sign(x) == Ordering::Equal
}
