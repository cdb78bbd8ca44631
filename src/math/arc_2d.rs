//! Circular arc measures.

/// Area of the circular segment cut from a circle of `radius` by a chord
/// subtending `sweep` radians: `r^2 * (sweep - sin(sweep)) / 2`.
///
/// A full turn (`sweep = 2*pi`) gives the disk area.
#[must_use]
pub fn segment_area(radius: f64, sweep: f64) -> f64 {
    radius * radius * (sweep - sweep.sin()) / 2.0
}

/// Length of an arc of `radius` spanning `sweep` radians.
#[must_use]
pub fn arc_length(radius: f64, sweep: f64) -> f64 {
    radius * sweep
}
