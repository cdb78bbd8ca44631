use std::cmp::Ordering;
use std::f64::consts::PI;

use crate::error::Result;
use crate::geometry::{Circle, CirclePosition};
use crate::math::arc_2d::{arc_length, segment_area};
use crate::math::polygon_2d::shoelace_term;
use crate::math::{is_zero, sign};

use super::event::{sort_events, EventKind, SweepEvent};

/// A piece of a circle's boundary not covered by any other circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExposedArc {
    /// Index of the owning circle in the swept slice.
    pub circle: usize,
    /// Radius of the owning circle.
    pub radius: f64,
    /// Polar angle where the arc begins.
    pub start_angle: f64,
    /// Counter-clockwise extent of the arc in radians.
    pub sweep: f64,
}

impl ExposedArc {
    /// Length of the arc.
    #[must_use]
    pub fn length(&self) -> f64 {
        arc_length(self.radius, self.sweep)
    }
}

/// Contribution of one circle to the union.
#[derive(Debug, Clone, Default)]
pub struct CircleSweep {
    /// Signed area term of this circle's exposed boundary. Only the sum over
    /// all circles is meaningful.
    pub area: f64,
    pub exposed_arcs: Vec<ExposedArc>,
}

/// Sweeps the boundary of `circles[index]` against every other circle.
///
/// The area of the union is the integral over its boundary. Each exposed arc
/// contributes its circular segment plus the shoelace triangle spanned by its
/// endpoints and the origin.
///
/// Circles must already be pruned: no circle may lie inside another.
///
/// # Errors
///
/// Returns an error if a chord cannot be constructed.
///
/// # Panics
///
/// Panics if `index` is out of bounds.
pub fn sweep_circle(circles: &[Circle], index: usize) -> Result<CircleSweep> {
    let circle = &circles[index];
    let anchor = circle.leftmost_point();

    let mut events = Vec::with_capacity(2 * circles.len());
    events.push(SweepEvent::open(-PI, anchor));

    // Other circles whose covering arc wraps through the seam at +-pi are
    // active before the first event.
    let mut coverage = 0;
    for (j, other) in circles.iter().enumerate() {
        if j == index || circle.position(other) != CirclePosition::Intersecting {
            continue;
        }
        let chord = circle.chord(other)?;
        let (start, end) = chord.angles_around(circle.center());
        if sign(start - end) == Ordering::Greater {
            coverage += 1;
        }
        events.push(SweepEvent::open(start, chord.start));
        events.push(SweepEvent::close(end, chord.end));
    }
    events.push(SweepEvent::close(PI, anchor));
    sort_events(&mut events);

    tracing::trace!(circle = index, events = events.len(), "sweeping circle boundary");

    let mut result = CircleSweep::default();
    let mut prev_angle = -PI;
    let mut prev_point = anchor;
    for event in &events {
        coverage += event.kind.delta();
        // The sentinel pair keeps coverage at 1 along exposed stretches.
        let closes_exposed =
            coverage == 0 || (coverage == 2 && event.kind == EventKind::Open);
        if closes_exposed {
            let sweep = event.angle - prev_angle;
            result.area +=
                segment_area(circle.radius(), sweep) + shoelace_term(&prev_point, &event.point);
            if !is_zero(sweep) {
                result.exposed_arcs.push(ExposedArc {
                    circle: index,
                    radius: circle.radius(),
                    start_angle: prev_angle,
                    sweep,
                });
            }
        }
        prev_angle = event.angle;
        prev_point = event.point;
    }

    Ok(result)
}
