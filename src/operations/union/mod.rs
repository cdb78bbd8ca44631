//! Area of the union of a set of circles.
//!
//! The computation runs in two phases. [`prune_circles`] drops every circle
//! that cannot add area (empty, nested, concentric or duplicated). Then each
//! surviving circle's boundary is swept by angle ([`sweep_circle`]) to find
//! the arcs no other circle covers; integrating along those arcs gives the
//! exact area.

mod event;
mod filter;
mod sweep;

pub use event::{sort_events, EventKind, SweepEvent};
pub use filter::prune_circles;
pub use sweep::{sweep_circle, CircleSweep, ExposedArc};

use crate::error::{OperationError, Result};
use crate::geometry::Circle;

/// Parameters controlling a union computation.
#[derive(Debug, Clone, Copy)]
pub struct UnionParams {
    /// Largest accepted number of input circles.
    pub max_circles: usize,
}

impl Default for UnionParams {
    fn default() -> Self {
        Self {
            max_circles: usize::MAX,
        }
    }
}

/// Result of a union computation.
#[derive(Debug, Clone, Default)]
pub struct UnionArea {
    /// Area covered by at least one circle.
    pub area: f64,
    /// The circles that contribute to the union, largest first.
    pub survivors: Vec<Circle>,
    /// Boundary arcs of the union. `ExposedArc::circle` indexes `survivors`.
    pub exposed_arcs: Vec<ExposedArc>,
}

impl UnionArea {
    /// Length of the union's boundary.
    #[must_use]
    pub fn perimeter(&self) -> f64 {
        self.exposed_arcs.iter().map(ExposedArc::length).sum()
    }
}

/// Computes the exact area of the union of circles.
///
/// Runs in `O(n^2 log n)` for `n` circles.
pub struct CircleUnion<'a> {
    circles: &'a [Circle],
    params: UnionParams,
}

impl<'a> CircleUnion<'a> {
    /// Creates a new `CircleUnion` operation with default parameters.
    #[must_use]
    pub fn new(circles: &'a [Circle]) -> Self {
        Self {
            circles,
            params: UnionParams::default(),
        }
    }

    /// Sets custom parameters.
    #[must_use]
    pub fn with_params(mut self, params: UnionParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the operation.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::TooManyCircles` if the input exceeds
    /// `UnionParams::max_circles`.
    pub fn execute(&self) -> Result<UnionArea> {
        if self.circles.len() > self.params.max_circles {
            return Err(OperationError::TooManyCircles {
                count: self.circles.len(),
                max: self.params.max_circles,
            }
            .into());
        }

        let survivors = prune_circles(self.circles);
        tracing::debug!(
            input = self.circles.len(),
            survivors = survivors.len(),
            "pruned redundant circles"
        );

        let mut result = UnionArea::default();
        for index in 0..survivors.len() {
            let sweep = sweep_circle(&survivors, index)?;
            result.area += sweep.area;
            result.exposed_arcs.extend(sweep.exposed_arcs);
        }
        result.survivors = survivors;

        tracing::debug!(area = result.area, arcs = result.exposed_arcs.len(), "circle union computed");
        Ok(result)
    }
}

/// Area of the union of `circles` with default parameters.
///
/// # Errors
///
/// Returns an error if the computation fails.
pub fn union_area(circles: &[Circle]) -> Result<f64> {
    Ok(CircleUnion::new(circles).execute()?.area)
}
