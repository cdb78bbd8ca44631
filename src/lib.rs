pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;

pub use error::{CircleUnionError, Result};
pub use geometry::{Chord, Circle, CirclePosition};
pub use operations::union::{union_area, CircleUnion, ExposedArc, UnionArea, UnionParams};
