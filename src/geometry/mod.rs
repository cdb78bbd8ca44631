mod chord;
mod circle;

pub use chord::Chord;
pub use circle::{Circle, CirclePosition};
