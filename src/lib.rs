pub mod error;
pub mod kdtree;
pub mod majority;
pub mod mnist;
pub mod point;
pub mod render;

pub use error::{KnnError, Result};
pub use kdtree::{KdTree, Neighbor};
pub use point::LabeledPoint;
