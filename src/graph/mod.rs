pub mod traits;
pub mod weighted;
pub mod shared;
pub mod generators;

pub use traits::{Graph, MutableGraph};
pub use weighted::{Edge, WeightedDigraph};
pub use shared::SharedDigraph;
