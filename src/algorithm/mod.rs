pub mod traits;
pub mod bellman_ford;
pub mod dijkstra;
pub mod johnson;

pub use traits::{ShortestPathAlgorithm, ShortestPathResult};
pub use johnson::{AllPairsResult, DistanceMatrix, Reweighting};
