//! Johnson APSP - All-pairs shortest paths with negative edge weights
//!
//! This library implements Johnson's algorithm: a Bellman-Ford pass from a
//! virtual source computes a potential that makes every edge weight
//! non-negative, then Dijkstra runs from each vertex using a Fibonacci heap
//! with amortized O(1) decrease-key. The per-source passes run either
//! sequentially or on a fixed-size worker pool.

pub mod algorithm;
pub mod data_structures;
pub mod execution;
pub mod graph;

pub use algorithm::{
    bellman_ford::BellmanFord, dijkstra::Dijkstra, AllPairsResult, DistanceMatrix, Reweighting,
    ShortestPathAlgorithm, ShortestPathResult,
};
pub use data_structures::FibonacciHeap;
pub use execution::{
    AllPairsSolver, ConcurrentStrategy, ExecutionStrategy, SequentialStrategy, Strategy,
    WorkerPool,
};
/// Re-export main types for convenient use
pub use graph::{SharedDigraph, WeightedDigraph};

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid vertex ID: {0}")]
    InvalidVertex(usize),

    #[error("Invalid edge: from {0} to {1}")]
    InvalidEdge(usize, usize),

    #[error("Edge {0} -> {1} has a non-finite weight")]
    NonFiniteWeight(usize, usize),

    #[error("Negative edge weight: {0}")]
    NegativeWeight(f64),

    #[error("Source vertex not found in graph")]
    SourceNotFound,

    #[error("Graph contains a negative-weight cycle")]
    NegativeCycle,

    #[error("Vertex {0} is not in the priority queue")]
    UnknownVertex(usize),

    #[error("Vertex {0} is already in the priority queue")]
    DuplicateVertex(usize),

    #[error("Worker pool has been shut down")]
    PoolShutdown,

    #[error("Failed to spawn worker thread: {0}")]
    WorkerSpawn(#[source] std::io::Error),

    #[error("Worker task failed: {0}")]
    TaskFailed(String),

    #[error("Algorithm execution error: {0}")]
    AlgorithmError(String),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
