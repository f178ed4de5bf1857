//! Strategies that fan out one Dijkstra run per source vertex.

pub mod sequential;
pub mod concurrent;
pub mod worker_pool;
pub mod solver;

use std::fmt::Debug;
use num_traits::{Float, Zero};

use crate::algorithm::AllPairsResult;
use crate::graph::WeightedDigraph;
use crate::Result;

pub use concurrent::ConcurrentStrategy;
pub use sequential::SequentialStrategy;
pub use solver::AllPairsSolver;
pub use worker_pool::{TaskHandle, WorkerPool};

/// How Johnson's per-source passes are executed.
///
/// Every implementation returns the same matrix for the same graph.
pub trait ExecutionStrategy<W>: Debug + Send + Sync
where
    W: Float + Zero + Debug + Copy,
{
    /// Computes all-pairs distances of `graph`.
    ///
    /// A negative cycle yields an all-infinite matrix with the flag set, not an error.
    fn execute(&self, graph: &WeightedDigraph<W>) -> Result<AllPairsResult<W>>;

    /// Get the name of the strategy
    fn name(&self) -> &'static str;
}

/// Strategy selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// One source at a time on the calling thread
    #[default]
    Sequential,

    /// One task per source on a worker pool; `threads == 0` detects the hardware parallelism
    Concurrent { threads: usize },
}

impl Strategy {
    /// Concurrent strategy sized to the host
    pub fn concurrent() -> Self {
        Strategy::Concurrent { threads: 0 }
    }
}

impl<W> ExecutionStrategy<W> for Strategy
where
    W: Float + Zero + Debug + Copy + Send + Sync + 'static,
{
    fn execute(&self, graph: &WeightedDigraph<W>) -> Result<AllPairsResult<W>> {
        match *self {
            Strategy::Sequential => SequentialStrategy::new().execute(graph),
            Strategy::Concurrent { threads } => {
                ConcurrentStrategy::new().with_threads(threads).execute(graph)
            }
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Strategy::Sequential => "Sequential",
            Strategy::Concurrent { .. } => "Concurrent",
        }
    }
}
