use std::fmt::Debug;
use std::sync::Arc;
use log::debug;
use num_traits::{Float, Zero};

use crate::algorithm::{AllPairsResult, DistanceMatrix, Reweighting};
use crate::execution::worker_pool::WorkerPool;
use crate::execution::ExecutionStrategy;
use crate::graph::{Graph, WeightedDigraph};
use crate::Result;

/// Runs one task per source vertex on a fixed-size [`WorkerPool`].
///
/// Tasks share the reweighted graph read-only. Each task builds the row of
/// its own source and hands it back through its completion handle, so no two
/// tasks ever touch the same row.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConcurrentStrategy {
    /// Worker count, 0 means detect
    threads: usize,
}

impl ConcurrentStrategy {
    /// Creates a strategy sized to the detected hardware parallelism
    pub fn new() -> Self {
        ConcurrentStrategy { threads: 0 }
    }

    /// Overrides the worker count; 0 restores detection
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    /// Worker count the next execution will use
    pub fn thread_count(&self) -> usize {
        if self.threads == 0 {
            WorkerPool::optimal_thread_count()
        } else {
            self.threads
        }
    }
}

impl<W> ExecutionStrategy<W> for ConcurrentStrategy
where
    W: Float + Zero + Debug + Copy + Send + Sync + 'static,
{
    fn name(&self) -> &'static str {
        "Concurrent"
    }

    fn execute(&self, graph: &WeightedDigraph<W>) -> Result<AllPairsResult<W>> {
        let n = graph.vertex_count();
        let Some(reweighting) = Reweighting::compute(graph)? else {
            return Ok(AllPairsResult::degenerate(n));
        };
        let reweighting = Arc::new(reweighting);

        let pool = WorkerPool::new(self.thread_count())?;
        debug!(
            "concurrent johnson over {} sources on {} workers",
            n,
            pool.thread_count()
        );

        let mut handles = Vec::with_capacity(n);
        for source in 0..n {
            let reweighting = Arc::clone(&reweighting);
            handles.push(pool.submit(move || reweighting.distances_from(source))?);
        }

        let mut rows = vec![Vec::new(); n];
        for (source, handle) in handles.into_iter().enumerate() {
            rows[source] = handle.join()??;
        }
        pool.shutdown();

        Ok(AllPairsResult::solved(DistanceMatrix::from_rows(rows)?))
    }
}
