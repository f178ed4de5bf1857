use std::fmt::Debug;
use log::debug;
use num_traits::{Float, Zero};

use crate::algorithm::{AllPairsResult, DistanceMatrix, Reweighting};
use crate::execution::ExecutionStrategy;
use crate::graph::{Graph, WeightedDigraph};
use crate::Result;

/// Runs every source on the calling thread, in vertex order
#[derive(Debug, Default, Clone, Copy)]
pub struct SequentialStrategy;

impl SequentialStrategy {
    pub fn new() -> Self {
        SequentialStrategy
    }
}

impl<W> ExecutionStrategy<W> for SequentialStrategy
where
    W: Float + Zero + Debug + Copy,
{
    fn name(&self) -> &'static str {
        "Sequential"
    }

    fn execute(&self, graph: &WeightedDigraph<W>) -> Result<AllPairsResult<W>> {
        let n = graph.vertex_count();
        let Some(reweighting) = Reweighting::compute(graph)? else {
            return Ok(AllPairsResult::degenerate(n));
        };

        debug!("sequential johnson over {} sources", n);
        let rows = (0..n)
            .map(|source| reweighting.distances_from(source))
            .collect::<Result<Vec<_>>>()?;
        Ok(AllPairsResult::solved(DistanceMatrix::from_rows(rows)?))
    }
}
