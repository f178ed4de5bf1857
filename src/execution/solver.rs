use std::fmt::Debug;
use log::debug;
use num_traits::{Float, Zero};

use crate::algorithm::AllPairsResult;
use crate::execution::{ExecutionStrategy, Strategy};
use crate::graph::{SharedDigraph, WeightedDigraph};
use crate::Result;

/// Graph under construction plus the strategy used to solve it.
///
/// Edges may be added through `&self` from several threads. Each call to
/// [`AllPairsSolver::compute_all_pairs`] works on a snapshot, so later edge
/// additions never race with a running computation.
#[derive(Debug)]
pub struct AllPairsSolver<W>
where
    W: Float + Zero + Debug + Copy + Send + Sync + 'static,
{
    graph: SharedDigraph<W>,
    strategy: Box<dyn ExecutionStrategy<W>>,
}

impl<W> AllPairsSolver<W>
where
    W: Float + Zero + Debug + Copy + Send + Sync + 'static,
{
    /// Creates a solver for `vertices` vertices using the sequential strategy
    pub fn new(vertices: usize) -> Self {
        AllPairsSolver {
            graph: SharedDigraph::new(vertices),
            strategy: Box::new(Strategy::Sequential),
        }
    }

    /// Wraps an already built graph
    pub fn from_graph(graph: WeightedDigraph<W>) -> Self {
        AllPairsSolver {
            graph: SharedDigraph::from(graph),
            strategy: Box::new(Strategy::Sequential),
        }
    }

    /// Adds a directed edge. Out-of-range endpoints are reported and ignored.
    pub fn add_edge(&self, from: usize, to: usize, weight: W) -> Result<()> {
        self.graph.add_edge(from, to, weight)
    }

    /// Selects one of the built-in strategies
    pub fn select_strategy(&mut self, strategy: Strategy) {
        self.strategy = Box::new(strategy);
    }

    /// Installs any [`ExecutionStrategy`] implementation
    pub fn set_strategy(&mut self, strategy: Box<dyn ExecutionStrategy<W>>) {
        self.strategy = strategy;
    }

    /// Builder form of [`AllPairsSolver::select_strategy`]
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.select_strategy(strategy);
        self
    }

    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    pub fn vertex_count(&self) -> usize {
        self.graph.vertex_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Copy of the graph as it stands now
    pub fn graph(&self) -> WeightedDigraph<W> {
        self.graph.snapshot()
    }

    /// Computes the all-pairs distance matrix with the selected strategy
    pub fn compute_all_pairs(&self) -> Result<AllPairsResult<W>> {
        let snapshot = self.graph.snapshot();
        debug!(
            "computing all pairs for {} vertices with {} strategy",
            self.vertex_count(),
            self.strategy.name()
        );
        self.strategy.execute(&snapshot)
    }
}
