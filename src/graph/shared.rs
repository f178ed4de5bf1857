use crate::graph::traits::{Graph, MutableGraph};
use crate::graph::weighted::WeightedDigraph;
use crate::Result;
use num_traits::{Float, Zero};
use parking_lot::Mutex;
use std::fmt::Debug;

/// Build-phase graph that several threads may add edges to.
///
/// Once construction is over, [`SharedDigraph::freeze`] hands out the plain
/// [`WeightedDigraph`], which is read without any locking.
#[derive(Debug)]
pub struct SharedDigraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    inner: Mutex<WeightedDigraph<W>>,
}

impl<W> SharedDigraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Creates a builder for a graph with `vertices` vertices
    pub fn new(vertices: usize) -> Self {
        SharedDigraph {
            inner: Mutex::new(WeightedDigraph::new(vertices)),
        }
    }

    /// Adds an edge under the guard. See [`MutableGraph::add_edge`].
    pub fn add_edge(&self, from: usize, to: usize, weight: W) -> Result<()> {
        self.inner.lock().add_edge(from, to, weight)
    }

    pub fn vertex_count(&self) -> usize {
        self.inner.lock().vertex_count()
    }

    pub fn edge_count(&self) -> usize {
        self.inner.lock().edge_count()
    }

    /// Copies the edges added so far
    pub fn snapshot(&self) -> WeightedDigraph<W> {
        self.inner.lock().clone()
    }

    /// Ends the build phase and moves the adjacency lists out
    pub fn freeze(self) -> WeightedDigraph<W> {
        self.inner.into_inner()
    }
}

impl<W> From<WeightedDigraph<W>> for SharedDigraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn from(graph: WeightedDigraph<W>) -> Self {
        SharedDigraph {
            inner: Mutex::new(graph),
        }
    }
}
