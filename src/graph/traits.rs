use std::fmt::Debug;
use num_traits::{Float, Zero};

use crate::graph::weighted::Edge;
use crate::Result;

/// Trait representing a weighted directed graph over dense vertex indices `0..V`
pub trait Graph<W>: Debug
where
    W: Float + Zero + Debug + Copy,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns a borrowed view of the outgoing edges of a vertex.
    ///
    /// Out-of-range vertices have no edges.
    fn edges_from(&self, vertex: usize) -> &[Edge<W>];

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count()
    }
}

/// Trait for graphs that accept new edges
pub trait MutableGraph<W>: Graph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Adds a directed edge between vertices with the given weight.
    ///
    /// Parallel edges are kept independently. Out-of-range endpoints leave
    /// the graph unchanged and return [`crate::Error::InvalidEdge`]; infinite
    /// or NaN weights return [`crate::Error::NonFiniteWeight`].
    fn add_edge(&mut self, from: usize, to: usize, weight: W) -> Result<()>;
}
