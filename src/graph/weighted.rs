use crate::graph::traits::{Graph, MutableGraph};
use crate::{Error, Result};
use log::warn;
use num_traits::{Float, Zero};
use std::fmt::Debug;

/// An outgoing edge; the source vertex is implied by the adjacency slot
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge<W> {
    /// Destination vertex
    pub dest: usize,

    /// Edge weight, negative values allowed
    pub weight: W,
}

impl<W> Edge<W> {
    pub fn new(dest: usize, weight: W) -> Self {
        Edge { dest, weight }
    }
}

/// A directed multigraph with a fixed vertex count, stored as adjacency lists
#[derive(Debug, Clone)]
pub struct WeightedDigraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Outgoing edges for each vertex, in insertion order
    adjacency: Vec<Vec<Edge<W>>>,

    /// Total number of edges across all adjacency lists
    edge_count: usize,
}

impl<W> WeightedDigraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Creates a graph with `vertices` vertices and no edges
    pub fn new(vertices: usize) -> Self {
        WeightedDigraph {
            adjacency: vec![Vec::new(); vertices],
            edge_count: 0,
        }
    }

    /// Builds a graph from `(source, destination, weight)` triples.
    ///
    /// Fails on the first out-of-range endpoint or non-finite weight.
    pub fn from_edges<I>(vertices: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, W)>,
    {
        let mut graph = WeightedDigraph::new(vertices);
        for (from, to, weight) in edges {
            graph.add_edge(from, to, weight)?;
        }
        Ok(graph)
    }

    /// Smallest edge weight in the graph, if it has any edges
    pub fn min_weight(&self) -> Option<W> {
        self.adjacency
            .iter()
            .flatten()
            .map(|e| e.weight)
            .fold(None, |acc, w| match acc {
                Some(m) if m <= w => Some(m),
                _ => Some(w),
            })
    }

    /// Returns a copy with one extra vertex `V` that has a zero-weight edge
    /// to every original vertex.
    pub fn with_virtual_source(&self) -> (Self, usize) {
        let source = self.adjacency.len();
        let mut adjacency = self.adjacency.clone();
        adjacency.push((0..source).map(|v| Edge::new(v, W::zero())).collect());
        let graph = WeightedDigraph {
            adjacency,
            edge_count: self.edge_count + source,
        };
        (graph, source)
    }

    /// Returns a copy with every edge weight replaced by `f(source, edge)`
    pub fn map_weights<F>(&self, mut f: F) -> Self
    where
        F: FnMut(usize, &Edge<W>) -> W,
    {
        let adjacency = self
            .adjacency
            .iter()
            .enumerate()
            .map(|(u, edges)| edges.iter().map(|e| Edge::new(e.dest, f(u, e))).collect())
            .collect();
        WeightedDigraph {
            adjacency,
            edge_count: self.edge_count,
        }
    }
}

impl<W> Graph<W> for WeightedDigraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn edges_from(&self, vertex: usize) -> &[Edge<W>] {
        self.adjacency.get(vertex).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl<W> MutableGraph<W> for WeightedDigraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn add_edge(&mut self, from: usize, to: usize, weight: W) -> Result<()> {
        if !self.has_vertex(from) || !self.has_vertex(to) {
            warn!(
                "rejecting edge {} -> {}: vertices must be in range [0, {})",
                from,
                to,
                self.vertex_count()
            );
            return Err(Error::InvalidEdge(from, to));
        }
        if !weight.is_finite() {
            warn!("rejecting edge {} -> {}: weight {:?} is not finite", from, to, weight);
            return Err(Error::NonFiniteWeight(from, to));
        }

        self.adjacency[from].push(Edge::new(to, weight));
        self.edge_count += 1;
        Ok(())
    }
}
