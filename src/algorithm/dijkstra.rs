use std::fmt::Debug;
use num_traits::{Float, Zero};

use crate::graph::Graph;
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::FibonacciHeap;
use crate::{Error, Result};

/// Dijkstra's algorithm driven by a Fibonacci heap
#[derive(Debug, Default)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }

    /// Computes the distance row for `source`.
    ///
    /// Assumes `source` is in range and every edge weight is non-negative;
    /// unreachable vertices stay at `W::infinity()`.
    pub fn distances_from<W, G>(&self, graph: &G, source: usize) -> Vec<W>
    where
        W: Float + Zero + Debug + Copy,
        G: Graph<W>,
    {
        let n = graph.vertex_count();
        let mut dist = vec![W::infinity(); n];
        if source >= n {
            return dist;
        }
        dist[source] = W::zero();

        let mut heap = FibonacciHeap::with_capacity(n);
        for v in 0..n {
            // Vertices are distinct, insert cannot fail
            let _ = heap.insert(v, dist[v]);
        }
        let mut processed = vec![false; n];

        while let Some((u, dist_u)) = heap.extract_min() {
            if processed[u] {
                continue;
            }
            processed[u] = true;

            // Everything left is unreachable
            if dist_u == W::infinity() {
                break;
            }

            for edge in graph.edges_from(u) {
                let v = edge.dest;
                if processed[v] {
                    continue;
                }

                let candidate = dist_u + edge.weight;
                if candidate < dist[v] {
                    dist[v] = candidate;
                    if heap.contains(v) {
                        let _ = heap.decrease_key(v, candidate);
                    }
                }
            }
        }

        dist
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dijkstra
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra (Fibonacci heap)"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        if !graph.has_vertex(source) {
            return Err(Error::SourceNotFound);
        }

        for u in 0..graph.vertex_count() {
            if let Some(edge) = graph.edges_from(u).iter().find(|e| e.weight < W::zero()) {
                return Err(Error::NegativeWeight(edge.weight.to_f64().unwrap_or(f64::NAN)));
            }
        }

        Ok(ShortestPathResult {
            distances: self.distances_from(graph, source),
            source,
        })
    }
}
