use std::fmt::Debug;
use log::{debug, trace};
use num_traits::{Float, Zero};

use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::graph::Graph;
use crate::{Error, Result};

/// Bellman-Ford relaxation with early exit and negative cycle detection
#[derive(Debug, Default)]
pub struct BellmanFord;

/// Outcome of a Bellman-Ford run
#[derive(Debug, Clone)]
pub struct BellmanFordResult<W> {
    /// Distances from the source. Only meaningful when no negative cycle was found.
    pub distances: Vec<W>,

    /// True if some edge still relaxes after `V-1` passes
    pub has_negative_cycle: bool,
}

impl BellmanFord {
    /// Creates a new Bellman-Ford algorithm instance
    pub fn new() -> Self {
        BellmanFord
    }

    /// Runs up to `V-1` relaxation passes from `source`, then one detection pass.
    pub fn run<W, G>(&self, graph: &G, source: usize) -> Result<BellmanFordResult<W>>
    where
        W: Float + Zero + Debug + Copy,
        G: Graph<W>,
    {
        if !graph.has_vertex(source) {
            return Err(Error::SourceNotFound);
        }

        let n = graph.vertex_count();
        let mut dist = vec![W::infinity(); n];
        dist[source] = W::zero();

        for pass in 1..n {
            let mut updated = false;

            for u in 0..n {
                if dist[u] == W::infinity() {
                    continue;
                }
                for edge in graph.edges_from(u) {
                    let candidate = dist[u] + edge.weight;
                    if candidate < dist[edge.dest] {
                        dist[edge.dest] = candidate;
                        updated = true;
                    }
                }
            }

            if !updated {
                trace!("bellman-ford converged after {} passes", pass);
                break;
            }
        }

        let has_negative_cycle = (0..n).any(|u| {
            dist[u] != W::infinity()
                && graph
                    .edges_from(u)
                    .iter()
                    .any(|edge| dist[u] + edge.weight < dist[edge.dest])
        });

        if has_negative_cycle {
            debug!("negative cycle reachable from vertex {}", source);
        }

        Ok(BellmanFordResult {
            distances: dist,
            has_negative_cycle,
        })
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for BellmanFord
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Bellman-Ford"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        let result = self.run(graph, source)?;
        if result.has_negative_cycle {
            return Err(Error::NegativeCycle);
        }

        Ok(ShortestPathResult {
            distances: result.distances,
            source,
        })
    }
}
