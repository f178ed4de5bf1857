use crate::graph::{MutableGraph, WeightedDigraph};
use ordered_float::OrderedFloat;
use rand::prelude::*;

/// Lower bound (inclusive) of generated edge weights
pub const MIN_WEIGHT: f64 = -10.0;
/// Upper bound (exclusive) of generated edge weights
pub const MAX_WEIGHT: f64 = 100.0;

/// Generates a random multigraph by drawing `V*V*density` vertex pairs.
///
/// Self-loop draws are skipped, repeated pairs become parallel edges.
/// Weights are uniform in `[MIN_WEIGHT, MAX_WEIGHT)`, so dense graphs
/// usually contain negative cycles.
pub fn generate_random_graph<R: Rng + ?Sized>(
    n: usize,
    density: f64,
    rng: &mut R,
) -> WeightedDigraph<OrderedFloat<f64>> {
    let mut graph = WeightedDigraph::new(n);
    if n == 0 {
        return graph;
    }

    let draws = (n as f64 * n as f64 * density) as usize;
    for _ in 0..draws {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u != v {
            let weight = OrderedFloat(rng.gen_range(MIN_WEIGHT..MAX_WEIGHT));
            // Endpoints are drawn in range
            let _ = graph.add_edge(u, v, weight);
        }
    }

    graph
}

/// Generates a complete digraph (every ordered pair `u != v`) with random weights
pub fn generate_complete_graph<R: Rng + ?Sized>(
    n: usize,
    rng: &mut R,
) -> WeightedDigraph<OrderedFloat<f64>> {
    let mut graph = WeightedDigraph::new(n);

    for u in 0..n {
        for v in 0..n {
            if u != v {
                let weight = OrderedFloat(rng.gen_range(MIN_WEIGHT..MAX_WEIGHT));
                let _ = graph.add_edge(u, v, weight);
            }
        }
    }

    graph
}

/// Generates a random graph with negative edges but no negative cycle.
///
/// Edges start with weights in `[0, MAX_WEIGHT)` and are shifted by a random
/// integer potential `p`: `w + p[u] - p[v]`. Every cycle keeps its original
/// non-negative length.
pub fn generate_potential_shifted_graph<R: Rng + ?Sized>(
    n: usize,
    density: f64,
    rng: &mut R,
) -> WeightedDigraph<OrderedFloat<f64>> {
    let mut graph = WeightedDigraph::new(n);
    if n == 0 {
        return graph;
    }

    let potential: Vec<f64> = (0..n).map(|_| rng.gen_range(-50..50) as f64).collect();
    let draws = (n as f64 * n as f64 * density) as usize;
    for _ in 0..draws {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u != v {
            let base = rng.gen_range(0..MAX_WEIGHT as i64) as f64;
            let _ = graph.add_edge(u, v, OrderedFloat(base + potential[u] - potential[v]));
        }
    }

    graph
}
