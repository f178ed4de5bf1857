#![allow(dead_code)]

use johnson_apsp::graph::{Graph, MutableGraph, WeightedDigraph};

// Independent O(V^3) reference for all-pairs distances
pub fn floyd_warshall(graph: &WeightedDigraph<f64>) -> Vec<Vec<f64>> {
    let n = graph.vertex_count();
    let mut dist = vec![vec![f64::INFINITY; n]; n];

    for u in 0..n {
        dist[u][u] = 0.0;
        for edge in graph.edges_from(u) {
            if edge.weight < dist[u][edge.dest] {
                dist[u][edge.dest] = edge.weight;
            }
        }
    }

    for k in 0..n {
        for i in 0..n {
            if dist[i][k].is_infinite() {
                continue;
            }
            for j in 0..n {
                let through_k = dist[i][k] + dist[k][j];
                if through_k < dist[i][j] {
                    dist[i][j] = through_k;
                }
            }
        }
    }

    dist
}

// The 4-vertex example with negative edges and no negative cycle
pub fn clrs_graph() -> WeightedDigraph<f64> {
    let mut graph = WeightedDigraph::new(4);
    graph.add_edge(0, 1, 3.0).unwrap();
    graph.add_edge(0, 2, 8.0).unwrap();
    graph.add_edge(0, 3, -4.0).unwrap();
    graph.add_edge(1, 3, 1.0).unwrap();
    graph.add_edge(2, 1, 4.0).unwrap();
    graph.add_edge(3, 1, 7.0).unwrap();
    graph.add_edge(3, 2, -5.0).unwrap();
    graph
}

// Cycle 1 -> 2 -> 3 -> 1 with total weight -6
pub fn negative_cycle_graph() -> WeightedDigraph<f64> {
    let mut graph = WeightedDigraph::new(4);
    graph.add_edge(0, 1, 1.0).unwrap();
    graph.add_edge(1, 2, -3.0).unwrap();
    graph.add_edge(2, 3, 2.0).unwrap();
    graph.add_edge(3, 1, -5.0).unwrap();
    graph
}

// Converts a generated graph to plain f64 weights
pub fn to_f64(graph: &WeightedDigraph<ordered_float::OrderedFloat<f64>>) -> WeightedDigraph<f64> {
    let mut out = WeightedDigraph::new(graph.vertex_count());
    for u in 0..graph.vertex_count() {
        for edge in graph.edges_from(u) {
            out.add_edge(u, edge.dest, edge.weight.into_inner()).unwrap();
        }
    }
    out
}
