mod common;

use common::{clrs_graph, floyd_warshall, negative_cycle_graph, to_f64};
use johnson_apsp::algorithm::bellman_ford::BellmanFord;
use johnson_apsp::algorithm::dijkstra::Dijkstra;
use johnson_apsp::algorithm::traits::ShortestPathAlgorithm;
use johnson_apsp::graph::generators::generate_potential_shifted_graph;
use johnson_apsp::graph::{MutableGraph, WeightedDigraph};
use johnson_apsp::Error;
use num_traits::Float;
use ordered_float::OrderedFloat;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_bellman_ford_without_negative_cycle() {
    let mut graph = WeightedDigraph::new(4);
    graph.add_edge(0, 1, -1.0).unwrap();
    graph.add_edge(1, 2, -3.0).unwrap();
    graph.add_edge(2, 3, 2.0).unwrap();
    graph.add_edge(3, 1, 1.0).unwrap();

    let result = BellmanFord::new().run(&graph, 0).unwrap();
    assert!(!result.has_negative_cycle);
    assert_eq!(result.distances, vec![0.0, -1.0, -4.0, -2.0]);
}

#[test]
fn test_bellman_ford_detects_negative_cycle() {
    let graph = negative_cycle_graph();

    let result = BellmanFord::new().run(&graph, 0).unwrap();
    assert!(result.has_negative_cycle);
    assert_eq!(result.distances.len(), 4);

    let via_trait = BellmanFord::new().compute_shortest_paths(&graph, 0);
    assert!(matches!(via_trait, Err(Error::NegativeCycle)));
}

#[test]
fn test_bellman_ford_ignores_unreachable_negative_cycle() {
    // The cycle 1 <-> 2 cannot be reached from 0
    let mut graph = WeightedDigraph::<f64>::new(3);
    graph.add_edge(1, 2, -4.0).unwrap();
    graph.add_edge(2, 1, 1.0).unwrap();

    let result = BellmanFord::new().run(&graph, 0).unwrap();
    assert!(!result.has_negative_cycle);
    assert_eq!(result.distances[0], 0.0);
    assert!(result.distances[1].is_infinite());
    assert!(result.distances[2].is_infinite());
}

#[test]
fn test_bellman_ford_rejects_bad_source() {
    let graph: WeightedDigraph<f64> = WeightedDigraph::new(2);
    assert!(matches!(BellmanFord::new().run(&graph, 2), Err(Error::SourceNotFound)));
}

#[test]
fn test_bellman_ford_matches_floyd_warshall() {
    let mut rng = StdRng::seed_from_u64(11);

    for size in [5, 12, 30] {
        let graph = to_f64(&generate_potential_shifted_graph(size, 0.25, &mut rng));
        let reference = floyd_warshall(&graph);

        for source in 0..size {
            let result = BellmanFord::new().run(&graph, source).unwrap();
            assert!(!result.has_negative_cycle);
            assert_eq!(result.distances, reference[source], "source {}", source);
        }
    }
}

#[test]
fn test_dijkstra_simple() {
    let mut graph = WeightedDigraph::new(4);
    graph.add_edge(0, 1, 2.0).unwrap();
    graph.add_edge(0, 2, 4.0).unwrap();
    graph.add_edge(1, 2, 1.0).unwrap();
    graph.add_edge(1, 3, 7.0).unwrap();
    graph.add_edge(2, 3, 3.0).unwrap();

    let result = Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap();
    assert_eq!(result.source, 0);
    assert_eq!(result.distances, vec![0.0, 2.0, 3.0, 6.0]);
    assert_eq!(result.reachable_count(), 4);
}

#[test]
fn test_dijkstra_unreachable_and_parallel_edges() {
    let mut graph = WeightedDigraph::new(4);
    graph.add_edge(0, 1, OrderedFloat(9.0)).unwrap();
    graph.add_edge(0, 1, OrderedFloat(2.0)).unwrap();
    graph.add_edge(1, 2, OrderedFloat(0.0)).unwrap();

    let result = Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap();
    assert_eq!(result.distance(1), Some(OrderedFloat(2.0)));
    assert_eq!(result.distance(2), Some(OrderedFloat(2.0)));
    assert_eq!(result.distance(3), None);
    assert!(result.distances[3].is_infinite());
    assert_eq!(result.reachable_count(), 3);
}

#[test]
fn test_dijkstra_rejects_negative_weights_and_bad_source() {
    let graph = clrs_graph();
    assert!(matches!(
        Dijkstra::new().compute_shortest_paths(&graph, 0),
        Err(Error::NegativeWeight(w)) if w < 0.0
    ));
    assert!(matches!(
        Dijkstra::new().compute_shortest_paths(&graph, 4),
        Err(Error::SourceNotFound)
    ));
}

#[test]
fn test_dijkstra_matches_floyd_warshall_on_non_negative_graph() {
    let mut rng = StdRng::seed_from_u64(5);
    let shifted = to_f64(&generate_potential_shifted_graph(25, 0.2, &mut rng));

    let graph = shifted.map_weights(|_, e| e.weight.abs());

    let reference = floyd_warshall(&graph);
    for source in 0..25 {
        let row = Dijkstra::new().distances_from(&graph, source);
        assert_eq!(row, reference[source], "source {}", source);
    }
}
