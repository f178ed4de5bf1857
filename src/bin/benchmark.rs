use std::env;
use std::time::{Duration, Instant};

use johnson_apsp::graph::generators::{
    generate_complete_graph, generate_potential_shifted_graph, generate_random_graph,
};
use johnson_apsp::graph::{Graph, WeightedDigraph};
use johnson_apsp::{ConcurrentStrategy, ExecutionStrategy, SequentialStrategy, WorkerPool};
use ordered_float::OrderedFloat;
use rand::rngs::StdRng;
use rand::SeedableRng;

type Weights = OrderedFloat<f64>;

// Time one strategy on a graph
fn measure<S>(strategy: &S, graph: &WeightedDigraph<Weights>) -> (Duration, bool)
where
    S: ExecutionStrategy<Weights>,
{
    let start = Instant::now();
    let negative_cycle = match strategy.execute(graph) {
        Ok(result) => result.negative_cycle,
        Err(err) => {
            eprintln!("  {} failed: {}", strategy.name(), err);
            false
        }
    };
    (start.elapsed(), negative_cycle)
}

fn report(label: &str, graph: &WeightedDigraph<Weights>) {
    let sequential = SequentialStrategy::new();
    let concurrent = ConcurrentStrategy::new();

    let (seq_time, negative_cycle) = measure(&sequential, graph);
    let (par_time, _) = measure(&concurrent, graph);
    let speedup = seq_time.as_secs_f64() / par_time.as_secs_f64().max(f64::EPSILON);

    println!(
        "{:<28} | {:>6} | {:>14.1} | {:>14.1} | {:>8.2}x{}",
        label,
        graph.edge_count(),
        seq_time.as_secs_f64() * 1000.0,
        par_time.as_secs_f64() * 1000.0,
        speedup,
        if negative_cycle { "  (negative cycle)" } else { "" }
    );
}

fn header(title: &str) {
    println!("\n{}", title);
    println!("{}", "-".repeat(88));
    println!(
        "{:<28} | {:>6} | {:>14} | {:>14} | {:>9}",
        "Graph", "Edges", "Sequential ms", "Concurrent ms", "Speedup"
    );
    println!("{}", "-".repeat(88));
}

fn main() {
    env_logger::init();

    let seed = env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(42u64);
    let mut rng = StdRng::seed_from_u64(seed);

    println!("=====================================================");
    println!("Benchmark: Johnson APSP, sequential vs concurrent");
    println!("Hardware concurrency: {} threads", WorkerPool::optimal_thread_count());
    println!("Seed: {}", seed);
    println!("=====================================================");

    header("Different sizes (density 0.3, no negative cycles)");
    for &size in &[25, 50, 75, 100, 150, 200] {
        let graph = generate_potential_shifted_graph(size, 0.3, &mut rng);
        report(&format!("{} vertices", size), &graph);
    }

    header("Different densities (100 vertices, weights in [-10, 100))");
    for &density in &[0.1, 0.3, 0.5, 0.7] {
        let graph = generate_random_graph(100, density, &mut rng);
        report(&format!("density {:.1}", density), &graph);
    }

    header("Complete graphs");
    for &size in &[15, 25, 35, 45, 55] {
        let graph = generate_complete_graph(size, &mut rng);
        report(&format!("complete K{}", size), &graph);
    }
}
