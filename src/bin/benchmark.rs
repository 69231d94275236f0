use std::time::{Duration, Instant};

use sparse_paths::algorithm::heuristic::GridManhattan;
use sparse_paths::algorithm::{QueueKind, SearchResult, ShortestPathAlgorithm};
use sparse_paths::graph::generators::{generate_grid, generate_random};
use sparse_paths::graph::Graph;
use sparse_paths::{AStar, Dijkstra, DirectedGraph};

// Run one point-to-point search and report its work counters
fn benchmark_search<A>(name: &str, algorithm: &A, graph: &DirectedGraph<u64>, start: u64, goal: u64) -> Duration
where
    A: ShortestPathAlgorithm<u64, DirectedGraph<u64>>,
{
    let begin = Instant::now();
    let result: SearchResult<u64> = match algorithm.search(graph, start, goal) {
        Ok(result) => result,
        Err(err) => {
            println!("  - {} failed: {}", name, err);
            return Duration::ZERO;
        }
    };
    let duration = begin.elapsed();

    println!(
        "  - {:<22} cost {:>8} | {:>8} expansions | {:>8} stale | peak frontier {:>7} | {:?}",
        name,
        result.cost(goal).map_or("inf".to_string(), |cost| cost.to_string()),
        result.stats.expansions,
        result.stats.stale_skipped,
        result.stats.peak_frontier,
        duration
    );

    duration
}

fn main() {
    env_logger::init();

    let graph_sizes = vec![10_000, 100_000, 500_000];
    let edges_per_node = 4;

    println!("=====================================================");
    println!("Benchmark: lazy vs decrease-key frontier, Dijkstra vs A*");
    println!("=====================================================");

    let lazy = Dijkstra::new();
    let decrease_key = Dijkstra::new().with_queue(QueueKind::DecreaseKey);

    for &size in &graph_sizes {
        println!("\nRandom graph with {} nodes, {} edges per node", size, edges_per_node);
        let graph = generate_random(size, edges_per_node, 100, 42);
        println!("Graph has {} nodes and {} edges", graph.node_count(), graph.edge_count());

        let goal = (size - 1) as u64;
        benchmark_search("Dijkstra (lazy)", &lazy, &graph, 0, goal);
        benchmark_search("Dijkstra (decrease-key)", &decrease_key, &graph, 0, goal);
    }

    for &side in &[100usize, 300, 700] {
        println!("\nGrid {}x{} with weights 1..=10", side, side);
        let graph = generate_grid(side, side, 10, 7);
        let goal = (side * side - 1) as u64;
        let astar = AStar::new(GridManhattan::new(side));

        let dijkstra_time = benchmark_search("Dijkstra (lazy)", &lazy, &graph, 0, goal);
        let astar_time = benchmark_search("A* (Manhattan)", &astar, &graph, 0, goal);

        if astar_time > Duration::ZERO {
            println!(
                "  Speedup A* vs Dijkstra: {:.2}x",
                dijkstra_time.as_secs_f64() / astar_time.as_secs_f64()
            );
        }
    }
}
