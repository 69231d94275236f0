use crate::graph::{DirectedGraph, MutableGraph, NodeId};
use ordered_float::OrderedFloat;
use rand::prelude::*;
use rand::rngs::StdRng;

/// Generates a random sparse directed graph with `n` nodes and roughly
/// `edges_per_node * n` edges with integer weights in `0..=max_weight`.
///
/// Seeded so that tests and benchmarks are reproducible.
pub fn generate_random(n: usize, edges_per_node: usize, max_weight: u64, seed: u64) -> DirectedGraph<u64> {
    assert!(n > 0, "n must be positive");

    let mut graph = DirectedGraph::with_capacity(n);
    let mut rng = StdRng::seed_from_u64(seed);

    for node in 0..n as NodeId {
        graph.add_node(node);
    }

    for _ in 0..n * edges_per_node {
        let from = rng.gen_range(0..n) as NodeId;
        let to = rng.gen_range(0..n) as NodeId;
        let weight = rng.gen_range(0..=max_weight);
        // Weights are non-negative, so this never fails
        let _ = graph.add_edge(from, to, weight);
    }

    graph
}

/// Generates a `width * height` 4-connected grid laid out row-major
/// (node id = `y * width + x`), with random integer weights in
/// `1..=max_weight` on each directed edge.
///
/// Every weight is at least 1, so the Manhattan distance between cells is an
/// admissible and consistent heuristic on this graph.
pub fn generate_grid(width: usize, height: usize, max_weight: u64, seed: u64) -> DirectedGraph<u64> {
    assert!(max_weight >= 1, "grid weights must be at least 1");

    let mut graph = DirectedGraph::with_capacity(width * height);
    let mut rng = StdRng::seed_from_u64(seed);
    let index = |x: usize, y: usize| -> NodeId { (y * width + x) as NodeId };

    for y in 0..height {
        for x in 0..width {
            let current = index(x, y);
            graph.add_node(current);

            let mut neighbors = Vec::with_capacity(4);
            if x > 0 {
                neighbors.push(index(x - 1, y));
            }
            if x + 1 < width {
                neighbors.push(index(x + 1, y));
            }
            if y > 0 {
                neighbors.push(index(x, y - 1));
            }
            if y + 1 < height {
                neighbors.push(index(x, y + 1));
            }

            for neighbor in neighbors {
                let weight = rng.gen_range(1..=max_weight);
                let _ = graph.add_edge(current, neighbor, weight);
            }
        }
    }

    graph
}

/// Generates a random geometric graph in the unit square.
/// n: number of nodes
/// r: connection radius (nodes within distance r are connected both ways)
///
/// Edge weights are Euclidean distances; the node positions are returned so a
/// straight-line heuristic can be built over them.
pub fn generate_geometric(n: usize, r: f64, seed: u64) -> (DirectedGraph<OrderedFloat<f64>>, Vec<(f64, f64)>) {
    let mut graph = DirectedGraph::with_capacity(n);
    let mut rng = StdRng::seed_from_u64(seed);

    let points: Vec<(f64, f64)> = (0..n)
        .map(|_| (rng.gen_range(0.0..1.0), rng.gen_range(0.0..1.0)))
        .collect();

    for i in 0..n {
        graph.add_node(i as NodeId);
        for j in 0..n {
            if i == j {
                continue;
            }
            let dist = euclidean(points[i], points[j]);
            if dist <= r {
                let _ = graph.add_edge(i as NodeId, j as NodeId, OrderedFloat(dist));
            }
        }
    }

    (graph, points)
}

/// Straight-line distance between two points
pub fn euclidean(a: (f64, f64), b: (f64, f64)) -> f64 {
    let dx = a.0 - b.0;
    let dy = a.1 - b.1;
    (dx * dx + dy * dy).sqrt()
}
