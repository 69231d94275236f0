use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use sparse_paths::algorithm::heuristic::GridManhattan;
use sparse_paths::algorithm::{QueueKind, ShortestPathAlgorithm};
use sparse_paths::data_structures::MinPriorityQueue;
use sparse_paths::graph::generators::{generate_grid, generate_random};
use sparse_paths::{AStar, Dijkstra};

// Size configurations for benchmarks
const SMALL_SIZE: usize = 1_000;
const MEDIUM_SIZE: usize = 10_000;
const LARGE_SIZE: usize = 100_000;

const EDGES_PER_NODE: usize = 4;

fn bench_queue_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("dijkstra_queue");

    for &size in &[SMALL_SIZE, MEDIUM_SIZE, LARGE_SIZE] {
        let graph = generate_random(size, EDGES_PER_NODE, 100, 1);
        let goal = (size - 1) as u64;

        for (label, queue) in [("lazy", QueueKind::Lazy), ("decrease_key", QueueKind::DecreaseKey)] {
            let dijkstra = Dijkstra::new().with_queue(queue);
            group.bench_with_input(BenchmarkId::new(label, size), &graph, |b, graph| {
                b.iter(|| dijkstra.search(black_box(graph), 0, goal))
            });
        }
    }

    group.finish();
}

fn bench_heuristic(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid_point_to_point");

    for &side in &[50usize, 200] {
        let graph = generate_grid(side, side, 10, 3);
        let goal = (side * side - 1) as u64;
        let dijkstra = Dijkstra::new();
        let astar = AStar::new(GridManhattan::new(side));

        group.bench_with_input(BenchmarkId::new("dijkstra", side), &graph, |b, graph| {
            b.iter(|| dijkstra.search(black_box(graph), 0, goal))
        });
        group.bench_with_input(BenchmarkId::new("astar", side), &graph, |b, graph| {
            b.iter(|| astar.search(black_box(graph), 0, goal))
        });
    }

    group.finish();
}

fn bench_priority_queue(c: &mut Criterion) {
    c.bench_function("push_pop_10k", |b| {
        b.iter(|| {
            let mut queue = MinPriorityQueue::with_capacity(10_000);
            for i in 0..10_000u64 {
                queue.push((i * 7919) % 10_007, i);
            }
            while let Some(entry) = queue.pop_min() {
                black_box(entry);
            }
        })
    });
}

criterion_group!(benches, bench_queue_strategies, bench_heuristic, bench_priority_queue);
criterion_main!(benches);
