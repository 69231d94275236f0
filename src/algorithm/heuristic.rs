//! Remaining-cost estimates for best-first search.
//!
//! A heuristic must be admissible (never overestimate the true remaining cost)
//! and consistent (`h(u) <= w(u, v) + h(v)` for every edge) for the search to
//! stop at the first extraction of the goal with a shortest path.

use ordered_float::OrderedFloat;

use crate::graph::generators::euclidean;
use crate::graph::{NodeId, Weight};

/// Estimate of the remaining cost from `node` to `goal`
pub trait Heuristic<W>
where
    W: Weight,
{
    fn estimate(&self, node: NodeId, goal: NodeId) -> W;
}

impl<W, F> Heuristic<W> for F
where
    W: Weight,
    F: Fn(NodeId, NodeId) -> W,
{
    fn estimate(&self, node: NodeId, goal: NodeId) -> W {
        self(node, goal)
    }
}

/// The constant-zero heuristic. Best-first search with it is Dijkstra's algorithm.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroHeuristic;

impl<W> Heuristic<W> for ZeroHeuristic
where
    W: Weight,
{
    fn estimate(&self, _node: NodeId, _goal: NodeId) -> W {
        W::zero()
    }
}

/// Manhattan distance on a row-major grid (`id = y * width + x`), scaled by the
/// smallest edge weight in the grid.
#[derive(Debug, Clone, Copy)]
pub struct GridManhattan {
    width: u64,
    min_weight: u64,
}

impl GridManhattan {
    /// Creates a Manhattan heuristic for a grid whose cheapest edge costs 1
    pub fn new(width: usize) -> Self {
        GridManhattan {
            width: width.max(1) as u64,
            min_weight: 1,
        }
    }

    /// Set the cheapest edge weight of the grid
    pub fn with_min_weight(mut self, min_weight: u64) -> Self {
        self.min_weight = min_weight;
        self
    }
}

impl Heuristic<u64> for GridManhattan {
    fn estimate(&self, node: NodeId, goal: NodeId) -> u64 {
        let (x1, y1) = (node % self.width, node / self.width);
        let (x2, y2) = (goal % self.width, goal / self.width);
        (x1.abs_diff(x2) + y1.abs_diff(y2)) * self.min_weight
    }
}

/// Straight-line distance between node positions in the plane.
///
/// Admissible whenever edge weights are at least the Euclidean length of the
/// edge, as in graphs built by `generate_geometric`. Nodes without a position
/// estimate zero.
#[derive(Debug, Clone)]
pub struct StraightLine {
    positions: Vec<(f64, f64)>,
}

impl StraightLine {
    pub fn new(positions: Vec<(f64, f64)>) -> Self {
        StraightLine { positions }
    }

    fn position(&self, node: NodeId) -> Option<(f64, f64)> {
        usize::try_from(node).ok().and_then(|index| self.positions.get(index).copied())
    }
}

impl Heuristic<OrderedFloat<f64>> for StraightLine {
    fn estimate(&self, node: NodeId, goal: NodeId) -> OrderedFloat<f64> {
        match (self.position(node), self.position(goal)) {
            (Some(a), Some(b)) => OrderedFloat(euclidean(a, b)),
            _ => OrderedFloat(0.0),
        }
    }
}
