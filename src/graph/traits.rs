use std::fmt::Debug;
use std::ops::Sub;
use num_traits::{Bounded, Zero};

use crate::Result;

/// Opaque node identifier. Any identifier seen in the input is valid.
pub type NodeId = u64;

/// Numeric type usable as an edge weight and as an accumulated path cost.
///
/// Implemented for every bounded, totally ordered numeric type with a zero,
/// which covers the primitive integers and `OrderedFloat<f64>`.
pub trait Weight: Copy + Ord + Debug + Zero + Bounded + Sub<Output = Self> + Send + Sync {
    /// Adds a non-negative `step` to a non-negative cost, or `None` if the sum
    /// would exceed the type's maximum
    fn checked_cost_add(self, step: Self) -> Option<Self> {
        if step > Self::zero() && self > Self::max_value() - step {
            None
        } else {
            Some(self + step)
        }
    }
}

impl<T> Weight for T where T: Copy + Ord + Debug + Zero + Bounded + Sub<Output = T> + Send + Sync {}

/// Trait representing a weighted directed graph
pub trait Graph<W>: Debug
where
    W: Weight,
{
    /// Returns the number of distinct nodes (every endpoint ever added)
    fn node_count(&self) -> usize;

    /// Returns the number of edges in the graph, parallel edges included
    fn edge_count(&self) -> usize;

    /// Returns the outgoing edges of a node in insertion order.
    ///
    /// A sink yields an empty slice; a node that was never added is an error.
    fn outgoing_edges(&self, node: NodeId) -> Result<&[(NodeId, W)]>;

    /// Returns true if the node exists in the graph
    fn has_node(&self, node: NodeId) -> bool;

    /// Returns all node ids in ascending order
    fn nodes(&self) -> Vec<NodeId>;

    /// Gets the lightest weight among the edges `from -> to`, if any
    fn edge_weight(&self, from: NodeId, to: NodeId) -> Option<W> {
        self.outgoing_edges(from)
            .ok()?
            .iter()
            .filter(|(target, _)| *target == to)
            .map(|(_, weight)| *weight)
            .min()
    }
}

/// Trait for building a graph
pub trait MutableGraph<W>: Graph<W>
where
    W: Weight,
{
    /// Registers a node with no edges. Returns false if it already existed.
    fn add_node(&mut self, node: NodeId) -> bool;

    /// Adds a directed edge, registering both endpoints as nodes
    fn add_edge(&mut self, from: NodeId, to: NodeId, weight: W) -> Result<()>;
}
