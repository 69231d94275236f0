pub mod indexed_queue;
pub mod priority_queue;

pub use indexed_queue::IndexedPriorityQueue;
pub use priority_queue::MinPriorityQueue;

use crate::graph::NodeId;

/// The set of pending (priority, node) entries a best-first search draws from
pub trait Frontier<P> {
    /// Queues a node with the given priority
    fn push(&mut self, priority: P, node: NodeId);

    /// Removes the entry with the smallest priority
    fn pop_min(&mut self) -> Option<(P, NodeId)>;

    /// Returns true if nothing is queued
    fn is_empty(&self) -> bool;

    /// Returns the number of queued entries
    fn len(&self) -> usize;
}
