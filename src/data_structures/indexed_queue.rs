use std::collections::HashMap;
use std::fmt::Debug;

use crate::data_structures::Frontier;
use crate::graph::NodeId;

/// A binary min-heap over node ids that tracks each node's heap position.
///
/// Each node appears at most once. Pushing a node that is already queued
/// lowers its priority in place (decrease-key); pushes that would raise the
/// priority are ignored. Memory stays bounded by the number of queued nodes
/// instead of the number of relaxations.
#[derive(Debug, Clone)]
pub struct IndexedPriorityQueue<P>
where
    P: Ord + Copy + Debug,
{
    /// Heap-ordered (priority, node) entries
    heap: Vec<(P, NodeId)>,

    /// Current index of each queued node in `heap`
    positions: HashMap<NodeId, usize>,
}

impl<P> IndexedPriorityQueue<P>
where
    P: Ord + Copy + Debug,
{
    /// Creates a new empty queue
    pub fn new() -> Self {
        IndexedPriorityQueue {
            heap: Vec::new(),
            positions: HashMap::new(),
        }
    }

    /// Returns true if no node is queued
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of queued nodes
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns true if the node is currently queued
    pub fn contains(&self, node: NodeId) -> bool {
        self.positions.contains_key(&node)
    }

    /// Returns the queued priority of a node
    pub fn priority(&self, node: NodeId) -> Option<P> {
        self.positions.get(&node).map(|&index| self.heap[index].0)
    }

    /// Inserts a node, or lowers its priority if it is already queued.
    ///
    /// Returns true if the queue changed.
    pub fn push_or_decrease(&mut self, priority: P, node: NodeId) -> bool {
        match self.positions.get(&node) {
            Some(&index) => {
                if priority >= self.heap[index].0 {
                    return false;
                }
                self.heap[index].0 = priority;
                self.sift_up(index);
            }
            None => {
                self.heap.push((priority, node));
                let index = self.heap.len() - 1;
                self.positions.insert(node, index);
                self.sift_up(index);
            }
        }
        true
    }

    /// Removes and returns the node with the smallest priority
    pub fn pop_min(&mut self) -> Option<(P, NodeId)> {
        if self.heap.is_empty() {
            return None;
        }

        let last = self.heap.len() - 1;
        self.swap(0, last);
        let (priority, node) = self.heap.pop()?;
        self.positions.remove(&node);
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Some((priority, node))
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.positions.insert(self.heap[a].1, a);
        self.positions.insert(self.heap[b].1, b);
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.heap[index].0 < self.heap[parent].0 {
                self.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * index + 1;
            if left >= len {
                break;
            }

            let right = left + 1;
            let smaller = if right < len && self.heap[right].0 < self.heap[left].0 {
                right
            } else {
                left
            };

            if self.heap[smaller].0 < self.heap[index].0 {
                self.swap(index, smaller);
                index = smaller;
            } else {
                break;
            }
        }
    }
}

impl<P> Default for IndexedPriorityQueue<P>
where
    P: Ord + Copy + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<P> Frontier<P> for IndexedPriorityQueue<P>
where
    P: Ord + Copy + Debug,
{
    fn push(&mut self, priority: P, node: NodeId) {
        self.push_or_decrease(priority, node);
    }

    fn pop_min(&mut self) -> Option<(P, NodeId)> {
        IndexedPriorityQueue::pop_min(self)
    }

    fn is_empty(&self) -> bool {
        IndexedPriorityQueue::is_empty(self)
    }

    fn len(&self) -> usize {
        IndexedPriorityQueue::len(self)
    }
}
