use std::fmt::Debug;

use crate::data_structures::Frontier;
use crate::graph::NodeId;

/// An array-backed binary min-heap keyed solely by priority.
///
/// The queue is a plain multiset: it never deduplicates items, so the same item
/// may be pushed several times with different priorities. Search code resolves
/// the resulting stale entries lazily when they are popped. Entries with equal
/// priorities come out in an unspecified (but deterministic) order.
#[derive(Debug, Clone)]
pub struct MinPriorityQueue<P, T>
where
    P: Ord + Copy + Debug,
{
    /// Heap-ordered entries: entries[i].0 <= entries[2i+1].0, entries[2i+2].0
    entries: Vec<(P, T)>,
}

impl<P, T> MinPriorityQueue<P, T>
where
    P: Ord + Copy + Debug,
{
    /// Creates a new empty priority queue
    pub fn new() -> Self {
        MinPriorityQueue { entries: Vec::new() }
    }

    /// Creates a new empty priority queue with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        MinPriorityQueue {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Returns true if the priority queue is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of entries, stale ones included
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Inserts an item with the given priority
    pub fn push(&mut self, priority: P, item: T) {
        self.entries.push((priority, item));
        self.sift_up(self.entries.len() - 1);
    }

    /// Removes and returns the entry with the smallest priority
    pub fn pop_min(&mut self) -> Option<(P, T)> {
        if self.entries.is_empty() {
            return None;
        }

        let last = self.entries.len() - 1;
        self.entries.swap(0, last);
        let min = self.entries.pop();
        if !self.entries.is_empty() {
            self.sift_down(0);
        }
        min
    }

    /// Returns the entry with the smallest priority without removing it
    pub fn peek(&self) -> Option<(P, &T)> {
        self.entries.first().map(|(priority, item)| (*priority, item))
    }

    /// Clears the priority queue
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.entries[index].0 < self.entries[parent].0 {
                self.entries.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.entries.len();
        loop {
            let left = 2 * index + 1;
            if left >= len {
                break;
            }

            let right = left + 1;
            let smaller = if right < len && self.entries[right].0 < self.entries[left].0 {
                right
            } else {
                left
            };

            if self.entries[smaller].0 < self.entries[index].0 {
                self.entries.swap(index, smaller);
                index = smaller;
            } else {
                break;
            }
        }
    }
}

impl<P, T> Default for MinPriorityQueue<P, T>
where
    P: Ord + Copy + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<P> Frontier<P> for MinPriorityQueue<P, NodeId>
where
    P: Ord + Copy + Debug,
{
    fn push(&mut self, priority: P, node: NodeId) {
        MinPriorityQueue::push(self, priority, node);
    }

    fn pop_min(&mut self) -> Option<(P, NodeId)> {
        MinPriorityQueue::pop_min(self)
    }

    fn is_empty(&self) -> bool {
        MinPriorityQueue::is_empty(self)
    }

    fn len(&self) -> usize {
        MinPriorityQueue::len(self)
    }
}
