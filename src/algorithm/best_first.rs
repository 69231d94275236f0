use std::collections::HashMap;

use log::{debug, trace, warn};

use crate::algorithm::heuristic::Heuristic;
use crate::algorithm::{SearchResult, SearchStats, SearchStatus};
use crate::data_structures::{Frontier, IndexedPriorityQueue, MinPriorityQueue};
use crate::graph::{Graph, NodeId, Weight};
use crate::{Error, Result};

/// Which frontier implementation the search draws from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QueueKind {
    /// Plain binary heap; superseded entries stay queued and are skipped when popped
    #[default]
    Lazy,
    /// Position-tracking heap that lowers a queued node's priority in place
    DecreaseKey,
}

/// Heap-driven best-first search parameterized by a heuristic.
///
/// Frontier entries are ordered by `cost + heuristic(node, goal)`. With the
/// zero heuristic this is Dijkstra's algorithm; with an admissible, consistent
/// heuristic it is A*. Edge weights must be non-negative.
///
/// Each call owns its cost map, predecessor map and frontier, so one instance
/// can serve concurrent searches over the same immutable graph.
#[derive(Debug, Clone)]
pub struct BestFirstSearch<H> {
    /// Remaining-cost estimate
    heuristic: H,
    /// Frontier implementation
    queue: QueueKind,
    /// Maximum number of expansions before giving up (None = unbounded)
    expansion_limit: Option<usize>,
}

impl<H> BestFirstSearch<H> {
    /// Create a new search with the given heuristic and default settings
    pub fn new(heuristic: H) -> Self {
        BestFirstSearch {
            heuristic,
            queue: QueueKind::Lazy,
            expansion_limit: None,
        }
    }

    /// Set the frontier implementation
    pub fn with_queue(mut self, queue: QueueKind) -> Self {
        self.queue = queue;
        self
    }

    /// Stop after this many expansions if the goal has not been settled
    pub fn with_expansion_limit(mut self, limit: usize) -> Self {
        self.expansion_limit = Some(limit);
        self
    }

    /// The injected heuristic
    pub fn heuristic(&self) -> &H {
        &self.heuristic
    }

    /// The configured frontier implementation
    pub fn queue(&self) -> QueueKind {
        self.queue
    }

    /// The configured expansion limit
    pub fn expansion_limit(&self) -> Option<usize> {
        self.expansion_limit
    }

    /// Runs the search from `start`.
    ///
    /// With a goal, the search ends as soon as the goal is extracted from the
    /// frontier. Without one, it settles every reachable node and the heuristic
    /// is not consulted.
    pub fn run<W, G>(&self, graph: &G, start: NodeId, goal: Option<NodeId>) -> Result<SearchResult<W>>
    where
        W: Weight,
        G: Graph<W> + ?Sized,
        H: Heuristic<W>,
    {
        match self.queue {
            QueueKind::Lazy => self.run_with(graph, start, goal, MinPriorityQueue::<W, NodeId>::new()),
            QueueKind::DecreaseKey => {
                self.run_with(graph, start, goal, IndexedPriorityQueue::<W>::new())
            }
        }
    }

    fn run_with<W, G, F>(
        &self,
        graph: &G,
        start: NodeId,
        goal: Option<NodeId>,
        mut frontier: F,
    ) -> Result<SearchResult<W>>
    where
        W: Weight,
        G: Graph<W> + ?Sized,
        H: Heuristic<W>,
        F: Frontier<W>,
    {
        if !graph.has_node(start) {
            return Err(Error::StartNotFound(start));
        }
        if let Some(goal) = goal {
            if !graph.has_node(goal) {
                warn!("Goal node {} is not in the graph; it cannot be reached", goal);
            }
        }

        debug!("Starting best-first search from {} (goal: {:?}, queue: {:?})", start, goal, self.queue);

        let estimate = |node: NodeId| match goal {
            Some(goal) => self.heuristic.estimate(node, goal),
            None => W::zero(),
        };

        let mut costs: HashMap<NodeId, W> = HashMap::new();
        let mut predecessors: HashMap<NodeId, NodeId> = HashMap::new();
        let mut stats = SearchStats::default();
        let mut status = SearchStatus::Exhausted;

        costs.insert(start, W::zero());
        frontier.push(estimate(start), start);
        stats.pushes = 1;
        stats.peak_frontier = 1;

        while let Some((priority, node)) = frontier.pop_min() {
            let Some(&cost) = costs.get(&node) else {
                return Err(Error::InvariantViolation(format!(
                    "node {} was queued without a cost entry",
                    node
                )));
            };

            // A better entry for this node was pushed after this one
            if priority > cost + estimate(node) {
                stats.stale_skipped += 1;
                continue;
            }

            if Some(node) == goal {
                status = SearchStatus::Reached;
                break;
            }

            if self.expansion_limit.is_some_and(|limit| stats.expansions >= limit) {
                status = SearchStatus::LimitReached;
                break;
            }

            stats.expansions += 1;
            trace!("Expanding node {} at cost {:?}", node, cost);

            for &(next, weight) in graph.outgoing_edges(node)? {
                stats.relaxations += 1;

                if weight < W::zero() {
                    return Err(Error::NegativeWeight {
                        from: node,
                        to: next,
                        weight: format!("{:?}", weight),
                    });
                }

                let tentative = cost
                    .checked_cost_add(weight)
                    .ok_or(Error::CostOverflow { from: node, to: next })?;
                let improves = match costs.get(&next) {
                    None => true,
                    Some(&known) => tentative < known,
                };

                if improves {
                    let priority = tentative
                        .checked_cost_add(estimate(next))
                        .ok_or(Error::CostOverflow { from: node, to: next })?;
                    costs.insert(next, tentative);
                    predecessors.insert(next, node);
                    frontier.push(priority, next);
                    stats.pushes += 1;
                    stats.peak_frontier = stats.peak_frontier.max(frontier.len());
                }
            }
        }

        debug!(
            "Search from {} finished with {:?}: {} expansions, {} relaxations, {} stale entries skipped",
            start, status, stats.expansions, stats.relaxations, stats.stale_skipped
        );

        Ok(SearchResult {
            costs,
            predecessors,
            start,
            goal,
            status,
            stats,
        })
    }
}

impl<H: Default> Default for BestFirstSearch<H> {
    fn default() -> Self {
        Self::new(H::default())
    }
}
