use std::collections::HashMap;

use crate::algorithm::path;
use crate::graph::{Graph, NodeId, Weight};
use crate::{Error, Result};

/// How a search ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStatus {
    /// The goal was extracted from the frontier at its minimal cost
    Reached,
    /// The frontier ran dry: every node reachable from the start is settled
    /// and the goal (if any) is not among them
    Exhausted,
    /// The configured expansion limit was hit before the goal was settled
    LimitReached,
}

/// Counters collected while a search runs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes settled (extracted with a current entry)
    pub expansions: usize,
    /// Edges examined during relaxation
    pub relaxations: usize,
    /// Entries pushed onto the frontier
    pub pushes: usize,
    /// Obsolete entries discarded on extraction
    pub stale_skipped: usize,
    /// Largest frontier size observed
    pub peak_frontier: usize,
}

/// Result of a best-first search execution
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult<W>
where
    W: Weight,
{
    /// Best known cost of every node the search touched; absent means unreached
    pub costs: HashMap<NodeId, W>,

    /// Node yielding each best known cost; the start and unreached nodes have none
    pub predecessors: HashMap<NodeId, NodeId>,

    /// Start node ID
    pub start: NodeId,

    /// Goal node ID, or None for a full single-source search
    pub goal: Option<NodeId>,

    /// How the search ended
    pub status: SearchStatus,

    /// Work counters
    pub stats: SearchStats,
}

impl<W> SearchResult<W>
where
    W: Weight,
{
    /// Cost of the best known path to `node`; None stands for +infinity
    pub fn cost(&self, node: NodeId) -> Option<W> {
        self.costs.get(&node).copied()
    }

    /// Node preceding `node` on its best known path
    pub fn predecessor(&self, node: NodeId) -> Option<NodeId> {
        self.predecessors.get(&node).copied()
    }

    /// Returns true if the search found any path to `node`
    pub fn is_reached(&self, node: NodeId) -> bool {
        self.costs.contains_key(&node)
    }

    /// Path from the start to `node` along predecessor links; empty if unreached
    pub fn path_to(&self, node: NodeId) -> Result<Vec<NodeId>> {
        path::reconstruct(self, node)
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: Weight,
    G: Graph<W>,
{
    /// Search from `start` until `goal` is settled or the frontier is exhausted
    fn search(&self, graph: &G, start: NodeId, goal: NodeId) -> Result<SearchResult<W>>;

    /// Settle every node reachable from `start`
    fn search_all(&self, graph: &G, start: NodeId) -> Result<SearchResult<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Get the shortest path from start to goal as a sequence of nodes.
    ///
    /// An empty sequence means the goal is unreachable.
    fn shortest_path(&self, graph: &G, start: NodeId, goal: NodeId) -> Result<Vec<NodeId>> {
        let result = self.search(graph, start, goal)?;
        if result.status == SearchStatus::LimitReached {
            return Err(Error::ExpansionLimitReached(result.stats.expansions));
        }
        path::reconstruct(&result, goal)
    }
}
