use crate::algorithm::best_first::{BestFirstSearch, QueueKind};
use crate::algorithm::heuristic::Heuristic;
use crate::algorithm::{SearchResult, ShortestPathAlgorithm};
use crate::graph::{Graph, NodeId, Weight};
use crate::Result;

/// A* search: best-first search guided by a remaining-cost heuristic.
///
/// The heuristic must be admissible and consistent for the returned path to be
/// a shortest one. Full single-source searches ignore it and behave exactly
/// like Dijkstra's algorithm.
#[derive(Debug, Clone)]
pub struct AStar<H> {
    engine: BestFirstSearch<H>,
}

impl<H> AStar<H> {
    /// Creates a new A* instance guided by `heuristic`
    pub fn new(heuristic: H) -> Self {
        AStar {
            engine: BestFirstSearch::new(heuristic),
        }
    }

    /// Set the frontier implementation
    pub fn with_queue(mut self, queue: QueueKind) -> Self {
        self.engine = self.engine.with_queue(queue);
        self
    }

    /// Stop after this many expansions if the goal has not been settled
    pub fn with_expansion_limit(mut self, limit: usize) -> Self {
        self.engine = self.engine.with_expansion_limit(limit);
        self
    }

    /// The heuristic guiding this search
    pub fn heuristic(&self) -> &H {
        self.engine.heuristic()
    }

    /// The configured frontier implementation
    pub fn queue(&self) -> QueueKind {
        self.engine.queue()
    }

    /// The configured expansion limit, if any
    pub fn expansion_limit(&self) -> Option<usize> {
        self.engine.expansion_limit()
    }
}

impl<W, G, H> ShortestPathAlgorithm<W, G> for AStar<H>
where
    W: Weight,
    G: Graph<W>,
    H: Heuristic<W>,
{
    fn name(&self) -> &'static str {
        "A*"
    }

    fn search(&self, graph: &G, start: NodeId, goal: NodeId) -> Result<SearchResult<W>> {
        self.engine.run(graph, start, Some(goal))
    }

    fn search_all(&self, graph: &G, start: NodeId) -> Result<SearchResult<W>> {
        self.engine.run(graph, start, None)
    }
}
