use crate::algorithm::best_first::{BestFirstSearch, QueueKind};
use crate::algorithm::heuristic::ZeroHeuristic;
use crate::algorithm::{SearchResult, ShortestPathAlgorithm};
use crate::graph::{Graph, NodeId, Weight};
use crate::Result;

/// Classic Dijkstra's algorithm: best-first search with the zero heuristic
#[derive(Debug, Clone, Default)]
pub struct Dijkstra {
    engine: BestFirstSearch<ZeroHeuristic>,
}

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra {
            engine: BestFirstSearch::new(ZeroHeuristic),
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

    /// The configured frontier implementation
    pub fn queue(&self) -> QueueKind {
        self.engine.queue()
    }

    /// The configured expansion limit, if any
    pub fn expansion_limit(&self) -> Option<usize> {
        self.engine.expansion_limit()
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dijkstra
where
    W: Weight,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn search(&self, graph: &G, start: NodeId, goal: NodeId) -> Result<SearchResult<W>> {
        self.engine.run(graph, start, Some(goal))
    }

    fn search_all(&self, graph: &G, start: NodeId) -> Result<SearchResult<W>> {
        self.engine.run(graph, start, None)
    }
}
