//! Point-to-point queries, singly or in parallel batches.
//!
//! Searches never mutate the graph and own all of their working state, so a
//! batch can fan out across threads over one shared graph.

use rayon::prelude::*;

use crate::algorithm::{path, SearchStats, SearchStatus, ShortestPathAlgorithm};
use crate::graph::{Graph, NodeId, Weight};
use crate::{Error, Result};

/// A start/goal pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Query {
    pub start: NodeId,
    pub goal: NodeId,
}

impl Query {
    pub fn new(start: NodeId, goal: NodeId) -> Self {
        Query { start, goal }
    }
}

/// Answer to a single query
#[derive(Debug, Clone, PartialEq)]
pub struct QueryAnswer<W> {
    pub query: Query,
    /// Start-to-goal node sequence; empty when the goal is unreachable
    pub path: Vec<NodeId>,
    /// Total path cost; None when the goal is unreachable
    pub cost: Option<W>,
    pub stats: SearchStats,
}

impl<W> QueryAnswer<W> {
    pub fn is_reachable(&self) -> bool {
        !self.path.is_empty()
    }
}

/// Answers one query with the given algorithm
pub fn answer<W, G, A>(algorithm: &A, graph: &G, query: Query) -> Result<QueryAnswer<W>>
where
    W: Weight,
    G: Graph<W>,
    A: ShortestPathAlgorithm<W, G>,
{
    let result = algorithm.search(graph, query.start, query.goal)?;
    if result.status == SearchStatus::LimitReached {
        return Err(Error::ExpansionLimitReached(result.stats.expansions));
    }

    let path = path::reconstruct(&result, query.goal)?;
    let cost = if path.is_empty() { None } else { result.cost(query.goal) };

    Ok(QueryAnswer {
        query,
        path,
        cost,
        stats: result.stats,
    })
}

/// Answers independent queries in parallel, preserving input order
pub fn run_queries<W, G, A>(algorithm: &A, graph: &G, queries: &[Query]) -> Vec<Result<QueryAnswer<W>>>
where
    W: Weight,
    G: Graph<W> + Sync,
    A: ShortestPathAlgorithm<W, G> + Sync,
{
    queries
        .par_iter()
        .map(|&query| answer(algorithm, graph, query))
        .collect()
}
