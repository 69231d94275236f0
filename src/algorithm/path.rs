use log::error;

use crate::algorithm::SearchResult;
use crate::graph::{Graph, NodeId, Weight};
use crate::{Error, Result};

/// Rebuilds the start-to-goal node sequence from a search's predecessor links.
///
/// Returns an empty sequence when the goal has no cost entry, i.e. it was never
/// reached. Every relaxation strictly lowers a cost, so predecessor links
/// cannot form a cycle; a walk that fails to end at the start node is reported
/// as an invariant violation.
pub fn reconstruct<W>(result: &SearchResult<W>, goal: NodeId) -> Result<Vec<NodeId>>
where
    W: Weight,
{
    if !result.is_reached(goal) {
        return Ok(Vec::new());
    }

    let max_steps = result.predecessors.len();
    let mut path = vec![goal];
    let mut current = goal;

    while let Some(previous) = result.predecessor(current) {
        if path.len() > max_steps {
            error!("Predecessor cycle detected while walking back from {}", goal);
            return Err(Error::InvariantViolation(format!(
                "predecessor cycle on the path to node {}",
                goal
            )));
        }
        path.push(previous);
        current = previous;
    }

    if current != result.start {
        error!("Predecessor chain from {} ends at {} instead of the start", goal, current);
        return Err(Error::InvariantViolation(format!(
            "predecessor chain to node {} ends at node {}, not at start node {}",
            goal, current, result.start
        )));
    }

    path.reverse();
    Ok(path)
}

/// Sums the edge weights along a path, using the lightest of any parallel edges.
///
/// Returns None if two consecutive nodes are not joined by an edge or the sum
/// overflows. A single-node path costs zero.
pub fn path_cost<W, G>(graph: &G, path: &[NodeId]) -> Option<W>
where
    W: Weight,
    G: Graph<W>,
{
    path.windows(2).try_fold(W::zero(), |total, pair| {
        graph
            .edge_weight(pair[0], pair[1])
            .and_then(|weight| total.checked_cost_add(weight))
    })
}
