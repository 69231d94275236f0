use std::collections::HashMap;

use sparse_paths::algorithm::{path_cost, reconstruct, SearchResult, SearchStats, SearchStatus};
use sparse_paths::{DirectedGraph, Error};

fn result_with(costs: &[(u64, u64)], predecessors: &[(u64, u64)], start: u64) -> SearchResult<u64> {
    SearchResult {
        costs: costs.iter().copied().collect::<HashMap<_, _>>(),
        predecessors: predecessors.iter().copied().collect::<HashMap<_, _>>(),
        start,
        goal: None,
        status: SearchStatus::Exhausted,
        stats: SearchStats::default(),
    }
}

#[test]
fn test_reconstruct_walks_back_and_reverses() {
    let result = result_with(&[(0, 0), (2, 1), (1, 2), (3, 3)], &[(2, 0), (1, 2), (3, 1)], 0);

    assert_eq!(reconstruct(&result, 3).unwrap(), vec![0, 2, 1, 3]);
    assert_eq!(reconstruct(&result, 2).unwrap(), vec![0, 2]);
    assert_eq!(reconstruct(&result, 0).unwrap(), vec![0]);
}

#[test]
fn test_reconstruct_unreached_goal_is_empty() {
    let result = result_with(&[(0, 0)], &[], 0);
    assert!(reconstruct(&result, 9).unwrap().is_empty());
}

#[test]
fn test_reconstruct_reports_predecessor_cycle() {
    let result = result_with(&[(0, 0), (1, 1), (2, 2)], &[(1, 2), (2, 1)], 0);

    match reconstruct(&result, 2) {
        Err(Error::InvariantViolation(message)) => assert!(message.contains("cycle")),
        other => panic!("expected invariant violation, got {:?}", other),
    }
}

#[test]
fn test_reconstruct_reports_broken_chain() {
    // Node 5 has a cost but its chain stops at 4, which is not the start
    let result = result_with(&[(0, 0), (4, 1), (5, 2)], &[(5, 4)], 0);
    assert!(matches!(reconstruct(&result, 5), Err(Error::InvariantViolation(_))));
}

#[test]
fn test_path_cost() {
    let graph = DirectedGraph::from_edges([(0, 1, 3u64), (1, 2, 4), (1, 2, 1)]).unwrap();

    assert_eq!(path_cost(&graph, &[0, 1, 2]), Some(4));
    assert_eq!(path_cost(&graph, &[1]), Some(0));
    assert_eq!(path_cost(&graph, &[0, 2]), None);
}
