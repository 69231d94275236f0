//! Sparse Paths - heap-based best-first shortest path search
//!
//! This library computes shortest paths over large sparse directed graphs loaded
//! from weighted edge-list files. A single best-first search engine covers both
//! Dijkstra's algorithm (zero heuristic) and A* search (admissible, consistent
//! heuristic); the two differ only in which heuristic is injected.
//!
//! Edge weights must be non-negative. Graphs are immutable while a search runs,
//! so independent searches over the same graph can run concurrently.

pub mod algorithm;
pub mod data_structures;
pub mod graph;
pub mod web;

pub use algorithm::{
    astar::AStar, dijkstra::Dijkstra, heuristic::{Heuristic, ZeroHeuristic},
    ShortestPathAlgorithm, SearchResult, SearchStatus,
};
/// Re-export main types for convenient use
pub use graph::directed::DirectedGraph;
pub use graph::{NodeId, Weight};

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Node {0} is not present in the graph")]
    NodeNotFound(NodeId),

    #[error("Start node {0} is not present in the graph")]
    StartNotFound(NodeId),

    #[error("Negative edge weight {weight} on edge {from} -> {to}")]
    NegativeWeight {
        from: NodeId,
        to: NodeId,
        weight: String,
    },

    #[error("Negative edge weight {weight} on line {line}")]
    NegativeWeightInput { line: usize, weight: String },

    #[error("Path cost overflows the weight type when relaxing edge {from} -> {to}")]
    CostOverflow { from: NodeId, to: NodeId },

    #[error("Search stopped after {0} expansions without settling the goal")]
    ExpansionLimitReached(usize),

    #[error("Internal invariant violated: {0}")]
    InvariantViolation(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
