use crate::graph::traits::{Graph, MutableGraph, NodeId, Weight};
use crate::{Error, Result};
use std::collections::HashMap;

/// A directed graph implementation using adjacency lists keyed by node id.
///
/// Every endpoint of every edge is a key of the adjacency map, so existence
/// checks never need a separate node set. Parallel edges are all kept in
/// insertion order; a search relaxes each of them, so the lightest one wins.
#[derive(Debug, Clone)]
pub struct DirectedGraph<W = u64>
where
    W: Weight,
{
    /// Outgoing edges for each node: node_id -> [(target_node, weight)]
    outgoing_edges: HashMap<NodeId, Vec<(NodeId, W)>>,

    /// Total number of edges, parallel edges included
    edge_count: usize,
}

impl<W> DirectedGraph<W>
where
    W: Weight,
{
    /// Creates a new empty directed graph
    pub fn new() -> Self {
        DirectedGraph {
            outgoing_edges: HashMap::new(),
            edge_count: 0,
        }
    }

    /// Creates a new directed graph with room for the given number of nodes
    pub fn with_capacity(nodes: usize) -> Self {
        DirectedGraph {
            outgoing_edges: HashMap::with_capacity(nodes),
            edge_count: 0,
        }
    }

    /// Builds a graph from `(from, to, weight)` triples
    pub fn from_edges<I>(edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (NodeId, NodeId, W)>,
    {
        let mut graph = DirectedGraph::new();
        for (from, to, weight) in edges {
            graph.add_edge(from, to, weight)?;
        }
        Ok(graph)
    }

    /// Validate that the graph doesn't have negative weights
    pub fn validate_non_negative(&self) -> bool {
        self.outgoing_edges
            .values()
            .flatten()
            .all(|(_, weight)| *weight >= W::zero())
    }

    /// Returns the number of outgoing edges of a node, or None if it is absent
    pub fn out_degree(&self, node: NodeId) -> Option<usize> {
        self.outgoing_edges.get(&node).map(Vec::len)
    }
}

impl<W> Default for DirectedGraph<W>
where
    W: Weight,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<W> Graph<W> for DirectedGraph<W>
where
    W: Weight,
{
    fn node_count(&self) -> usize {
        self.outgoing_edges.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn outgoing_edges(&self, node: NodeId) -> Result<&[(NodeId, W)]> {
        self.outgoing_edges
            .get(&node)
            .map(Vec::as_slice)
            .ok_or(Error::NodeNotFound(node))
    }

    fn has_node(&self, node: NodeId) -> bool {
        self.outgoing_edges.contains_key(&node)
    }

    fn nodes(&self) -> Vec<NodeId> {
        let mut nodes: Vec<NodeId> = self.outgoing_edges.keys().copied().collect();
        nodes.sort_unstable();
        nodes
    }
}

impl<W> MutableGraph<W> for DirectedGraph<W>
where
    W: Weight,
{
    fn add_node(&mut self, node: NodeId) -> bool {
        if self.outgoing_edges.contains_key(&node) {
            return false;
        }
        self.outgoing_edges.insert(node, Vec::new());
        true
    }

    fn add_edge(&mut self, from: NodeId, to: NodeId, weight: W) -> Result<()> {
        if weight < W::zero() {
            return Err(Error::NegativeWeight {
                from,
                to,
                weight: format!("{:?}", weight),
            });
        }

        self.outgoing_edges.entry(from).or_default().push((to, weight));
        self.outgoing_edges.entry(to).or_default();
        self.edge_count += 1;

        Ok(())
    }
}
