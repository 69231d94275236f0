use std::io::Write;

use ordered_float::OrderedFloat;
use sparse_paths::graph::{
    load_edge_list_file, load_edge_list_str, DirectedGraph, Graph, LoadReport, MutableGraph,
};
use sparse_paths::Error;

#[test]
fn test_add_edge_registers_both_endpoints() {
    let mut graph: DirectedGraph<u64> = DirectedGraph::new();
    graph.add_edge(7, 3, 5).unwrap();

    assert_eq!(graph.node_count(), 2);
    assert_eq!(graph.edge_count(), 1);
    assert!(graph.has_node(7));
    assert!(graph.has_node(3), "target of an edge must be a node");
    assert_eq!(graph.outgoing_edges(7).unwrap(), &[(3, 5)]);
}

#[test]
fn test_sink_and_absent_node_are_distinguished() {
    let graph = DirectedGraph::from_edges([(1, 2, 4u64)]).unwrap();

    let sink = graph.outgoing_edges(2).unwrap();
    assert!(sink.is_empty());

    match graph.outgoing_edges(99) {
        Err(Error::NodeNotFound(99)) => {}
        other => panic!("expected NodeNotFound, got {:?}", other),
    }
}

#[test]
fn test_outgoing_edges_keep_insertion_order_and_parallel_edges() {
    let graph = DirectedGraph::from_edges([(0, 3, 9u64), (0, 1, 2), (0, 3, 4), (0, 2, 1)]).unwrap();

    assert_eq!(graph.outgoing_edges(0).unwrap(), &[(3, 9), (1, 2), (3, 4), (2, 1)]);
    assert_eq!(graph.edge_count(), 4);
    assert_eq!(graph.edge_weight(0, 3), Some(4), "lightest parallel edge");
    assert_eq!(graph.edge_weight(3, 0), None);
    assert_eq!(graph.out_degree(0), Some(4));
}

#[test]
fn test_node_ids_need_not_be_dense() {
    let mut graph = DirectedGraph::new();
    graph.add_edge(1_000_000_007, 5, 1u64).unwrap();
    assert!(graph.add_node(42));
    assert!(!graph.add_node(42));

    assert_eq!(graph.nodes(), vec![5, 42, 1_000_000_007]);
    assert_eq!(graph.node_count(), 3);
}

#[test]
fn test_negative_float_weight_is_rejected() {
    let mut graph: DirectedGraph<OrderedFloat<f64>> = DirectedGraph::new();
    graph.add_edge(0, 1, OrderedFloat(0.5)).unwrap();

    let err = graph.add_edge(1, 2, OrderedFloat(-1.0)).unwrap_err();
    assert!(matches!(err, Error::NegativeWeight { from: 1, to: 2, .. }));
    assert!(graph.validate_non_negative());
    assert!(!graph.has_node(2));
}

#[test]
fn test_loader_skips_comments_blank_and_malformed_lines() {
    let text = "\
# Directed graph: example
# FromNodeId\tToNodeId\tWeight

0\t1\t4
0 2 1
   # indented comment
2 1 1
1 3
1 3 1 9
x 3 1
1 3 1.5
1\t3\t1
";
    let (graph, report) = load_edge_list_str(text).unwrap();

    assert_eq!(
        report,
        LoadReport {
            edges: 4,
            ignored: 4,
            skipped: 4,
        }
    );
    assert_eq!(graph.node_count(), 4);
    assert_eq!(graph.edge_count(), 4);
    assert_eq!(graph.outgoing_edges(0).unwrap(), &[(1, 4), (2, 1)]);
    assert!(graph.outgoing_edges(3).unwrap().is_empty());
}

#[test]
fn test_loader_fails_loudly_on_negative_weight() {
    let text = "0 1 3\n1 2 -4\n";
    match load_edge_list_str(text) {
        Err(Error::NegativeWeightInput { line: 2, weight }) => assert_eq!(weight, "-4"),
        other => panic!("expected negative weight error, got {:?}", other.map(|(_, r)| r)),
    }
}

#[test]
fn test_loader_rejects_any_signed_weight_token() {
    for (text, token) in [
        ("0 1 -0\n", "-0"),
        ("0 1 -99999999999999999999\n", "-99999999999999999999"),
    ] {
        match load_edge_list_str(text) {
            Err(Error::NegativeWeightInput { line: 1, weight }) => assert_eq!(weight, token),
            other => panic!("expected negative weight error for {:?}, got {:?}", text, other.map(|(_, r)| r)),
        }
    }

    // A lone dash is not a number at all
    let (_, report) = load_edge_list_str("0 1 -\n").unwrap();
    assert_eq!(report.skipped, 1);
}

#[test]
fn test_loader_skips_lines_that_are_not_utf8() {
    let bytes: &[u8] = b"0 1 4\n\xff\xfe garbage\n1 2 3\n";
    let (graph, report) = sparse_paths::graph::load_edge_list(bytes).unwrap();

    assert_eq!(report.edges, 2);
    assert_eq!(report.skipped, 1);
    assert_eq!(graph.edge_weight(0, 1), Some(4));
    assert_eq!(graph.edge_weight(1, 2), Some(3));
}

#[test]
fn test_loader_reads_files() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "# weighted edges").unwrap();
    writeln!(file, "1\t2\t10").unwrap();
    writeln!(file, "2\t3\t0").unwrap();
    file.flush().unwrap();

    let (graph, report) = load_edge_list_file(file.path()).unwrap();
    assert_eq!(report.edges, 2);
    assert_eq!(report.ignored, 1);
    assert_eq!(graph.edge_weight(2, 3), Some(0));
}

#[test]
fn test_loader_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.txt");
    assert!(matches!(load_edge_list_file(missing), Err(Error::Io(_))));
}
