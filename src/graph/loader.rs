//! Edge-list ingestion.
//!
//! The accepted format is one edge per line, `from to weight`, as three
//! whitespace-separated non-negative integers. Parsing is permissive: blank
//! lines and `#` comments are ignored, and lines that do not hold exactly three
//! integer tokens (or are not valid UTF-8) are skipped and counted rather than
//! rejected. The one hard failure is a negative weight, which would break the
//! search engine.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, info};

use crate::graph::directed::DirectedGraph;
use crate::graph::traits::{MutableGraph, NodeId};
use crate::{Error, Result};

/// Summary of a load, reported alongside the graph
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Lines that produced an edge
    pub edges: usize,
    /// Blank and comment lines
    pub ignored: usize,
    /// Malformed lines dropped by the permissive parser
    pub skipped: usize,
}

/// Outcome of parsing a single line
#[derive(Debug, PartialEq, Eq)]
enum Line {
    Edge(NodeId, NodeId, u64),
    Ignored,
    Malformed,
}

fn parse_line(line: &str, line_number: usize) -> Result<Line> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(Line::Ignored);
    }

    let tokens: Vec<&str> = trimmed.split_whitespace().collect();
    let [from, to, weight] = tokens.as_slice() else {
        return Ok(Line::Malformed);
    };

    let (Ok(from), Ok(to)) = (from.parse::<NodeId>(), to.parse::<NodeId>()) else {
        return Ok(Line::Malformed);
    };

    if let Some(digits) = weight.strip_prefix('-') {
        if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::NegativeWeightInput {
                line: line_number,
                weight: weight.to_string(),
            });
        }
    }

    match weight.parse::<u64>() {
        Ok(weight) => Ok(Line::Edge(from, to, weight)),
        Err(_) => Ok(Line::Malformed),
    }
}

/// Loads a graph from any buffered reader of edge-list text
pub fn load_edge_list<R: BufRead>(mut reader: R) -> Result<(DirectedGraph<u64>, LoadReport)> {
    let mut graph = DirectedGraph::new();
    let mut report = LoadReport::default();
    let mut buffer = Vec::new();
    let mut line_number = 0;

    loop {
        buffer.clear();
        if reader.read_until(b'\n', &mut buffer)? == 0 {
            break;
        }
        line_number += 1;

        let Ok(line) = std::str::from_utf8(&buffer) else {
            debug!("Skipping line {}: not valid UTF-8", line_number);
            report.skipped += 1;
            continue;
        };

        match parse_line(line, line_number)? {
            Line::Edge(from, to, weight) => {
                graph.add_edge(from, to, weight)?;
                report.edges += 1;
            }
            Line::Ignored => report.ignored += 1,
            Line::Malformed => {
                debug!("Skipping malformed line {}: {:?}", line_number, line.trim_end());
                report.skipped += 1;
            }
        }
    }

    Ok((graph, report))
}

/// Loads a graph from an edge-list file on disk
pub fn load_edge_list_file<P: AsRef<Path>>(path: P) -> Result<(DirectedGraph<u64>, LoadReport)> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let (graph, report) = load_edge_list(BufReader::new(file))?;

    info!(
        "Loaded {} edges from {} ({} malformed lines skipped)",
        report.edges,
        path.display(),
        report.skipped
    );

    Ok((graph, report))
}

/// Loads a graph from an in-memory edge-list string
pub fn load_edge_list_str(text: &str) -> Result<(DirectedGraph<u64>, LoadReport)> {
    load_edge_list(text.as_bytes())
}
