use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::algorithm::{QueueKind, SearchStats};
use crate::graph::{DirectedGraph, Graph, LoadReport, NodeId};

/// Edge-list upload creating a new graph session
#[derive(Debug, Deserialize)]
pub struct GraphUploadRequest {
    #[serde(default)]
    pub name: Option<String>,
    /// Edge-list text, one `from to weight` triple per line
    pub edges: String,
}

/// Parameters for a shortest path query
#[derive(Debug, Deserialize)]
pub struct PathRequest {
    pub start: NodeId,
    pub goal: NodeId,
    #[serde(default = "default_queue")]
    pub queue: String,
    #[serde(default)]
    pub max_expansions: Option<usize>,
}

fn default_queue() -> String { "lazy".to_string() }

impl PathRequest {
    /// Maps the requested queue name onto a frontier implementation
    pub fn queue_kind(&self) -> Option<QueueKind> {
        match self.queue.as_str() {
            "lazy" => Some(QueueKind::Lazy),
            "decrease-key" | "decrease_key" => Some(QueueKind::DecreaseKey),
            _ => None,
        }
    }
}

/// Line counts from parsing an uploaded edge list
#[derive(Debug, Clone, Serialize)]
pub struct LoadSummary {
    pub edges: usize,
    pub ignored: usize,
    pub skipped: usize,
}

impl From<LoadReport> for LoadSummary {
    fn from(report: LoadReport) -> Self {
        LoadSummary {
            edges: report.edges,
            ignored: report.ignored,
            skipped: report.skipped,
        }
    }
}

/// Public view of a graph session
#[derive(Debug, Clone, Serialize)]
pub struct GraphSummary {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub node_count: usize,
    pub edge_count: usize,
    pub load: LoadSummary,
}

/// Work counters reported with each query
#[derive(Debug, Clone, Serialize)]
pub struct SearchMetrics {
    pub expansions: usize,
    pub relaxations: usize,
    pub pushes: usize,
    pub stale_skipped: usize,
    pub peak_frontier: usize,
}

impl From<SearchStats> for SearchMetrics {
    fn from(stats: SearchStats) -> Self {
        SearchMetrics {
            expansions: stats.expansions,
            relaxations: stats.relaxations,
            pushes: stats.pushes,
            stale_skipped: stats.stale_skipped,
            peak_frontier: stats.peak_frontier,
        }
    }
}

/// Response containing the answer to a shortest path query
#[derive(Debug, Clone, Serialize)]
pub struct PathResponse {
    pub query_id: Uuid,
    pub session_id: Uuid,
    pub start: NodeId,
    pub goal: NodeId,
    pub reachable: bool,
    pub path: Vec<NodeId>,
    pub cost: Option<u64>,
    pub execution_time_ms: f64,
    pub metrics: SearchMetrics,
}

/// Error response for API
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub details: Option<serde_json::Value>,
}

/// A loaded graph kept in memory between queries
#[derive(Debug, Clone)]
pub struct GraphSession {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub graph: Arc<DirectedGraph<u64>>,
    pub report: LoadReport,
}

impl GraphSession {
    pub fn new(name: String, graph: DirectedGraph<u64>, report: LoadReport) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            created_at: Utc::now(),
            graph: Arc::new(graph),
            report,
        }
    }

    pub fn summary(&self) -> GraphSummary {
        GraphSummary {
            id: self.id,
            name: self.name.clone(),
            created_at: self.created_at,
            node_count: self.graph.node_count(),
            edge_count: self.graph.edge_count(),
            load: self.report.into(),
        }
    }
}
