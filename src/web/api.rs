use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use log::{debug, info, warn};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Instant;
use uuid::Uuid;

use crate::algorithm::dijkstra::Dijkstra;
use crate::algorithm::query::{self, Query};
use crate::graph::load_edge_list_str;
use crate::web::models::*;
use crate::Error;

type ApiError = (StatusCode, Json<ErrorResponse>);

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<Mutex<HashMap<Uuid, GraphSession>>>,
    /// Sessions kept before the oldest is evicted
    pub max_sessions: usize,
    /// Largest accepted edge-list upload, in bytes
    pub max_upload_bytes: usize,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_limits(100, 64 * 1024 * 1024)
    }

    pub fn with_limits(max_sessions: usize, max_upload_bytes: usize) -> Self {
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
            max_sessions: max_sessions.max(1),
            max_upload_bytes,
        }
    }

    fn sessions(&self) -> MutexGuard<'_, HashMap<Uuid, GraphSession>> {
        // Sessions are only inserted or removed whole, so a poisoned map is still consistent
        self.sessions.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Create the API router
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/api/graphs", post(upload_graph).get(list_graphs))
        .route("/api/graphs/:session_id", get(get_graph))
        .route("/api/graphs/:session_id/path", post(find_path))
        .route("/api/health", get(health_check))
}

fn api_error(status: StatusCode, error: &str, message: String) -> ApiError {
    (status, Json(ErrorResponse {
        error: error.to_string(),
        message,
        details: None,
    }))
}

fn session_not_found() -> ApiError {
    api_error(StatusCode::NOT_FOUND, "session_not_found", "Session not found".to_string())
}

/// Parse an uploaded edge list and store it as a new session
pub async fn upload_graph(
    State(state): State<AppState>,
    Json(request): Json<GraphUploadRequest>,
) -> Result<Json<GraphSummary>, ApiError> {
    if request.edges.len() > state.max_upload_bytes {
        return Err(api_error(
            StatusCode::PAYLOAD_TOO_LARGE,
            "upload_too_large",
            format!("Edge list exceeds {} bytes", state.max_upload_bytes),
        ));
    }

    let edges = request.edges;
    let loaded = tokio::task::spawn_blocking(move || load_edge_list_str(&edges))
        .await
        .map_err(|err| api_error(StatusCode::INTERNAL_SERVER_ERROR, "load_failed", err.to_string()))?;

    let (graph, report) = match loaded {
        Ok(loaded) => loaded,
        Err(err @ Error::NegativeWeightInput { .. }) => {
            return Err(api_error(StatusCode::BAD_REQUEST, "negative_weight", err.to_string()));
        }
        Err(err) => {
            return Err(api_error(StatusCode::INTERNAL_SERVER_ERROR, "load_failed", err.to_string()));
        }
    };

    let name = request.name.unwrap_or_else(|| "unnamed".to_string());
    let session = GraphSession::new(name, graph, report);
    let summary = session.summary();

    {
        let mut sessions = state.sessions();
        while sessions.len() >= state.max_sessions {
            let oldest = sessions
                .values()
                .min_by_key(|session| session.created_at)
                .map(|session| session.id);
            match oldest {
                Some(id) => {
                    warn!("Evicting graph session {} to stay within {} sessions", id, state.max_sessions);
                    sessions.remove(&id);
                }
                None => break,
            }
        }
        sessions.insert(session.id, session);
    }

    info!(
        "Created graph session {} ({} nodes, {} edges, {} lines skipped)",
        summary.id, summary.node_count, summary.edge_count, summary.load.skipped
    );

    Ok(Json(summary))
}

/// List all graph sessions
pub async fn list_graphs(State(state): State<AppState>) -> Json<Vec<GraphSummary>> {
    let sessions = state.sessions();
    let mut summaries: Vec<GraphSummary> = sessions.values().map(GraphSession::summary).collect();
    summaries.sort_by_key(|summary| summary.created_at);
    Json(summaries)
}

/// Get a graph session summary
pub async fn get_graph(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<GraphSummary>, ApiError> {
    let sessions = state.sessions();
    sessions
        .get(&session_id)
        .map(|session| Json(session.summary()))
        .ok_or_else(session_not_found)
}

/// Answer a shortest path query against a stored graph
pub async fn find_path(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<PathRequest>,
) -> Result<Json<PathResponse>, ApiError> {
    let graph = state
        .sessions()
        .get(&session_id)
        .map(|session| Arc::clone(&session.graph))
        .ok_or_else(session_not_found)?;

    let Some(queue) = request.queue_kind() else {
        return Err(api_error(
            StatusCode::BAD_REQUEST,
            "invalid_queue",
            format!("Unknown queue: {}", request.queue),
        ));
    };

    let mut dijkstra = Dijkstra::new().with_queue(queue);
    if let Some(limit) = request.max_expansions {
        dijkstra = dijkstra.with_expansion_limit(limit);
    }

    debug!(
        "Path query {} -> {} on session {} ({:?} queue, limit {:?})",
        request.start,
        request.goal,
        session_id,
        dijkstra.queue(),
        dijkstra.expansion_limit()
    );

    let path_query = Query::new(request.start, request.goal);
    let start_time = Instant::now();
    let answer = tokio::task::spawn_blocking(move || query::answer(&dijkstra, graph.as_ref(), path_query))
        .await
        .map_err(|err| api_error(StatusCode::INTERNAL_SERVER_ERROR, "search_failed", err.to_string()))?;
    let execution_time = start_time.elapsed();

    match answer {
        Ok(answer) => Ok(Json(PathResponse {
            query_id: Uuid::new_v4(),
            session_id,
            start: request.start,
            goal: request.goal,
            reachable: answer.is_reachable(),
            path: answer.path,
            cost: answer.cost,
            execution_time_ms: execution_time.as_secs_f64() * 1000.0,
            metrics: answer.stats.into(),
        })),
        Err(err @ Error::StartNotFound(_)) => {
            Err(api_error(StatusCode::BAD_REQUEST, "start_not_found", err.to_string()))
        }
        Err(err @ Error::ExpansionLimitReached(_)) => {
            Err(api_error(StatusCode::UNPROCESSABLE_ENTITY, "expansion_limit_reached", err.to_string()))
        }
        Err(err) => Err(api_error(StatusCode::INTERNAL_SERVER_ERROR, "search_failed", err.to_string())),
    }
}

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION")
    }))
}
